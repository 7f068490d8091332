mod utils;

pub use sea_orm_migration::prelude::*;

mod m20250311_091400_create_users_table;
mod m20250311_093822_create_problems_table;
mod m20250318_101209_create_playlists_table;
mod m20250318_102644_create_playlist_problems_table;
mod m20250402_120331_create_submissions_table;
mod m20250402_121050_create_chat_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250311_091400_create_users_table::Migration),
            Box::new(m20250311_093822_create_problems_table::Migration),
            Box::new(m20250318_101209_create_playlists_table::Migration),
            Box::new(m20250318_102644_create_playlist_problems_table::Migration),
            Box::new(m20250402_120331_create_submissions_table::Migration),
            Box::new(m20250402_121050_create_chat_messages_table::Migration),
        ]
    }
}
