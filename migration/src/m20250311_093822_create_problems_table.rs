use crate::utils::create_table_migration;
use entity::problems;

create_table_migration!(problems::Entity);
