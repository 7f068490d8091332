pub mod macros;
pub mod mock;
pub mod prelude;
mod request;
mod response;
pub mod setup;
pub mod user;

use uuid::Uuid;

#[allow(unused)]
pub fn uuid() -> String {
    Uuid::new_v4()
        .as_simple()
        .encode_lower(&mut Uuid::encode_buffer())
        .to_owned()
}
