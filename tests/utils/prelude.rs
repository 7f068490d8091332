#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{
    mock,
    request::*,
    response::*,
    setup::{App, JWT_SECRET},
    user::User,
};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use leetlab_backend::error;
pub use serde_json::{json, Value};
pub use serial_test::serial;
