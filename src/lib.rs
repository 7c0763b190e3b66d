#[macro_use]
extern crate log;

pub mod api;
pub mod store;
pub mod validate;
