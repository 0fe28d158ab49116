#![allow(dead_code)]

pub mod app_builder;
pub mod factory;
pub mod test_state;
pub mod websocket;

// Not every test binary uses both shortcuts
#[allow(unused_imports)]
pub use app_builder::create_test_app;
#[allow(unused_imports)]
pub use test_state::build_test_state;
