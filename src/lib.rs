pub mod core;
pub mod models;
pub mod session;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
