pub mod app;
pub mod drivers;
pub mod render;
pub mod wizard;
