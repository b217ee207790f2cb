pub mod models;
pub mod scripted_driver;

pub use models::{EmptyOutputModel, FailingModel, FixedModel, RecordingModel};
pub use scripted_driver::{Answer, ScriptedDriver};
