mod action_choice;
mod schema;
mod sensor_readings;
mod ui_choice;

pub use action_choice::*;
pub use schema::*;
pub use sensor_readings::SensorReadings;
pub use ui_choice::UIChoice;
