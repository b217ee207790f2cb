mod history;
mod importance;
mod record;
pub mod sensors;

pub use history::History;
pub use importance::FeatureImportance;
pub use record::{LOW_RUL_THRESHOLD, PredictionRecord, RulStatus, round_cycles};
pub use sensors::{SENSOR_COUNT, SENSOR_NAMES, SensorError, SensorVector};
