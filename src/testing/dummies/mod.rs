mod sensors;

pub use sensors::{ramp_vector, random_sensor_vector};
