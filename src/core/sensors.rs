use std::fmt::{Display, Formatter};
use std::ops::Index;
use thiserror::Error;

pub const SENSOR_COUNT: usize = 13;

/// Sensor channels fed to the model, in the column order it was trained on.
pub const SENSOR_NAMES: [&str; SENSOR_COUNT] = [
    "sensor_2",
    "sensor_3",
    "sensor_4",
    "sensor_7",
    "sensor_8",
    "sensor_9",
    "sensor_11",
    "sensor_12",
    "sensor_13",
    "sensor_15",
    "sensor_17",
    "sensor_20",
    "sensor_21",
];

#[derive(Debug, Error, PartialEq)]
pub enum SensorError {
    #[error("expected {expected} sensor readings, got {got}")]
    Length { expected: usize, got: usize },

    #[error("reading for {sensor} is not a finite number ({value})")]
    NonFinite { sensor: &'static str, value: f64 },
}

/// One full set of readings, positionally aligned with [`SENSOR_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorVector {
    values: [f64; SENSOR_COUNT],
}

impl SensorVector {
    pub fn new(values: [f64; SENSOR_COUNT]) -> Result<Self, SensorError> {
        for (name, &value) in SENSOR_NAMES.into_iter().zip(values.iter()) {
            if !value.is_finite() {
                return Err(SensorError::NonFinite {
                    sensor: name,
                    value,
                });
            }
        }
        Ok(Self { values })
    }

    pub fn from_slice(values: &[f64]) -> Result<Self, SensorError> {
        let values: [f64; SENSOR_COUNT] =
            values.try_into().map_err(|_| SensorError::Length {
                expected: SENSOR_COUNT,
                got: values.len(),
            })?;
        Self::new(values)
    }

    pub fn zeros() -> Self {
        Self {
            values: [0.0; SENSOR_COUNT],
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        SENSOR_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// `(name, value)` pairs in model column order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        SENSOR_NAMES.into_iter().zip(self.values.iter().copied())
    }
}

impl TryFrom<Vec<f64>> for SensorVector {
    type Error = SensorError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl Index<usize> for SensorVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl Display for SensorVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (name, value) in self.named() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value:.2}")?;
            first = false;
        }
        Ok(())
    }
}
