use crate::core::{SensorError, SensorVector};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn zero_reading() -> f64 {
    0.0
}

/// Form backing the "Predict RUL" action, one field per model input.
///
/// Field order is the model's column order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct SensorReadings {
    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_2", description = "Total temperature at LPC outlet (T24, °R)")]
    pub sensor_2: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_3", description = "Total temperature at HPC outlet (T30, °R)")]
    pub sensor_3: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_4", description = "Total temperature at LPT outlet (T50, °R)")]
    pub sensor_4: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_7", description = "Total pressure at HPC outlet (P30, psia)")]
    pub sensor_7: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_8", description = "Physical fan speed (Nf, rpm)")]
    pub sensor_8: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_9", description = "Physical core speed (Nc, rpm)")]
    pub sensor_9: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_11", description = "Static pressure at HPC outlet (Ps30, psia)")]
    pub sensor_11: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_12", description = "Ratio of fuel flow to Ps30 (phi, pps/psi)")]
    pub sensor_12: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_13", description = "Corrected fan speed (NRf, rpm)")]
    pub sensor_13: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_15", description = "Bypass ratio (BPR)")]
    pub sensor_15: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_17", description = "Bleed enthalpy (htBleed)")]
    pub sensor_17: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_20", description = "HPT coolant bleed (W31, lbm/s)")]
    pub sensor_20: f64,

    #[serde(default = "zero_reading")]
    #[schemars(title = "sensor_21", description = "LPT coolant bleed (W32, lbm/s)")]
    pub sensor_21: f64,
}

impl TryFrom<SensorReadings> for SensorVector {
    type Error = SensorError;

    fn try_from(r: SensorReadings) -> Result<Self, Self::Error> {
        SensorVector::new([
            r.sensor_2,
            r.sensor_3,
            r.sensor_4,
            r.sensor_7,
            r.sensor_8,
            r.sensor_9,
            r.sensor_11,
            r.sensor_12,
            r.sensor_13,
            r.sensor_15,
            r.sensor_17,
            r.sensor_20,
            r.sensor_21,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SENSOR_NAMES;
    use serde_json::{Value, json};

    #[test]
    fn defaults_are_zero() {
        let v = SensorVector::try_from(SensorReadings::default()).unwrap();
        assert_eq!(v, SensorVector::zeros());
    }

    #[test]
    fn missing_fields_apply_defaults() {
        let r: SensorReadings = serde_json::from_value(json!({"sensor_11": 47.5})).unwrap();
        assert_eq!(r.sensor_11, 47.5);
        assert_eq!(r.sensor_2, 0.0);
    }

    #[test]
    fn converts_in_model_column_order() {
        let obj: serde_json::Map<String, Value> = SENSOR_NAMES
            .iter()
            .enumerate()
            .map(|(i, n)| (n.to_string(), json!(i as f64 + 0.25)))
            .collect();
        let r: SensorReadings = serde_json::from_value(Value::Object(obj)).unwrap();
        let v = SensorVector::try_from(r).unwrap();
        for (i, (name, value)) in v.named().enumerate() {
            assert_eq!(name, SENSOR_NAMES[i]);
            assert_eq!(value, i as f64 + 0.25);
        }
    }

    #[test]
    fn serialized_field_order_matches_sensor_names() {
        let v = serde_json::to_value(SensorReadings::default()).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, SENSOR_NAMES.to_vec());
    }

    #[test]
    fn non_finite_reading_is_rejected() {
        let r = SensorReadings {
            sensor_15: f64::NAN,
            ..Default::default()
        };
        assert!(SensorVector::try_from(r).is_err());
    }
}
