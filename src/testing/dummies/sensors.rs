use crate::core::{SENSOR_COUNT, SensorVector};
use rand::Rng;

/// 0.0, 1.5, 3.0, ... in sensor order.
pub fn ramp_vector() -> SensorVector {
    let mut vals = [0.0; SENSOR_COUNT];
    for (i, v) in vals.iter_mut().enumerate() {
        *v = i as f64 * 1.5;
    }
    SensorVector::new(vals).expect("ramp readings are finite")
}

/// Readings drawn around typical C-MAPSS operating values.
pub fn random_sensor_vector<R: Rng + ?Sized>(rng: &mut R) -> SensorVector {
    const CENTERS: [f64; SENSOR_COUNT] = [
        642.7, 1590.5, 1409.0, 553.4, 2388.1, 9065.0, 47.5, 521.4, 2388.1, 8.44, 393.0, 38.8,
        23.3,
    ];
    let mut vals = [0.0; SENSOR_COUNT];
    for (v, c) in vals.iter_mut().zip(CENTERS) {
        *v = c * rng.random_range(0.98..1.02);
    }
    SensorVector::new(vals).expect("random readings are finite")
}
