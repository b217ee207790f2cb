use crate::models::regressor::{check_finite, check_width};
use crate::models::{BuildError, FeatureMatrix, ModelError, RulModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinearParameters {
    #[serde(default)]
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

/// Ordinary linear regressor. Exposes no feature importances.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl TryFrom<LinearParameters> for LinearRegressor {
    type Error = BuildError;

    fn try_from(p: LinearParameters) -> Result<Self, Self::Error> {
        if p.coefficients.is_empty() {
            return Err(BuildError::Empty("coefficients"));
        }
        if !p.intercept.is_finite() || p.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(BuildError::InvalidParameter(
                "linear weights must be finite".into(),
            ));
        }
        Ok(Self {
            intercept: p.intercept,
            coefficients: p.coefficients,
        })
    }
}

impl RulModel for LinearRegressor {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        check_width(self, x)?;
        let out = x
            .iter_rows()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(&self.coefficients)
                        .map(|(v, w)| v * w)
                        .sum::<f64>()
            })
            .collect();
        check_finite(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(intercept: f64, coefficients: Vec<f64>) -> LinearRegressor {
        LinearRegressor::try_from(LinearParameters {
            intercept,
            coefficients,
        })
        .unwrap()
    }

    #[test]
    fn predicts_dot_plus_intercept() {
        let m = model(10.0, vec![2.0, -1.0, 0.5]);
        let x = FeatureMatrix::from_rows(&[vec![1.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]]).unwrap();
        assert_eq!(m.predict(&x).unwrap(), vec![12.0, 10.0]);
    }

    #[test]
    fn is_opaque() {
        assert!(model(0.0, vec![1.0]).feature_importances().is_none());
    }

    #[test]
    fn wrong_width_is_rejected() {
        let m = model(0.0, vec![1.0, 1.0]);
        let err = m.predict(&FeatureMatrix::from_row(&[1.0])).unwrap_err();
        assert!(matches!(
            err,
            ModelError::FeatureCount {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn build_guards() {
        let empty = LinearParameters {
            intercept: 1.0,
            coefficients: vec![],
        };
        assert!(matches!(
            LinearRegressor::try_from(empty),
            Err(BuildError::Empty("coefficients"))
        ));

        let nan = LinearParameters {
            intercept: f64::NAN,
            coefficients: vec![1.0],
        };
        assert!(matches!(
            LinearRegressor::try_from(nan),
            Err(BuildError::InvalidParameter(_))
        ));
    }

    #[test]
    fn overflow_surfaces_as_non_finite() {
        let m = model(0.0, vec![f64::MAX, f64::MAX]);
        let err = m.predict(&FeatureMatrix::from_row(&[2.0, 2.0])).unwrap_err();
        assert!(matches!(err, ModelError::NonFinite(_)));
    }
}
