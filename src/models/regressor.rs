use crate::models::ModelError;

/// Dense row-major matrix of model inputs, one sample per row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl FeatureMatrix {
    pub fn from_row(row: &[f64]) -> Self {
        Self {
            data: row.to_vec(),
            rows: 1,
            cols: row.len(),
        }
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ModelError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for r in rows {
            if r.len() != cols {
                return Err(ModelError::FeatureCount {
                    expected: cols,
                    got: r.len(),
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(|i| self.row(i))
    }
}

/// A trained regressor mapping sensor rows to Remaining Useful Life.
pub trait RulModel: Send + Sync {
    fn n_features(&self) -> usize;

    /// One output per input row.
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, ModelError>;

    /// Per-feature weights, when the model can explain itself.
    fn feature_importances(&self) -> Option<Vec<f64>> {
        None
    }
}

pub(crate) fn check_width(model: &dyn RulModel, x: &FeatureMatrix) -> Result<(), ModelError> {
    if x.cols() != model.n_features() {
        return Err(ModelError::FeatureCount {
            expected: model.n_features(),
            got: x.cols(),
        });
    }
    Ok(())
}

pub(crate) fn check_finite(out: Vec<f64>) -> Result<Vec<f64>, ModelError> {
    match out.iter().find(|v| !v.is_finite()) {
        Some(&bad) => Err(ModelError::NonFinite(bad)),
        None => Ok(out),
    }
}
