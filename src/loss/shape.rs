use tracing::warn;

use crate::error::{LossError, Result};
use crate::math::matrix::Matrix;

/// Dimensions of one validated minibatch.
///
/// - `num_train`   — N, rows of X and length of y
/// - `dim`         — D, columns of X and rows of W
/// - `num_classes` — C, columns of W
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchShape {
    pub num_train: usize,
    pub dim: usize,
    pub num_classes: usize,
}

impl BatchShape {
    /// Checks that `w` (D×C), `x` (N×D) and `y` (N) line up and that every
    /// label is a column of `w`.
    ///
    /// The class count always comes from `w`, never from the labels, so a
    /// batch that happens to miss the last class still yields a D×C gradient.
    pub fn validate(w: &Matrix, x: &Matrix, y: &[usize]) -> Result<BatchShape> {
        if x.cols != w.rows {
            return Err(LossError::ShapeMismatch { x_cols: x.cols, w_rows: w.rows });
        }
        if y.len() != x.rows {
            return Err(LossError::LabelCountMismatch { num_train: x.rows, num_labels: y.len() });
        }
        if x.rows == 0 {
            return Err(LossError::EmptyBatch);
        }
        if let Some(index) = y.iter().position(|&label| label >= w.cols) {
            return Err(LossError::LabelOutOfRange { index, label: y[index], num_classes: w.cols });
        }

        Ok(BatchShape {
            num_train: x.rows,
            dim: w.rows,
            num_classes: w.cols,
        })
    }
}

/// Logs a regularization strength that is negative or not finite.
/// Such values are accepted; the caller owns that choice.
pub(crate) fn check_reg(reg: f64) {
    if !reg.is_finite() || reg < 0.0 {
        warn!(reg, "regularization strength should be a finite value >= 0");
    }
}
