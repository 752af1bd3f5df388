use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::loss::naive::softmax_loss_naive;
use crate::loss::vectorized::softmax_loss_vectorized;
use crate::math::matrix::Matrix;

/// Selects which softmax kernel computes the loss.
///
/// - `Naive`      — explicit loops; the reference the other one is checked against.
/// - `Vectorized` — whole-matrix operations; same result, faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftmaxImpl {
    Naive,
    Vectorized,
}

impl SoftmaxImpl {
    pub const ALL: [SoftmaxImpl; 2] = [SoftmaxImpl::Naive, SoftmaxImpl::Vectorized];

    /// Loss and dW for one minibatch, dispatched on the selected kernel.
    pub fn compute(self, w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> Result<(f64, Matrix)> {
        match self {
            SoftmaxImpl::Naive      => softmax_loss_naive(w, x, y, reg),
            SoftmaxImpl::Vectorized => softmax_loss_vectorized(w, x, y, reg),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SoftmaxImpl::Naive      => "naive",
            SoftmaxImpl::Vectorized => "vectorized",
        }
    }
}

impl std::fmt::Display for SoftmaxImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
