use std::time::Instant;

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::check::grad_check::rel_error;
use crate::error::Result;
use crate::loss::loss_type::SoftmaxImpl;
use crate::math::matrix::Matrix;

/// Side-by-side result of both softmax kernels on one minibatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImplComparison {
    pub naive_loss: f64,
    pub vectorized_loss: f64,
    /// Symmetric relative difference of the two losses.
    pub loss_rel_error: f64,
    /// ‖dW_naive − dW_vectorized‖ (Frobenius).
    pub grad_difference: f64,
    /// Wall-clock time of each kernel in microseconds.
    pub naive_elapsed_us: u64,
    pub vectorized_elapsed_us: u64,
}

impl ImplComparison {
    /// True when losses and gradients agree within `tolerance`.
    pub fn agrees(&self, tolerance: f64) -> bool {
        self.loss_rel_error <= tolerance && self.grad_difference <= tolerance
    }
}

/// Runs both kernels on the same inputs and reports how far apart they are.
pub fn compare_implementations(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> Result<ImplComparison> {
    let t_start = Instant::now();
    let (naive_loss, naive_grad) = SoftmaxImpl::Naive.compute(w, x, y, reg)?;
    let naive_elapsed_us = t_start.elapsed().as_micros() as u64;

    let t_start = Instant::now();
    let (vectorized_loss, vectorized_grad) = SoftmaxImpl::Vectorized.compute(w, x, y, reg)?;
    let vectorized_elapsed_us = t_start.elapsed().as_micros() as u64;

    let comparison = ImplComparison {
        naive_loss,
        vectorized_loss,
        loss_rel_error: rel_error(naive_loss, vectorized_loss),
        grad_difference: (naive_grad - vectorized_grad).frobenius_norm(),
        naive_elapsed_us,
        vectorized_elapsed_us,
    };
    info!(
        naive_loss,
        vectorized_loss,
        loss_rel_error = comparison.loss_rel_error,
        grad_difference = comparison.grad_difference,
        naive_elapsed_us,
        vectorized_elapsed_us,
        "compared softmax kernels"
    );

    Ok(comparison)
}
