use tracing::debug;

use crate::error::Result;
use crate::loss::regularization::{l2_gradient, l2_penalty};
use crate::loss::shape::{check_reg, BatchShape};
use crate::math::matrix::Matrix;

/// Softmax loss and gradient, vectorized version.
///
/// Same inputs, outputs and errors as `softmax_loss_naive`; the body only
/// uses whole-matrix operations, no per-example or per-class loop.
pub fn softmax_loss_vectorized(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> Result<(f64, Matrix)> {
    let BatchShape { num_train, dim, num_classes } = BatchShape::validate(w, x, y)?;
    check_reg(reg);
    debug!(num_train, dim, num_classes, reg, "softmax loss (vectorized)");

    let scores = x.dot(w);
    let shifted = scores.sub_column(&scores.max_per_row());
    let exp_scores = shifted.map(f64::exp);
    let row_sums = exp_scores.sum_per_row();
    let correct = shifted.gather(y);

    let inv_n = 1.0 / num_train as f64;
    let data_loss: f64 = row_sums
        .iter()
        .zip(&correct)
        .map(|(sum, c)| sum.ln() - c)
        .sum();
    let loss = data_loss * inv_n + l2_penalty(w, reg);

    // ∂L/∂scores = P - one_hot(y)
    let mut probs = exp_scores.div_column(&row_sums);
    probs.scatter_add(y, -1.0);
    let dw = x.transpose().dot(&probs).scale(inv_n) + l2_gradient(w, reg);

    Ok((loss, dw))
}
