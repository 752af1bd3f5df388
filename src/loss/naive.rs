use tracing::debug;

use crate::error::Result;
use crate::loss::regularization::{l2_gradient, l2_penalty};
use crate::loss::shape::{check_reg, BatchShape};
use crate::math::matrix::Matrix;

/// Softmax loss and gradient, computed with explicit loops.
///
/// Inputs have dimension D, there are C classes, and the minibatch holds N
/// examples:
/// - `w`   — weights, shape (D, C)
/// - `x`   — minibatch, shape (N, D)
/// - `y`   — labels, length N; `y[i] = c` means `x` row i has class c, `0 <= c < C`
/// - `reg` — L2 regularization strength
///
/// Returns the scalar loss and dW with the shape of `w`.
///
/// This is the reference version: per example, per class, per feature.
/// `softmax_loss_vectorized` must agree with it.
pub fn softmax_loss_naive(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> Result<(f64, Matrix)> {
    let BatchShape { num_train, dim, num_classes } = BatchShape::validate(w, x, y)?;
    check_reg(reg);
    debug!(num_train, dim, num_classes, reg, "softmax loss (naive)");

    let mut loss = 0.0_f64;
    let mut dw = Matrix::zeros(dim, num_classes);
    let mut scores = vec![0.0_f64; num_classes];
    let mut exp_scores = vec![0.0_f64; num_classes];

    for i in 0..num_train {
        let xi = x.row(i);

        for (j, s) in scores.iter_mut().enumerate() {
            *s = 0.0;
            for k in 0..dim {
                *s += xi[k] * w[(k, j)];
            }
        }

        // Shift by the row max so exp() cannot overflow.
        let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut denom = 0.0_f64;
        for j in 0..num_classes {
            exp_scores[j] = (scores[j] - max_score).exp();
            denom += exp_scores[j];
        }

        // -log(exp_y / denom), written so an underflowed exp_y stays finite.
        loss += denom.ln() - (scores[y[i]] - max_score);

        for j in 0..num_classes {
            let p = exp_scores[j] / denom;
            for k in 0..dim {
                dw[(k, j)] += p * xi[k];
            }
        }
        for k in 0..dim {
            dw[(k, y[i])] -= xi[k];
        }
    }

    let inv_n = 1.0 / num_train as f64;
    let loss = loss * inv_n + l2_penalty(w, reg);
    let dw = dw.scale(inv_n) + l2_gradient(w, reg);

    Ok((loss, dw))
}
