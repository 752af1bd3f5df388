use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::check::check_config::GradCheckConfig;
use crate::error::Result;
use crate::math::matrix::Matrix;

/// One probed entry of W.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradCheckSample {
    pub row: usize,
    pub col: usize,
    /// Centered finite difference (f(W + h) - f(W - h)) / 2h.
    pub numerical: f64,
    /// dW[row, col] as returned by the loss function.
    pub analytic: f64,
    /// |numerical - analytic| / (|numerical| + |analytic|); 0 when both are 0.
    pub rel_error: f64,
}

/// Outcome of a sparse gradient check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradCheckReport {
    pub samples: Vec<GradCheckSample>,
}

impl GradCheckReport {
    pub fn max_rel_error(&self) -> f64 {
        self.samples.iter().map(|s| s.rel_error).fold(0.0, f64::max)
    }

    pub fn passes(&self, tolerance: f64) -> bool {
        self.max_rel_error() <= tolerance
    }
}

/// Relative error symmetric in its arguments.
pub fn rel_error(a: f64, b: f64) -> f64 {
    let denom = a.abs() + b.abs();
    if denom == 0.0 { 0.0 } else { (a - b).abs() / denom }
}

/// Compares the analytic gradient of `f` at `w` against centered finite
/// differences on `config.num_checks` random entries.
///
/// `f` is any loss with the kernel signature curried over X, y and reg, e.g.
/// `|w| softmax_loss_vectorized(w, &x, &y, reg)`.
pub fn grad_check_sparse<F>(f: F, w: &Matrix, config: &GradCheckConfig) -> Result<GradCheckReport>
where
    F: Fn(&Matrix) -> Result<(f64, Matrix)>,
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (_, grad) = f(w)?;
    let h = config.step;

    let mut samples = Vec::with_capacity(config.num_checks);
    if w.data.is_empty() {
        return Ok(GradCheckReport { samples });
    }

    let mut probe = w.clone();
    for _ in 0..config.num_checks {
        let row = rng.gen_range(0..w.rows);
        let col = rng.gen_range(0..w.cols);
        let old = w[(row, col)];

        probe[(row, col)] = old + h;
        let (loss_plus, _) = f(&probe)?;
        probe[(row, col)] = old - h;
        let (loss_minus, _) = f(&probe)?;
        probe[(row, col)] = old;

        let numerical = (loss_plus - loss_minus) / (2.0 * h);
        let analytic = grad[(row, col)];
        let sample = GradCheckSample {
            row,
            col,
            numerical,
            analytic,
            rel_error: rel_error(numerical, analytic),
        };
        debug!(row, col, numerical, analytic, rel_error = sample.rel_error, "gradient check");
        samples.push(sample);
    }

    Ok(GradCheckReport { samples })
}
