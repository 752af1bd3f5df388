use crate::math::matrix::Matrix;

/// L2 penalty: 0.5 · reg · Σ W∘W
pub fn l2_penalty(w: &Matrix, reg: f64) -> f64 {
    0.5 * reg * w.sum_squares()
}

/// Gradient of `l2_penalty` w.r.t. W: reg · W
pub fn l2_gradient(w: &Matrix, reg: f64) -> Matrix {
    w.scale(reg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_and_gradient() {
        let w = Matrix::from_rows(vec![vec![1.0, -2.0], vec![0.0, 3.0]]);
        assert_eq!(l2_penalty(&w, 0.1), 0.5 * 0.1 * 14.0);
        assert_eq!(l2_gradient(&w, 2.0), Matrix::from_rows(vec![vec![2.0, -4.0], vec![0.0, 6.0]]));
        assert_eq!(l2_penalty(&w, 0.0), 0.0);
    }
}
