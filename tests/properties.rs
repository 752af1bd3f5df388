use ferrite_softmax::{softmax_loss_naive, softmax_loss_vectorized, Matrix};
use proptest::prelude::*;

/// (W, X, y) with 1..6 examples, 1..5 features and 2..6 classes.
fn batch() -> impl Strategy<Value = (Matrix, Matrix, Vec<usize>)> {
    (1usize..6, 1usize..5, 2usize..6).prop_flat_map(|(n, d, c)| {
        (
            prop::collection::vec(-2.0f64..2.0, d * c),
            prop::collection::vec(-2.0f64..2.0, n * d),
            prop::collection::vec(0..c, n),
        )
            .prop_map(move |(w, x, y)| (Matrix::from_vec(d, c, w), Matrix::from_vec(n, d, x), y))
    })
}

proptest! {
    #[test]
    fn kernels_agree((w, x, y) in batch(), reg in 0.0f64..1.0) {
        let (ln, gn) = softmax_loss_naive(&w, &x, &y, reg).unwrap();
        let (lv, gv) = softmax_loss_vectorized(&w, &x, &y, reg).unwrap();
        prop_assert!((ln - lv).abs() <= 1e-7 * ln.abs() + 1e-15);
        prop_assert_eq!(gn.shape(), gv.shape());
        for (a, b) in gn.data.iter().zip(&gv.data) {
            prop_assert!((a - b).abs() <= 1e-7 * (1.0 + a.abs()));
        }
    }

    #[test]
    fn unregularized_loss_is_positive((w, x, y) in batch()) {
        let (loss, _) = softmax_loss_vectorized(&w, &x, &y, 0.0).unwrap();
        prop_assert!(loss > 0.0);
        prop_assert!(loss.is_finite());
    }

    #[test]
    fn unregularized_gradient_rows_sum_to_zero((w, x, y) in batch()) {
        // Each example's ∂L/∂scores row sums to 0, so every row of dW does too.
        let (_, dw) = softmax_loss_naive(&w, &x, &y, 0.0).unwrap();
        for k in 0..dw.rows {
            prop_assert!(dw.row(k).iter().sum::<f64>().abs() < 1e-10);
        }
    }
}
