pub mod math;
pub mod error;
pub mod loss;
pub mod check;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use error::{LossError, Result};
pub use loss::naive::softmax_loss_naive;
pub use loss::vectorized::softmax_loss_vectorized;
pub use loss::loss_type::SoftmaxImpl;
pub use check::grad_check::grad_check_sparse;
pub use check::compare::compare_implementations;
pub use check::check_config::GradCheckConfig;
