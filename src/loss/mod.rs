pub mod shape;
pub mod regularization;
pub mod naive;
pub mod vectorized;
pub mod loss_type;

pub use shape::BatchShape;
pub use naive::softmax_loss_naive;
pub use vectorized::softmax_loss_vectorized;
pub use loss_type::SoftmaxImpl;
