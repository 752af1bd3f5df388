use thiserror::Error;

/// Errors raised while validating a loss call or persisting its settings.
#[derive(Error, Debug)]
pub enum LossError {
    #[error("shape mismatch: X has {x_cols} columns but W has {w_rows} rows")]
    ShapeMismatch { x_cols: usize, w_rows: usize },

    #[error("label count mismatch: X has {num_train} rows but y has {num_labels} labels")]
    LabelCountMismatch { num_train: usize, num_labels: usize },

    #[error("label {label} at index {index} is out of range for {num_classes} classes")]
    LabelOutOfRange { index: usize, label: usize, num_classes: usize },

    #[error("empty batch: the loss is a mean over examples and needs at least one")]
    EmptyBatch,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LossError>;
