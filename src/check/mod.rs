pub mod check_config;
pub mod grad_check;
pub mod compare;

pub use check_config::GradCheckConfig;
pub use grad_check::{grad_check_sparse, rel_error, GradCheckReport, GradCheckSample};
pub use compare::{compare_implementations, ImplComparison};
