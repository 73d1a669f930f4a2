// evaluator crate

mod batch;
mod report;

pub use batch::{evaluate_path, evaluate_reader, EvaluateOptions};
pub use report::{OutputFormat, Reporter, Summary};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
