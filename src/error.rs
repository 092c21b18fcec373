use std::io;

/// Errors produced by the classifier core and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum DigitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A vector handed to the classifier does not match its configured shape.
    #[error("{what} length mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("image decode failed: {0}")]
    Image(String),

    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("label {label} out of range for {classes} classes")]
    UnknownLabel { label: usize, classes: usize },
}

pub type Result<T> = std::result::Result<T, DigitError>;
