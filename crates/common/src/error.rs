//! Error types shared across Chartmorph crates.

/// Top-level error type for Chartmorph operations.
#[derive(Debug, thiserror::Error)]
pub enum ChartmorphError {
    /// A malformed dataset or sample sequence was passed to the curve
    /// builder. Indicates a programming or data error upstream; never
    /// retried or silently corrected.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Two paths with incompatible control-point structure were handed to
    /// the transition engine.
    #[error("Shape mismatch: {message}")]
    ShapeMismatch { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ChartmorphError.
pub type ChartmorphResult<T> = Result<T, ChartmorphError>;

impl ChartmorphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
