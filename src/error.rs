//! Error types for diagram construction and configuration

use thiserror::Error;

/// Result type for diagram operations
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Configuration rejected at construction time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagramError {
    #[error("leaf radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("total sweep angle must be finite and positive, got {0}")]
    InvalidSweepAngle(f64),

    #[error("selection {style} factor must be finite and positive, got {factor}")]
    InvalidSelectionFactor { style: &'static str, factor: f64 },

    #[error("animation duration must be finite and non-negative, got {0}")]
    InvalidAnimationDuration(f64),

    #[error("invalid diagram config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DiagramError {
    fn from(err: serde_json::Error) -> Self {
        DiagramError::Config(err.to_string())
    }
}
