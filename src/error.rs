// src/error.rs - Errors raised at the edges of the translator (frame and config loading)
use thiserror::Error;

/// Classification and rendering are total; only loading input can fail.
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("unknown joint group: {0}")]
    UnknownGroup(String),

    /// Angle cell that is not a finite number.
    #[error("invalid angle for joint {joint}: {value}")]
    InvalidAngle { joint: String, value: String },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranslatorError {
    pub fn invalid_angle(joint: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidAngle {
            joint: joint.into(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
