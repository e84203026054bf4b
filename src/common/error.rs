// src/common/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    #[error("Weather report parse failed at line {line}, column {column}")]
    Report { line: usize, column: usize },

    #[error("Draw call recorder full (capacity {capacity})")]
    RecorderFull { capacity: usize },
}

impl From<serde_json::Error> for IconError {
    fn from(err: serde_json::Error) -> Self {
        IconError::Report {
            line: err.line(),
            column: err.column(),
        }
    }
}

pub type Result<T> = core::result::Result<T, IconError>;
