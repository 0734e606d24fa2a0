use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuiverError {
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("format error: {0}")]
    Format(String),
}

pub type QuiverResult<T> = Result<T, QuiverError>;

pub fn format_error(msg: impl Into<String>) -> QuiverError {
    QuiverError::Format(msg.into())
}

pub fn arithmetic_error(msg: impl Into<String>) -> QuiverError {
    QuiverError::Arithmetic(msg.into())
}
