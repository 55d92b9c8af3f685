use std::convert::Infallible;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("numeric domain error: {0}")]
    NumericDomain(String),
    #[error("sequence length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("invalid plot config: {0}")]
    Config(#[from] serde_json::Error),
}

// Lets already-typed arguments go through the same `TryInto` entry points as raw ones.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
