//! Error types for Precis.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please provide sufficient text (minimum {min} characters, got {actual}).")]
    InputTooShort { min: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
