//! Error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BsmError {
    #[error("Invalid option type: {0:?} (expected \"call\" or \"put\")")]
    InvalidOptionType(String),

    #[error("Degenerate contract: {0}")]
    DegenerateContract(String),

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Network error: {0}")]
    Network(String),
}

pub type BsmResult<T> = Result<T, BsmError>;

impl BsmError {
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateContract(msg.into())
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
