use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid panel index")]
    InvalidPanel,
    #[error("Labels must be a permutation of every panel label")]
    InvalidLabels,
}

pub type Result<T> = core::result::Result<T, GameError>;
