use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid estimate: {0} (must be a finite, non-negative number)")]
    InvalidEstimate(String),

    #[error("Card name must not be empty")]
    InvalidCardName,

    #[error("Invalid board ID: {0}")]
    InvalidBoardId(String),
}
