//! The module contains the errors the engine can report.
//!
//! The only true rejection a well-behaved caller can hit is
//! [`InsufficientBalance`]; the others guard caller contract violations.
//!
//!  [`InsufficientBalance`]: EngineError::InsufficientBalance
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The wallet cannot cover the item's credit price.
    #[error("insufficient balance: need {required} T2C, have {available} T2C")]
    InsufficientBalance { required: i64, available: i64 },
    /// The item exists but is not `Available` (already sold or in process).
    #[error("item not available: {0}")]
    ItemNotAvailable(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid draft: {0}")]
    InvalidDraft(String),
    #[error("export failed: {0}")]
    Export(String),
}
