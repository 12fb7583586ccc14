use thiserror::Error;

/// Rejection reasons for commands that carry bad input.
///
/// Validation failures are always recoverable: the command reports the error
/// synchronously and leaves ledger state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("amount must not be zero")]
    ZeroAmount,
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("initial budget must not be negative")]
    NegativeBudget,
}
