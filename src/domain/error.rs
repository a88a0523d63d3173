// src/domain/error.rs

use thiserror::Error;

/// Domain errors surfaced by the portfolio and scan layers.
///
/// The taxonomy is deliberately small: storage absence is a default value,
/// not an error, and the summary bridge degrades to fallback text instead of
/// erroring. What remains are caller mistakes and gate rejections.
#[derive(Error, Debug)]
pub enum ProCheckError {
    #[error("unknown tenant id: {0}")]
    UnknownTenant(String),

    #[error("a batch audit sync is already in progress")]
    BatchInProgress,

    #[error("cannot start a batch audit sync on an empty portfolio")]
    EmptyPortfolio,

    #[error("invalid tenant registration: {0}")]
    InvalidRegistration(String),
}
