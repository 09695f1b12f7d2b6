//! Driver errors.

use thiserror::Error;
use vlark_lex::{LoadError, TokenizeError};

/// A phase stopped before producing output
///
/// Recoverable problems never end up here; they are collected as
/// diagnostics in [`FrontendOutput`](crate::FrontendOutput).
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The source could not be read or classified
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The source holds no lines
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

impl FrontendError {
    /// Name of the phase that failed
    pub fn phase(&self) -> &'static str {
        match self {
            FrontendError::Load(_) => "load",
            FrontendError::Tokenize(_) => "tokenize",
        }
    }
}

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, FrontendError>;
