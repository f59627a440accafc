//! Validation errors reported by the cipher engine.

use thiserror::Error;

/// Which input a [`CipherError`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherErrorKind {
    InvalidKey,
    InvalidPlainText,
    InvalidCipherText,
}

/// Rejected input. Each variant carries a description of what was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid open text: {0}")]
    InvalidPlainText(String),
    #[error("invalid cipher text: {0}")]
    InvalidCipherText(String),
}

impl CipherError {
    pub fn kind(&self) -> CipherErrorKind {
        match self {
            CipherError::InvalidKey(_) => CipherErrorKind::InvalidKey,
            CipherError::InvalidPlainText(_) => CipherErrorKind::InvalidPlainText,
            CipherError::InvalidCipherText(_) => CipherErrorKind::InvalidCipherText,
        }
    }

    /// The description without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            CipherError::InvalidKey(detail)
            | CipherError::InvalidPlainText(detail)
            | CipherError::InvalidCipherText(detail) => detail,
        }
    }
}
