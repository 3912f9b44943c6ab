use thiserror::Error;

use crate::DocumentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The input is neither the digits-only nor the canonical punctuated shape of the document
    #[error("invalid {0} format")]
    InvalidFormat(DocumentKind),

    /// The shape is acceptable but the check digits don't match
    #[error("invalid {0}")]
    InvalidDocument(DocumentKind),
}

impl DocumentError {
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentError::InvalidFormat(kind) | DocumentError::InvalidDocument(kind) => *kind,
        }
    }
}

/// A [DocumentError] together with the value that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source}: {value:?}")]
pub struct IdentifierError {
    source: DocumentError,
    value: String,
}

impl IdentifierError {
    pub(crate) fn new(source: DocumentError, value: impl Into<String>) -> Self {
        Self {
            source,
            value: value.into(),
        }
    }

    /// The underlying error, for matching on the kind of failure.
    pub fn error(&self) -> DocumentError {
        self.source
    }

    /// The input, or its canonical form when only the check digits failed.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<IdentifierError> for DocumentError {
    fn from(err: IdentifierError) -> Self {
        err.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date format, expected YYYY-MM-DD: {0:?}")]
    InvalidDateFormat(String),
}
