//! Catalog lookup error types.
//!
//! The scoring engine and the session manager never fail; these errors are
//! for callers that validate identifiers upstream before driving a session.

use thiserror::Error;

/// Errors raised when a caller asks the catalog for something it lacks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No case with this identifier exists.
    #[error("unknown case: {0}")]
    UnknownCase(String),

    /// No assessment item with this identifier exists.
    #[error("unknown assessment item: {0}")]
    UnknownItem(String),
}

impl CatalogError {
    /// The identifier that failed to resolve.
    pub fn id(&self) -> &str {
        match self {
            CatalogError::UnknownCase(id) | CatalogError::UnknownItem(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_identifier() {
        let err = CatalogError::UnknownCase("case-9".into());
        assert_eq!(err.to_string(), "unknown case: case-9");
        assert_eq!(err.id(), "case-9");
        assert_eq!(
            CatalogError::UnknownItem("eval-99".into()).to_string(),
            "unknown assessment item: eval-99"
        );
    }
}
