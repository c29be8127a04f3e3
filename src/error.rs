//! Errors raised by list search and the live feed.

use thiserror::Error;

/// Errors surfaced by list operations.
///
/// Search errors are recoverable: key handlers turn them into a transient
/// notice instead of propagating them out of the main loop.
#[derive(Debug, Error)]
pub enum ListError {
    /// A search was repeated before any pattern was ever set.
    #[error("No search pattern specified.")]
    NoPattern,

    /// A full wraparound search found no matching row. The pattern is cleared.
    #[error("Pattern not found: '{0}'.")]
    PatternNotFound(String),

    /// The live feed worker thread could not be started.
    #[error("failed to start live feed worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Result alias for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ListError::NoPattern.to_string(), "No search pattern specified.");
        assert_eq!(
            ListError::PatternNotFound("err".into()).to_string(),
            "Pattern not found: 'err'."
        );
    }
}
