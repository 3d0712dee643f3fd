//! Error types for deck operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while applying a deck option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The option could not be applied.
    #[error("option application failed: {0}")]
    Failed(String),
}

impl OptionError {
    /// Creates an error describing why an option failed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::OptionError;
    ///
    /// let err = OptionError::new("too few cards");
    /// assert_eq!(err.to_string(), "option application failed: too few cards");
    /// ```
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}
