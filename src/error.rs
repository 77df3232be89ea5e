//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards remain in the deck.
    #[error("no cards remain in the deck")]
    EmptyDeck,
}
