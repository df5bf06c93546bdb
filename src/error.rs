//! Error types for the pontoon library.

use thiserror::Error;

/// Errors produced by the pontoon library.
///
/// Every failure is reported synchronously to the immediate caller. The
/// cipher never logs, retries, or continues past a violated precondition:
/// keystream correctness depends on every precondition holding exactly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PontoonError {
    /// Deck constructed with repeated card values.
    #[error("Deck values must be pairwise distinct")]
    DuplicateValue,
    /// Position outside the deck.
    #[error("Position is outside the deck")]
    IndexOutOfRange,
    /// Card value absent from the deck.
    #[error("Card value is not in the deck")]
    ValueNotFound,
    /// Triple cut given a position outside the deck.
    #[error("Triple cut positions must lie inside the deck")]
    InvalidPosition,
    /// Count cut given a count outside the valid range.
    #[error("Count cut size must be less than the deck size")]
    InvalidCount,
    /// Letter outside A-Z, or an alphabet index outside `1..=52`.
    #[error("Character is not an uppercase letter A-Z")]
    InvalidCharacter,
    /// Keystream generation attempted on a deck that is not a full
    /// 54-card deck holding both jokers.
    #[error("Keystream generation requires a 54-card deck containing both jokers")]
    InvalidDeckConfiguration,
    /// Deck text containing a field that is not a decimal card value.
    #[error("Deck text must be comma-separated decimal card values")]
    MalformedDeckText,
}
