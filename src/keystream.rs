//! KeystreamGenerator: drives a 54-card deck through Pontoon rounds.
//!
//! Each keystream letter comes from one or more rounds over the owned
//! [`Deck`]: both jokers are walked down the deck, a triple cut and a count
//! cut rearrange it, and the top card's face value picks the output card by
//! position. A round whose output card is a joker is discarded and another
//! round runs on the state the discarded round left behind; discarded
//! rounds are never rolled back.

use crate::deck::{Deck, DECK_SIZE, JOKER_A, JOKER_B};
use crate::error::PontoonError;
use crate::letters;

/// Generates an unbounded keystream of letters A-Z from an owned deck.
///
/// The generator takes its deck by value: every draw rearranges the deck,
/// so exclusive ownership is what makes the letter sequence well defined.
/// The sequence is not restartable; to reproduce it, clone the deck before
/// constructing the generator and start a fresh generator from the clone.
///
/// Deck shape is checked at the first draw rather than at construction:
/// any arrangement of the 54 cards is a valid key, but a deck of the wrong
/// size or composition can never produce a keystream.
///
/// # Examples
///
/// ```
/// use pontoon::{Deck, KeystreamGenerator};
///
/// let mut generator = KeystreamGenerator::new(Deck::new());
/// assert_eq!(generator.next_letter().unwrap(), 'D');
/// assert_eq!(generator.next_letter().unwrap(), 'W');
/// ```
pub struct KeystreamGenerator {
    deck: Deck,
    validated: bool,
}

impl KeystreamGenerator {
    /// Creates a generator that owns `deck`.
    ///
    /// No validation happens here; see [`next_letter`](Self::next_letter).
    pub fn new(deck: Deck) -> Self {
        KeystreamGenerator {
            deck,
            validated: false,
        }
    }

    /// Returns the next keystream letter, advancing the deck.
    ///
    /// Runs rounds until one produces a non-joker card, then maps the card
    /// value to a letter: values above 26 have 26 subtracted, so 1..26 and
    /// 27..52 collapse onto the same alphabet.
    ///
    /// # Errors
    /// Returns [`PontoonError::InvalidDeckConfiguration`] on the first draw
    /// if the owned deck is not a 54-card deck of values `1..=54` holding
    /// both jokers.
    pub fn next_letter(&mut self) -> Result<char, PontoonError> {
        if !self.validated {
            self.validate_deck()?;
            self.validated = true;
        }

        let mut output = JOKER_B;
        while output == JOKER_A || output == JOKER_B {
            output = self.round()?;
        }
        letters::letter_for(output)
    }

    /// Runs one Pontoon round and returns the output card, joker or not.
    fn round(&mut self) -> Result<u8, PontoonError> {
        // Joker A moves down one place, joker B two.
        self.deck.shift_down_one(JOKER_A)?;
        self.deck.shift_down_one(JOKER_B)?;
        self.deck.shift_down_one(JOKER_B)?;

        let a = self.deck.locate(JOKER_A).ok_or(PontoonError::ValueNotFound)?;
        let b = self.deck.locate(JOKER_B).ok_or(PontoonError::ValueNotFound)?;
        self.deck.triple_cut(a, b)?;

        // The bottom card sets the count; joker B counts as joker A's 53,
        // which makes the cut a no-op when either joker is at the bottom.
        let mut count = self.deck.card_at(DECK_SIZE - 1)?;
        if count == JOKER_B {
            count = JOKER_A;
        }
        self.deck.count_cut(count as usize)?;

        // The top card's face value indexes the output card directly; a
        // top joker B reads the bottom card instead.
        let top = self.deck.card_at(0)?;
        if top == JOKER_B {
            self.deck.card_at(DECK_SIZE - 1)
        } else {
            self.deck.card_at(top as usize)
        }
    }

    /// Checks the 54-card shape once, before the first round.
    ///
    /// Distinctness is already enforced by deck construction, so size 54
    /// plus the value domain plus both jokers pins the composition to the
    /// 52 cards `1..=52` and one of each joker.
    fn validate_deck(&self) -> Result<(), PontoonError> {
        if self.deck.size() != DECK_SIZE {
            return Err(PontoonError::InvalidDeckConfiguration);
        }
        if self.deck.locate(JOKER_A).is_none() || self.deck.locate(JOKER_B).is_none() {
            return Err(PontoonError::InvalidDeckConfiguration);
        }
        if self
            .deck
            .cards()
            .iter()
            .any(|card| !(1..=JOKER_B).contains(card))
        {
            return Err(PontoonError::InvalidDeckConfiguration);
        }
        Ok(())
    }

    /// Returns the current deck state.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consumes the generator and returns the owned deck as-is.
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}
