//! Deck: an ordered permutation of distinct card values.
//!
//! Implements the mutable 54-card deck the Pontoon cipher operates on,
//! together with the permutation primitives every keystream round is built
//! from: shift-down-one, triple cut, and count cut. A deck is created once
//! and then rearranged in place; it is never resized.
//!
//! Positions are 0-based and independent of face values. The two jokers
//! carry the face values [`JOKER_A`] (53) and [`JOKER_B`] (54).

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::PontoonError;

/// The size of a full cipher deck: four suits of thirteen cards plus two jokers.
pub const DECK_SIZE: usize = 54;

/// Face value of the first joker.
pub const JOKER_A: u8 = 53;

/// Face value of the second joker.
pub const JOKER_B: u8 = 54;

/// An ordered sequence of pairwise-distinct card values.
///
/// Every rearranging operation validates its arguments before touching the
/// cards, so a failed call leaves the ordering untouched. All operations
/// preserve the value multiset and the size; only the order changes.
///
/// Cloning a deck is the only way to replay a keystream: each draw from a
/// [`KeystreamGenerator`](crate::keystream::KeystreamGenerator) rearranges
/// the deck it owns, so a snapshot must be taken before the first draw.
///
/// # Examples
///
/// ```
/// use pontoon::Deck;
///
/// let deck = Deck::new();
/// assert_eq!(deck.size(), 54);
/// assert_eq!(deck.card_at(0).unwrap(), 1);
/// assert_eq!(deck.card_at(53).unwrap(), 54);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<u8>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a full 54-card deck in ascending order `1..=54`.
    pub fn new() -> Self {
        Deck {
            cards: (1..=JOKER_B).collect(),
        }
    }

    /// Creates a deck of `n` cards in ascending order `1..=n`.
    ///
    /// Sizes other than 54 are valid decks but cannot feed a keystream
    /// generator; they exist for the permutation primitives themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontoon::Deck;
    ///
    /// let deck = Deck::with_size(3);
    /// assert_eq!(deck.cards(), &[1, 2, 3]);
    /// ```
    pub fn with_size(n: u8) -> Self {
        Deck {
            cards: (1..=n).collect(),
        }
    }

    /// Creates a deck from an explicit ordering of card values.
    ///
    /// # Parameters
    /// - `values`: Card values read left-to-right as positions `0..n-1`.
    ///
    /// # Errors
    /// Returns [`PontoonError::DuplicateValue`] if any value repeats.
    pub fn from_values(values: Vec<u8>) -> Result<Self, PontoonError> {
        if !Self::all_different(&values) {
            return Err(PontoonError::DuplicateValue);
        }
        Ok(Deck { cards: values })
    }

    /// Returns true when no value in `values` repeats.
    pub fn all_different(values: &[u8]) -> bool {
        values
            .iter()
            .enumerate()
            .all(|(i, value)| !values[i + 1..].contains(value))
    }

    /// Returns the number of cards in the deck.
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns true when the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the current ordering as a slice.
    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    /// Returns the card value at `position`.
    ///
    /// # Errors
    /// Returns [`PontoonError::IndexOutOfRange`] unless `position` is in
    /// `[0, size - 1]`.
    pub fn card_at(&self, position: usize) -> Result<u8, PontoonError> {
        self.cards
            .get(position)
            .copied()
            .ok_or(PontoonError::IndexOutOfRange)
    }

    /// Returns the position of the first occurrence of `value`, or `None`
    /// if the value is not in the deck.
    pub fn locate(&self, value: u8) -> Option<usize> {
        self.cards.iter().position(|&card| card == value)
    }

    /// Shifts the card with face value `value` one position down the deck.
    ///
    /// Any card except the last swaps with the card immediately after it.
    /// The last card instead wraps around to position 1, never position 0:
    /// position 0 is untouched and positions `1..=size-2` move one step
    /// toward the end. The asymmetric landing is a rule of the cipher
    /// scheme, not an off-by-one.
    ///
    /// # Errors
    /// Returns [`PontoonError::ValueNotFound`] if `value` is not in the deck.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontoon::Deck;
    ///
    /// let mut deck = Deck::with_size(5);
    /// deck.shift_down_one(2).unwrap();
    /// assert_eq!(deck.cards(), &[1, 3, 2, 4, 5]);
    ///
    /// // The last card lands at position 1, not position 0.
    /// let mut deck = Deck::with_size(5);
    /// deck.shift_down_one(5).unwrap();
    /// assert_eq!(deck.cards(), &[1, 5, 2, 3, 4]);
    /// ```
    pub fn shift_down_one(&mut self, value: u8) -> Result<(), PontoonError> {
        let position = self.locate(value).ok_or(PontoonError::ValueNotFound)?;
        if position + 1 == self.cards.len() {
            let card = self.cards.remove(position);
            let landing = if self.cards.is_empty() { 0 } else { 1 };
            self.cards.insert(landing, card);
        } else {
            self.cards.swap(position, position + 1);
        }
        Ok(())
    }

    /// Performs a triple cut around the two marker positions.
    ///
    /// With `lo = min(pos1, pos2)` and `hi = max(pos1, pos2)` the deck
    /// splits into three chunks: the cards before `lo`, the cards from `lo`
    /// through `hi` inclusive, and the cards after `hi`. The first and
    /// third chunks exchange places; the middle chunk keeps its relative
    /// order. Applying the cut twice with the same positions does not in
    /// general restore the original order, because the middle chunk's
    /// absolute positions move with the swapped ends.
    ///
    /// # Parameters
    /// - `pos1`: Position of one marker card, counting from 0.
    /// - `pos2`: Position of the other marker card.
    ///
    /// # Errors
    /// Returns [`PontoonError::InvalidPosition`] unless both positions lie
    /// in `[0, size - 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontoon::Deck;
    ///
    /// let mut deck = Deck::with_size(6);
    /// deck.triple_cut(1, 3).unwrap();
    /// assert_eq!(deck.cards(), &[5, 6, 2, 3, 4, 1]);
    /// ```
    pub fn triple_cut(&mut self, pos1: usize, pos2: usize) -> Result<(), PontoonError> {
        if pos1 >= self.cards.len() || pos2 >= self.cards.len() {
            return Err(PontoonError::InvalidPosition);
        }
        let lo = pos1.min(pos2);
        let hi = pos1.max(pos2);
        let mut next = Vec::with_capacity(self.cards.len());
        next.extend_from_slice(&self.cards[hi + 1..]);
        next.extend_from_slice(&self.cards[lo..=hi]);
        next.extend_from_slice(&self.cards[..lo]);
        self.cards = next;
        Ok(())
    }

    /// Performs a count cut: the first `n` cards move to just above the
    /// last card, which never moves.
    ///
    /// `n = 0` and `n = size - 1` are no-ops: they move nothing, or
    /// everything except the fixed last card.
    ///
    /// # Errors
    /// Returns [`PontoonError::InvalidCount`] unless `n` is in
    /// `[0, size - 1]`. An empty deck has no valid count.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontoon::Deck;
    ///
    /// let mut deck = Deck::with_size(6);
    /// deck.count_cut(2).unwrap();
    /// assert_eq!(deck.cards(), &[3, 4, 5, 1, 2, 6]);
    /// ```
    pub fn count_cut(&mut self, n: usize) -> Result<(), PontoonError> {
        if self.cards.is_empty() || n > self.cards.len() - 1 {
            return Err(PontoonError::InvalidCount);
        }
        if n == 0 || n == self.cards.len() - 1 {
            return Ok(());
        }
        // Moving the first n cards to just above the fixed last card is a
        // left rotation of everything except that last card.
        let last = self.cards.len() - 1;
        self.cards[..last].rotate_left(n);
        Ok(())
    }

    /// Rearranges the deck using the injected random source.
    ///
    /// Each position `0..size` in turn swaps with a uniformly drawn
    /// position in `[0, size - 1]`, which may be the position itself. This
    /// is a plain arrangement shuffle, not Fisher-Yates, and it is not part
    /// of the keystream algorithm; it only produces a starting order.
    ///
    /// # Parameters
    /// - `rng`: Uniform random source. Injecting it keeps the cipher path
    ///   fully deterministic and makes shuffles reproducible under a
    ///   seeded generator.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        if self.cards.is_empty() {
            return;
        }
        for i in 0..self.cards.len() {
            let j = rng.gen_range(0..self.cards.len());
            self.cards.swap(i, j);
        }
    }
}

impl fmt::Display for Deck {
    /// Formats the deck as comma-separated decimal values, the same text
    /// format [`FromStr`] accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cards
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", text)
    }
}

impl FromStr for Deck {
    type Err = PontoonError;

    /// Parses comma-separated decimal card values, read left-to-right as
    /// positions `0..n-1`. The empty string parses to an empty deck.
    ///
    /// # Errors
    /// Returns [`PontoonError::MalformedDeckText`] on a field that is not
    /// a decimal card value (surrounding whitespace included), and
    /// [`PontoonError::DuplicateValue`] if any value repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontoon::Deck;
    ///
    /// let deck: Deck = "3,1,2".parse().unwrap();
    /// assert_eq!(deck.cards(), &[3, 1, 2]);
    /// assert_eq!(deck.to_string(), "3,1,2");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Deck { cards: Vec::new() });
        }
        let mut values = Vec::new();
        for field in s.split(',') {
            let value = field
                .parse::<u8>()
                .map_err(|_| PontoonError::MalformedDeckText)?;
            values.push(value);
        }
        Self::from_values(values)
    }
}
