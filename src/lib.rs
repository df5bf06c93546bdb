//! Pontoon deck-based stream cipher.
//!
//! Pontoon draws a keystream from an ordered deck of 54 playing cards: each
//! output letter comes from a fixed sequence of permutation operations over
//! the deck (joker shifts, a triple cut, a count cut, and a face-value
//! lookup), and the letters combine with text under mod-26 addition and
//! subtraction. The deck ordering is the key; any arrangement of the 54
//! cards works.
//!
//! The cipher is a classical scheme, implemented exactly. It is not
//! hardened against timing or side-channel analysis and is not a
//! general-purpose cryptographic library.
//!
//! # Architecture
//!
//! ```text
//! Deck               (ordered permutation of 54 distinct cards, cut primitives)
//!     ↓ owned by
//! KeystreamGenerator (one Pontoon round per letter, joker outputs discarded)
//!     ↓ drawn by
//! letters            (mod-26 letter arithmetic: encode/decode, encrypt/decrypt)
//! ```
//!
//! A [`Deck`] is owned by exactly one [`KeystreamGenerator`] at a time and
//! mutated in place by every draw, so the keystream is reproducible only
//! from a deck snapshot taken before the first draw. The [`solver`] module
//! recovers a full ordering from a 53-card partial ordering by brute force
//! over the insertion positions of the missing card.
//!
//! # Examples
//!
//! Encrypt and decrypt with the same starting deck:
//!
//! ```
//! use pontoon::{letters, Deck, KeystreamGenerator};
//!
//! let key_deck = Deck::new();
//!
//! let mut encryptor = KeystreamGenerator::new(key_deck.clone());
//! let ciphertext = letters::encrypt("MEETMEATMIDNIGHT", &mut encryptor).unwrap();
//!
//! let mut decryptor = KeystreamGenerator::new(key_deck);
//! let plaintext = letters::decrypt(&ciphertext, &mut decryptor).unwrap();
//! assert_eq!(plaintext, "MEETMEATMIDNIGHT");
//! ```
//!
//! Parse a deck ordering from its text form:
//!
//! ```
//! use pontoon::Deck;
//!
//! let deck: Deck = "3,1,2".parse().unwrap();
//! assert_eq!(deck.cards(), &[3, 1, 2]);
//! ```

#![deny(clippy::all)]

pub mod deck;
pub mod error;
pub mod keystream;
pub mod letters;
pub mod solver;

pub use deck::{Deck, DECK_SIZE, JOKER_A, JOKER_B};
pub use error::PontoonError;
pub use keystream::KeystreamGenerator;
