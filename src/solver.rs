//! Brute-force recovery of a deck ordering with one missing card.
//!
//! Given a partial ordering missing exactly one known card value, there are
//! only `partial.len() + 1` complete orderings it could have come from: one
//! per insertion position. Each candidate is tried as a decryption key
//! against a known plaintext; decryption is a pure function of the
//! ciphertext and the candidate deck, so no state carries between tries.

use crate::deck::Deck;
use crate::error::PontoonError;
use crate::keystream::KeystreamGenerator;
use crate::letters;

/// A solved missing-card search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// The complete ordering that decrypts the message.
    pub deck: Deck,
    /// Insertion position of the missing card within that ordering.
    pub position: usize,
    /// The decrypted message text.
    pub plaintext: String,
}

/// Builds the complete ordering with `missing_value` inserted at `position`.
///
/// # Errors
/// Returns [`PontoonError::IndexOutOfRange`] when `position` is beyond the
/// end of the completed ordering, and [`PontoonError::DuplicateValue`] when
/// `missing_value` already occurs in `partial`.
pub fn candidate(
    partial: &[u8],
    missing_value: u8,
    position: usize,
) -> Result<Deck, PontoonError> {
    if position > partial.len() {
        return Err(PontoonError::IndexOutOfRange);
    }
    let mut values = Vec::with_capacity(partial.len() + 1);
    values.extend_from_slice(&partial[..position]);
    values.push(missing_value);
    values.extend_from_slice(&partial[position..]);
    Deck::from_values(values)
}

/// Searches every insertion position for the one whose completed deck
/// decrypts `ciphertext` to `known_plaintext`.
///
/// Each candidate gets a fresh [`KeystreamGenerator`]; the search stops at
/// the first match and returns `None` when no position matches.
///
/// # Errors
/// Propagates the first error from candidate construction or decryption,
/// such as [`PontoonError::InvalidDeckConfiguration`] when the completed
/// ordering is not a valid 54-card deck.
pub fn recover_deck(
    partial: &[u8],
    missing_value: u8,
    ciphertext: &str,
    known_plaintext: &str,
) -> Result<Option<Recovery>, PontoonError> {
    for position in 0..=partial.len() {
        let deck = candidate(partial, missing_value, position)?;
        let mut generator = KeystreamGenerator::new(deck.clone());
        let plaintext = letters::decrypt(ciphertext, &mut generator)?;
        if plaintext == known_plaintext {
            return Ok(Some(Recovery {
                deck,
                position,
                plaintext,
            }));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_inserts_at_position() {
        let deck = candidate(&[1, 2, 4], 3, 2).unwrap();
        assert_eq!(deck.cards(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_candidate_at_both_ends() {
        assert_eq!(candidate(&[2, 3], 1, 0).unwrap().cards(), &[1, 2, 3]);
        assert_eq!(candidate(&[2, 3], 1, 2).unwrap().cards(), &[2, 3, 1]);
    }

    #[test]
    fn test_candidate_rejects_position_beyond_end() {
        assert_eq!(
            candidate(&[1, 2], 3, 3),
            Err(PontoonError::IndexOutOfRange)
        );
    }

    #[test]
    fn test_candidate_rejects_value_already_present() {
        assert_eq!(
            candidate(&[1, 2, 3], 2, 0),
            Err(PontoonError::DuplicateValue)
        );
    }

    #[test]
    fn test_recover_deck_finds_removed_card() {
        // Remove one card from the ascending deck, then recover it using a
        // message encrypted under the full deck.
        let full = Deck::new();
        let removed = 39u8;
        let partial: Vec<u8> = full
            .cards()
            .iter()
            .copied()
            .filter(|&card| card != removed)
            .collect();

        let mut encryptor = KeystreamGenerator::new(full.clone());
        let plaintext = "CODEWORDISPONTOON";
        let ciphertext = letters::encrypt(plaintext, &mut encryptor).unwrap();

        let recovery = recover_deck(&partial, removed, &ciphertext, plaintext)
            .unwrap()
            .expect("the removed card must be recoverable");
        assert_eq!(recovery.plaintext, plaintext);
        assert_eq!(recovery.deck.size(), 54);

        // The recovered ordering decrypts the message on its own.
        let mut decryptor = KeystreamGenerator::new(recovery.deck.clone());
        assert_eq!(
            letters::decrypt(&ciphertext, &mut decryptor).unwrap(),
            plaintext
        );
    }

    #[test]
    fn test_recover_deck_none_when_lengths_differ() {
        // A plaintext of a different length than the ciphertext can never
        // match, so every candidate is tried and rejected.
        let full = Deck::new();
        let partial: Vec<u8> = full.cards()[..53].to_vec();
        let result = recover_deck(&partial, 54, "AAAAAAAAAA", "SHORT").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_recover_deck_propagates_invalid_deck() {
        // A 10-card partial ordering can never complete to a cipher deck.
        let result = recover_deck(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 11, "AA", "AA");
        assert_eq!(result, Err(PontoonError::InvalidDeckConfiguration));
    }
}
