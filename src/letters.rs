//! Mod-26 letter arithmetic for combining keystreams with text.
//!
//! Letters map to the alphabet positions `1..=26`; combining is addition
//! and subtraction over that range with wraparound at 26. The functions
//! here are stateless: text operations either consume an explicit repeating
//! key string or pull letters one at a time from a live
//! [`KeystreamGenerator`].

use crate::error::PontoonError;
use crate::keystream::KeystreamGenerator;

/// Number of letters in the cipher alphabet.
pub const ALPHABET_SIZE: u8 = 26;

/// Returns the 1-based alphabet position of an uppercase letter.
///
/// # Errors
/// Returns [`PontoonError::InvalidCharacter`] unless `letter` is `'A'..='Z'`.
///
/// # Examples
///
/// ```
/// use pontoon::letters;
///
/// assert_eq!(letters::alphabet_index('A').unwrap(), 1);
/// assert_eq!(letters::alphabet_index('Z').unwrap(), 26);
/// assert!(letters::alphabet_index('a').is_err());
/// ```
pub fn alphabet_index(letter: char) -> Result<u8, PontoonError> {
    if letter.is_ascii_uppercase() {
        Ok(letter as u8 - b'A' + 1)
    } else {
        Err(PontoonError::InvalidCharacter)
    }
}

/// Returns the letter at a 1-based alphabet position.
///
/// Positions above 26 have 26 subtracted first, so `1..=26` and `27..=52`
/// name the same letters. The doubled range is what keystream card values
/// produce; nothing above 52 is resolvable.
///
/// # Errors
/// Returns [`PontoonError::InvalidCharacter`] unless `index` is in `1..=52`.
///
/// # Examples
///
/// ```
/// use pontoon::letters;
///
/// assert_eq!(letters::letter_for(1).unwrap(), 'A');
/// assert_eq!(letters::letter_for(27).unwrap(), 'A');
/// assert_eq!(letters::letter_for(52).unwrap(), 'Z');
/// ```
pub fn letter_for(index: u8) -> Result<char, PontoonError> {
    if index == 0 || index > 2 * ALPHABET_SIZE {
        return Err(PontoonError::InvalidCharacter);
    }
    let index = if index > ALPHABET_SIZE {
        index - ALPHABET_SIZE
    } else {
        index
    };
    Ok((b'A' + index - 1) as char)
}

/// Encodes one letter with one key letter.
///
/// The alphabet positions are added; sums above 26 wrap around.
///
/// # Examples
///
/// ```
/// use pontoon::letters;
///
/// assert_eq!(letters::encode_letter('A', 'A').unwrap(), 'B');
/// assert_eq!(letters::encode_letter('Z', 'Z').unwrap(), 'Z');
/// ```
pub fn encode_letter(input: char, key: char) -> Result<char, PontoonError> {
    let sum = alphabet_index(input)? + alphabet_index(key)?;
    let sum = if sum > ALPHABET_SIZE {
        sum - ALPHABET_SIZE
    } else {
        sum
    };
    letter_for(sum)
}

/// Decodes one letter with one key letter.
///
/// Exact additive inverse of [`encode_letter`]: when the input position is
/// at or below the key position it first gains 26, then the key position
/// is subtracted.
///
/// # Examples
///
/// ```
/// use pontoon::letters;
///
/// assert_eq!(letters::decode_letter('B', 'A').unwrap(), 'A');
/// assert_eq!(letters::decode_letter('Z', 'Z').unwrap(), 'Z');
/// ```
pub fn decode_letter(input: char, key: char) -> Result<char, PontoonError> {
    let input = alphabet_index(input)?;
    let key = alphabet_index(key)?;
    let index = if input <= key {
        input + ALPHABET_SIZE - key
    } else {
        input - key
    };
    letter_for(index)
}

/// Encodes text against a fixed key string, cycling the key when the text
/// is longer.
///
/// # Errors
/// Returns [`PontoonError::InvalidCharacter`] if any text or key character
/// is outside A-Z, or if the key is empty while the text is not.
pub fn encode_text(text: &str, key: &str) -> Result<String, PontoonError> {
    combine_with_cycled_key(text, key, encode_letter)
}

/// Decodes text against a fixed key string, cycling the key when the text
/// is longer. Inverse of [`encode_text`] under the same key.
pub fn decode_text(text: &str, key: &str) -> Result<String, PontoonError> {
    combine_with_cycled_key(text, key, decode_letter)
}

/// Shared cycling-key walk for the fixed-key text operations.
fn combine_with_cycled_key(
    text: &str,
    key: &str,
    combine: fn(char, char) -> Result<char, PontoonError>,
) -> Result<String, PontoonError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let key: Vec<char> = key.chars().collect();
    if key.is_empty() {
        return Err(PontoonError::InvalidCharacter);
    }
    let mut output = String::with_capacity(text.len());
    for (position, letter) in text.chars().enumerate() {
        output.push(combine(letter, key[position % key.len()])?);
    }
    Ok(output)
}

/// Encrypts text by drawing one keystream letter per input letter.
///
/// The keystream is consumed once and never cycled. Decrypting the result
/// requires a fresh generator started from the same deck snapshot.
///
/// # Errors
/// Propagates [`PontoonError::InvalidDeckConfiguration`] from the generator
/// and [`PontoonError::InvalidCharacter`] for text outside A-Z.
///
/// # Examples
///
/// ```
/// use pontoon::{letters, Deck, KeystreamGenerator};
///
/// let mut encryptor = KeystreamGenerator::new(Deck::new());
/// let ciphertext = letters::encrypt("ATTACKATDAWN", &mut encryptor).unwrap();
///
/// let mut decryptor = KeystreamGenerator::new(Deck::new());
/// assert_eq!(
///     letters::decrypt(&ciphertext, &mut decryptor).unwrap(),
///     "ATTACKATDAWN"
/// );
/// ```
pub fn encrypt(text: &str, generator: &mut KeystreamGenerator) -> Result<String, PontoonError> {
    let mut output = String::with_capacity(text.len());
    for letter in text.chars() {
        let key = generator.next_letter()?;
        output.push(encode_letter(letter, key)?);
    }
    Ok(output)
}

/// Decrypts text by drawing one keystream letter per input letter.
///
/// Undoes [`encrypt`] when the generator starts from the same deck
/// snapshot the encrypting generator started from.
pub fn decrypt(text: &str, generator: &mut KeystreamGenerator) -> Result<String, PontoonError> {
    let mut output = String::with_capacity(text.len());
    for letter in text.chars() {
        let key = generator.next_letter()?;
        output.push(decode_letter(letter, key)?);
    }
    Ok(output)
}

/// Strips text down to cipher input: non-alphabetic characters are dropped
/// and the rest are uppercased.
///
/// Pre-processing helper, not part of the cipher contract; the cipher
/// functions themselves accept only A-Z.
///
/// # Examples
///
/// ```
/// use pontoon::letters;
///
/// assert_eq!(letters::sanitize("Attack at dawn!"), "ATTACKATDAWN");
/// ```
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn test_alphabet_index_all_letters() {
        for (i, letter) in ('A'..='Z').enumerate() {
            assert_eq!(alphabet_index(letter).unwrap(), i as u8 + 1);
        }
    }

    #[test]
    fn test_alphabet_index_rejects_lowercase() {
        assert_eq!(alphabet_index('a'), Err(PontoonError::InvalidCharacter));
    }

    #[test]
    fn test_alphabet_index_rejects_non_letters() {
        for c in [' ', '!', '0', '@', '[', 'ñ'] {
            assert_eq!(
                alphabet_index(c),
                Err(PontoonError::InvalidCharacter),
                "accepted {:?}",
                c
            );
        }
    }

    #[test]
    fn test_letter_for_wraps_doubled_range() {
        for index in 1..=26u8 {
            assert_eq!(
                letter_for(index).unwrap(),
                letter_for(index + 26).unwrap(),
                "doubled alphabet mismatch at {}",
                index
            );
        }
    }

    #[test]
    fn test_letter_for_rejects_zero_and_beyond_52() {
        assert_eq!(letter_for(0), Err(PontoonError::InvalidCharacter));
        assert_eq!(letter_for(53), Err(PontoonError::InvalidCharacter));
        assert_eq!(letter_for(255), Err(PontoonError::InvalidCharacter));
    }

    #[test]
    fn test_encode_letter_known_values() {
        assert_eq!(encode_letter('A', 'A').unwrap(), 'B');
        assert_eq!(encode_letter('A', 'D').unwrap(), 'E');
        assert_eq!(encode_letter('Z', 'Z').unwrap(), 'Z');
        assert_eq!(encode_letter('Y', 'B').unwrap(), 'A');
    }

    #[test]
    fn test_decode_letter_known_values() {
        assert_eq!(decode_letter('B', 'A').unwrap(), 'A');
        assert_eq!(decode_letter('E', 'D').unwrap(), 'A');
        assert_eq!(decode_letter('Z', 'Z').unwrap(), 'Z');
        assert_eq!(decode_letter('A', 'B').unwrap(), 'Y');
    }

    #[test]
    fn test_round_trip_all_letter_key_pairs() {
        for letter in 'A'..='Z' {
            for key in 'A'..='Z' {
                let encoded = encode_letter(letter, key).unwrap();
                assert_eq!(
                    decode_letter(encoded, key).unwrap(),
                    letter,
                    "round trip failed for {} with key {}",
                    letter,
                    key
                );
            }
        }
    }

    #[test]
    fn test_encode_text_cycles_key() {
        assert_eq!(encode_text("AAAA", "AB").unwrap(), "BCBC");
    }

    #[test]
    fn test_decode_text_inverts_encode_text() {
        let encoded = encode_text("PONTOON", "KEY").unwrap();
        assert_eq!(decode_text(&encoded, "KEY").unwrap(), "PONTOON");
    }

    #[test]
    fn test_text_ops_empty_text() {
        assert_eq!(encode_text("", "KEY").unwrap(), "");
        assert_eq!(decode_text("", "KEY").unwrap(), "");
    }

    #[test]
    fn test_text_ops_reject_empty_key() {
        assert_eq!(encode_text("A", ""), Err(PontoonError::InvalidCharacter));
        assert_eq!(decode_text("A", ""), Err(PontoonError::InvalidCharacter));
    }

    #[test]
    fn test_text_ops_reject_invalid_letters() {
        assert_eq!(
            encode_text("a", "KEY"),
            Err(PontoonError::InvalidCharacter)
        );
        assert_eq!(
            encode_text("AB", "k"),
            Err(PontoonError::InvalidCharacter)
        );
    }

    #[test]
    fn test_encrypt_ascending_deck_vector() {
        let mut generator = KeystreamGenerator::new(Deck::new());
        assert_eq!(
            encrypt("AAAAAAAAAA", &mut generator).unwrap(),
            "EXKYIZSGEH"
        );
    }

    #[test]
    fn test_decrypt_ascending_deck_vector() {
        let mut generator = KeystreamGenerator::new(Deck::new());
        assert_eq!(
            decrypt("EXKYIZSGEH", &mut generator).unwrap(),
            "AAAAAAAAAA"
        );
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip_fresh_generators() {
        let deck = Deck::new();
        let mut encryptor = KeystreamGenerator::new(deck.clone());
        let ciphertext =
            encrypt("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG", &mut encryptor).unwrap();
        let mut decryptor = KeystreamGenerator::new(deck);
        assert_eq!(
            decrypt(&ciphertext, &mut decryptor).unwrap(),
            "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"
        );
    }

    #[test]
    fn test_keystream_never_cycles() {
        // Two identical plaintext halves encrypt differently because the
        // keystream advances rather than repeating.
        let mut generator = KeystreamGenerator::new(Deck::new());
        let ciphertext = encrypt("AAAAAAAAAAAAAAAAAAAA", &mut generator).unwrap();
        assert_ne!(ciphertext[..10], ciphertext[10..]);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Hello, World! 123"), "HELLOWORLD");
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("...!?"), "");
        assert_eq!(sanitize("already UPPER"), "ALREADYUPPER");
    }
}
