//! Alphabet codec: maps letters to residues mod 26 and back.
//!
//! Provides the bijection between the 26-letter uppercase alphabet and the
//! residues `0..=25`, plus the padding policy shared by both cipher stages.
//! Input text is uppercased and whitespace is skipped; any remaining
//! character outside `A..=Z` is rejected.

use crate::error::HillCryptError;

/// Size of the alphabet ring.
pub const MODULUS: i64 = 26;

/// Residue of the padding letter 'X'.
pub const PAD_SYMBOL: u8 = 23;

/// Converts text to a sequence of residues in `0..=25`.
///
/// Uppercases the input and skips whitespace. Every remaining character
/// must be an ASCII letter.
///
/// # Parameters
/// - `text`: Input text (arbitrary case, may contain whitespace).
///
/// # Returns
/// One residue per non-whitespace character, in input order.
///
/// # Errors
/// Returns [`HillCryptError::InvalidCharacter`] for the first character
/// outside the supported alphabet.
pub fn encode(text: &str) -> Result<Vec<u8>, HillCryptError> {
    let mut symbols = Vec::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }
        let upper = c.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(HillCryptError::InvalidCharacter(c));
        }
        symbols.push(upper as u8 - b'A');
    }
    Ok(symbols)
}

/// Converts a sequence of residues back to uppercase text.
///
/// Total and lossless for residues in `0..=25`. Residues are reduced
/// mod 26 first, so any value a cipher stage produces maps to a letter.
///
/// # Parameters
/// - `symbols`: Residue sequence.
///
/// # Returns
/// The corresponding uppercase string.
pub fn decode(symbols: &[u8]) -> String {
    symbols
        .iter()
        .map(|&s| (b'A' + s % MODULUS as u8) as char)
        .collect()
}

/// Appends [`PAD_SYMBOL`] until the length is a multiple of `block`.
///
/// No-op on already-aligned input, which makes the operation idempotent.
///
/// # Parameters
/// - `symbols`: Sequence to pad in place.
/// - `block`: Target alignment (must be non-zero).
pub fn pad(symbols: &mut Vec<u8>, block: usize) {
    while !symbols.len().is_multiple_of(block) {
        symbols.push(PAD_SYMBOL);
    }
}
