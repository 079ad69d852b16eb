//! Error types for the hillcrypt library.

use std::fmt;

/// Errors produced by the hillcrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HillCryptError {
    /// Input contains a character outside the supported A–Z alphabet.
    InvalidCharacter(char),
    /// Key matrix determinant shares a common factor with 26.
    NotInvertible,
    /// Sequence length is not a multiple of the expected block or column size.
    MalformedInput,
    /// Key matrix smaller than 2×2, or columnar key shorter than 2 symbols.
    KeyTooShort,
}

impl fmt::Display for HillCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HillCryptError::InvalidCharacter(c) => {
                write!(f, "Character {:?} is outside the supported A-Z alphabet", c)
            }
            HillCryptError::NotInvertible => {
                write!(f, "Key matrix determinant is not coprime with 26")
            }
            HillCryptError::MalformedInput => {
                write!(
                    f,
                    "Sequence length is not a multiple of the expected block size"
                )
            }
            HillCryptError::KeyTooShort => {
                write!(f, "Key must span at least 2 symbols")
            }
        }
    }
}

impl std::error::Error for HillCryptError {}
