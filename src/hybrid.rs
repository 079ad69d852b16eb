//! Hybrid cipher pipeline: Hill substitution composed with columnar
//! transposition.
//!
//! Encryption runs the Hill stage first and the columnar stage second;
//! decryption reverses the order. Because each stage pads independently,
//! the ciphertext length is a multiple of both the matrix block size and
//! the columnar key width. The original message length is returned next to
//! the ciphertext and must be supplied back at decrypt time — it is the
//! only way to trim recovered padding, and it is never embedded in the
//! ciphertext itself.

use crate::alphabet;
use crate::columnar::ColumnarCipher;
use crate::error::HillCryptError;
use crate::hill::HillCipher;
use crate::matrix::ModularMatrix;

/// Two-stage substitution + transposition cipher over the A–Z alphabet.
///
/// Both keys are validated at construction, so a successfully built
/// `HybridCipher` can encrypt and decrypt without further key errors.
///
/// # Examples
///
/// ```
/// use hillcrypt::{HybridCipher, ModularMatrix};
///
/// let key = ModularMatrix::from_rows([[3, 3], [2, 5]]);
/// let cipher = HybridCipher::new(key, "431256").unwrap();
///
/// let (ciphertext, length) = cipher.encrypt("HELLO").unwrap();
/// assert_eq!(ciphertext, "OZIHHN");
///
/// let plaintext = cipher.decrypt(&ciphertext, length).unwrap();
/// assert_eq!(plaintext, "HELLO");
/// ```
pub struct HybridCipher {
    hill: HillCipher,
    columnar: ColumnarCipher,
}

impl HybridCipher {
    /// Creates a hybrid cipher from a Hill key matrix and a columnar key.
    ///
    /// # Parameters
    /// - `key_matrix`: Square integer matrix, invertible mod 26.
    /// - `columnar_key`: Column permutation key of at least 2 symbols.
    ///
    /// # Errors
    /// Returns [`HillCryptError::NotInvertible`] if the matrix determinant
    /// shares a factor with 26, or [`HillCryptError::KeyTooShort`] if
    /// either key is too small.
    pub fn new(key_matrix: ModularMatrix, columnar_key: &str) -> Result<Self, HillCryptError> {
        Ok(HybridCipher {
            hill: HillCipher::new(key_matrix)?,
            columnar: ColumnarCipher::new(columnar_key)?,
        })
    }

    /// Encrypts a plaintext string.
    ///
    /// The plaintext is uppercased and whitespace is dropped before
    /// encryption; the returned length counts the symbols that remain.
    /// Both the ciphertext and the length must be retained — decryption
    /// needs the length to trim padding.
    ///
    /// # Parameters
    /// - `plaintext`: Letters and whitespace, arbitrary case.
    ///
    /// # Returns
    /// The ciphertext (uppercase letters) and the original symbol count.
    ///
    /// # Errors
    /// Returns [`HillCryptError::InvalidCharacter`] if the plaintext
    /// contains anything beyond letters and whitespace.
    pub fn encrypt(&self, plaintext: &str) -> Result<(String, usize), HillCryptError> {
        let symbols = alphabet::encode(plaintext)?;
        let original_length = symbols.len();
        let intermediate = self.hill.encrypt(&symbols);
        let ciphertext = self.columnar.encrypt(&intermediate);
        Ok((alphabet::decode(&ciphertext), original_length))
    }

    /// Decrypts a ciphertext string.
    ///
    /// Runs the stages in reverse order (columnar first, then Hill) and
    /// truncates the recovered symbols to `original_length`, discarding
    /// the padding both stages appended during encryption.
    ///
    /// When the columnar width is not a multiple of the Hill block size,
    /// the transposition pad leaves the intermediate sequence misaligned
    /// for the Hill stage; it is re-padded here before block decryption.
    /// The extra symbols fall inside the region trimmed by
    /// `original_length`.
    ///
    /// # Parameters
    /// - `ciphertext`: Output of [`encrypt`](Self::encrypt).
    /// - `original_length`: Length value returned by `encrypt`.
    ///
    /// # Errors
    /// Returns [`HillCryptError::InvalidCharacter`] if the ciphertext is
    /// not pure letters, or [`HillCryptError::MalformedInput`] if its
    /// length does not match the key geometry.
    pub fn decrypt(
        &self,
        ciphertext: &str,
        original_length: usize,
    ) -> Result<String, HillCryptError> {
        let symbols = alphabet::encode(ciphertext)?;
        let mut intermediate = self.columnar.decrypt(&symbols)?;
        alphabet::pad(&mut intermediate, self.hill.block_size());
        let mut plain = self.hill.decrypt(&intermediate)?;
        plain.truncate(original_length);
        Ok(alphabet::decode(&plain))
    }
}
