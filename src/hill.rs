//! Hill cipher: block substitution by matrix multiplication mod 26.
//!
//! Each block of `n` residues is treated as a column vector and multiplied
//! by an `n×n` key matrix mod 26. Decryption multiplies by the modular
//! inverse of the key matrix, which is computed once at construction time.

use crate::alphabet;
use crate::error::HillCryptError;
use crate::matrix::ModularMatrix;

/// Block substitution cipher over residues mod 26.
///
/// The key matrix is validated at construction: its determinant must be
/// coprime with 26, otherwise no inverse exists and ciphertext could never
/// be decrypted. Validation happens once here, never per block.
pub struct HillCipher {
    key: ModularMatrix,
    inverse: ModularMatrix,
}

impl HillCipher {
    /// Creates a Hill cipher from an invertible-mod-26 key matrix.
    ///
    /// Computes and stores the modular inverse eagerly, so both failure
    /// detection and the inversion cost happen exactly once.
    ///
    /// # Parameters
    /// - `key`: Square key matrix, at least 2×2.
    ///
    /// # Errors
    /// Returns [`HillCryptError::NotInvertible`] if `gcd(det(key), 26) != 1`.
    /// Returns [`HillCryptError::KeyTooShort`] if the matrix is smaller
    /// than 2×2.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::{HillCipher, ModularMatrix};
    ///
    /// let cipher = HillCipher::new(ModularMatrix::from_rows([[3, 3], [2, 5]])).unwrap();
    /// assert_eq!(cipher.block_size(), 2);
    /// ```
    pub fn new(key: ModularMatrix) -> Result<Self, HillCryptError> {
        if key.size() < 2 {
            return Err(HillCryptError::KeyTooShort);
        }
        let inverse = key.modular_inverse()?;
        Ok(HillCipher { key, inverse })
    }

    /// Returns the block size (the key matrix dimension).
    pub fn block_size(&self) -> usize {
        self.key.size()
    }

    /// Encrypts a residue sequence.
    ///
    /// Pads the input with 'X' residues to a multiple of the block size,
    /// then multiplies each block by the key matrix. Block order and
    /// intra-block order are preserved.
    ///
    /// # Parameters
    /// - `symbols`: Plain residues in `0..=25`.
    ///
    /// # Returns
    /// Cipher residues; length is the padded input length.
    pub fn encrypt(&self, symbols: &[u8]) -> Vec<u8> {
        let mut padded = symbols.to_vec();
        alphabet::pad(&mut padded, self.block_size());
        let mut out = Vec::with_capacity(padded.len());
        for block in padded.chunks_exact(self.block_size()) {
            out.extend(self.key.mul_vec(block));
        }
        out
    }

    /// Decrypts a residue sequence.
    ///
    /// Multiplies each block by the stored inverse matrix. Padding is never
    /// stripped here; trimming is the pipeline's job since only it knows
    /// the original message length.
    ///
    /// # Parameters
    /// - `symbols`: Cipher residues; length must be a multiple of the
    ///   block size.
    ///
    /// # Errors
    /// Returns [`HillCryptError::MalformedInput`] if the length is not a
    /// multiple of the block size (corrupted ciphertext or wrong key size).
    pub fn decrypt(&self, symbols: &[u8]) -> Result<Vec<u8>, HillCryptError> {
        if !symbols.len().is_multiple_of(self.block_size()) {
            return Err(HillCryptError::MalformedInput);
        }
        let mut out = Vec::with_capacity(symbols.len());
        for block in symbols.chunks_exact(self.block_size()) {
            out.extend(self.inverse.mul_vec(block));
        }
        Ok(out)
    }
}
