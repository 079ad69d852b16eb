//! Single columnar transposition cipher.
//!
//! The key string defines a permutation of column indices: positions are
//! sorted by key symbol, ascending, with the original position breaking
//! ties (stable order). Encryption arranges the message into a row-major
//! grid of `key length` columns and reads the columns out in that order.
//!
//! Both directions are expressed as pure index mappings over the flat
//! sequence rather than a mutable grid, which makes the bijectivity of the
//! permutation directly visible: encrypt maps `in[r·w + order[c]]` to
//! `out[c·rows + r]`, and decrypt is the same mapping with the sides
//! swapped.

use crate::alphabet;
use crate::error::HillCryptError;

/// Key-driven column permutation cipher.
pub struct ColumnarCipher {
    /// Column indices in reading order (the permutation π).
    order: Vec<usize>,
}

impl ColumnarCipher {
    /// Creates a columnar cipher from a key string.
    ///
    /// Key symbols only need to be comparable; digits are conventional.
    /// Repeated symbols are allowed — the stable sort breaks ties by
    /// original position.
    ///
    /// # Parameters
    /// - `key`: Key string of at least 2 symbols.
    ///
    /// # Errors
    /// Returns [`HillCryptError::KeyTooShort`] for keys shorter than 2
    /// symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::ColumnarCipher;
    ///
    /// let cipher = ColumnarCipher::new("431256").unwrap();
    /// assert_eq!(cipher.width(), 6);
    /// ```
    pub fn new(key: &str) -> Result<Self, HillCryptError> {
        let symbols: Vec<char> = key.chars().collect();
        if symbols.len() < 2 {
            return Err(HillCryptError::KeyTooShort);
        }
        let mut order: Vec<usize> = (0..symbols.len()).collect();
        // sort_by_key is stable: equal key symbols keep original order.
        order.sort_by_key(|&i| symbols[i]);
        Ok(ColumnarCipher { order })
    }

    /// Returns the grid width (the key length).
    pub fn width(&self) -> usize {
        self.order.len()
    }

    /// Encrypts a residue sequence by column transposition.
    ///
    /// Pads the input with 'X' residues to a multiple of the key width,
    /// then reads the grid column by column in key order. Output length
    /// equals the padded input length; this stage never expands further.
    ///
    /// # Parameters
    /// - `symbols`: Residues in `0..=25`.
    pub fn encrypt(&self, symbols: &[u8]) -> Vec<u8> {
        let mut padded = symbols.to_vec();
        alphabet::pad(&mut padded, self.width());
        let rows = padded.len() / self.width();
        let mut out = Vec::with_capacity(padded.len());
        for &col in &self.order {
            for row in 0..rows {
                out.push(padded[row * self.width() + col]);
            }
        }
        out
    }

    /// Decrypts a residue sequence by inverting the column transposition.
    ///
    /// Re-fills the grid column by column in key order, then reads it
    /// row-major.
    ///
    /// # Parameters
    /// - `symbols`: Residues; length must be a multiple of the key width.
    ///
    /// # Errors
    /// Returns [`HillCryptError::MalformedInput`] if the length is not a
    /// multiple of the key width (corrupted ciphertext or wrong key).
    pub fn decrypt(&self, symbols: &[u8]) -> Result<Vec<u8>, HillCryptError> {
        if !symbols.len().is_multiple_of(self.width()) {
            return Err(HillCryptError::MalformedInput);
        }
        let rows = symbols.len() / self.width();
        let mut out = vec![0u8; symbols.len()];
        let mut idx = 0;
        for &col in &self.order {
            for row in 0..rows {
                out[row * self.width() + col] = symbols[idx];
                idx += 1;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_keys() {
        assert_eq!(ColumnarCipher::new("").err(), Some(HillCryptError::KeyTooShort));
        assert_eq!(
            ColumnarCipher::new("7").err(),
            Some(HillCryptError::KeyTooShort)
        );
    }

    #[test]
    fn test_order_from_digit_key() {
        // "431256": columns read in order 2 ('1'), 3 ('2'), 1 ('3'),
        // 0 ('4'), 4 ('5'), 5 ('6').
        let cipher = ColumnarCipher::new("431256").unwrap();
        assert_eq!(cipher.order, vec![2, 3, 1, 0, 4, 5]);
    }

    #[test]
    fn test_order_stable_on_repeated_symbols() {
        // "1212": the two '1' columns keep positions 0 then 2, the two
        // '2' columns keep positions 1 then 3.
        let cipher = ColumnarCipher::new("1212").unwrap();
        assert_eq!(cipher.order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_encrypt_single_row() {
        // One row: the output is just the row read in column order.
        let cipher = ColumnarCipher::new("431256").unwrap();
        let out = cipher.encrypt(&[7, 8, 14, 25, 7, 13]); // HIOZHN
        assert_eq!(out, vec![14, 25, 8, 7, 7, 13]); // OZIHHN
    }

    #[test]
    fn test_encrypt_two_rows() {
        let cipher = ColumnarCipher::new("3142").unwrap();
        // order: col1 ('1'), col3 ('2'), col0 ('3'), col2 ('4')
        let out = cipher.encrypt(&[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(out, vec![1, 5, 3, 7, 0, 4, 2, 6]);
    }

    #[test]
    fn test_encrypt_pads_with_x() {
        let cipher = ColumnarCipher::new("21").unwrap();
        // [5] pads to [5, 23]; order is col1 then col0.
        assert_eq!(cipher.encrypt(&[5]), vec![alphabet::PAD_SYMBOL, 5]);
    }

    #[test]
    fn test_encrypt_preserves_length_when_aligned() {
        let cipher = ColumnarCipher::new("431256").unwrap();
        let input: Vec<u8> = (0..12).collect();
        assert_eq!(cipher.encrypt(&input).len(), 12);
    }

    #[test]
    fn test_decrypt_inverts_encrypt() {
        let cipher = ColumnarCipher::new("431256").unwrap();
        let input: Vec<u8> = (0..24).map(|v| v % 26).collect();
        let roundtrip = cipher.decrypt(&cipher.encrypt(&input)).unwrap();
        assert_eq!(roundtrip, input);
    }

    #[test]
    fn test_decrypt_inverts_with_repeated_key_symbols() {
        let cipher = ColumnarCipher::new("1212").unwrap();
        let input: Vec<u8> = (0..16).collect();
        let roundtrip = cipher.decrypt(&cipher.encrypt(&input)).unwrap();
        assert_eq!(roundtrip, input);
    }

    #[test]
    fn test_decrypt_rejects_misaligned_length() {
        let cipher = ColumnarCipher::new("431256").unwrap();
        assert_eq!(
            cipher.decrypt(&[1, 2, 3, 4, 5, 6, 7]),
            Err(HillCryptError::MalformedInput)
        );
    }

    #[test]
    fn test_empty_input_roundtrip() {
        let cipher = ColumnarCipher::new("312").unwrap();
        assert!(cipher.encrypt(&[]).is_empty());
        assert_eq!(cipher.decrypt(&[]).unwrap(), Vec::<u8>::new());
    }
}
