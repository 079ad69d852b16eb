//! hillcrypt: classical two-stage hybrid cipher.
//!
//! Combines a Hill block substitution cipher (matrix multiplication over
//! Z/26Z) with a single columnar transposition. Encryption runs the
//! substitution stage first and the transposition second; decryption
//! reverses the order and trims the padding both stages appended.
//!
//! All arithmetic is exact integer arithmetic. The modular matrix inverse
//! is formed from the integer adjugate and the extended-Euclid inverse of
//! the determinant, never from floating-point linear algebra.
//!
//! # Architecture
//!
//! ```text
//! alphabet        (codec — letters A..Z ↔ residues 0..25, 'X' padding)
//!     ↑ used by all stages
//! ModularMatrix   (exact mod-26 linear algebra — det, adjugate, inverse)
//!     ↑
//! HillCipher      (block substitution — key matrix × block mod 26)
//! ColumnarCipher  (column transposition — stable key-ordered read-out)
//!     ↑ composed by
//! HybridCipher    (orchestrator — Hill then columnar, tracks length)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use hillcrypt::{HybridCipher, ModularMatrix};
//!
//! let key = ModularMatrix::from_rows([[3, 3], [2, 5]]);
//! let cipher = HybridCipher::new(key, "431256").unwrap();
//!
//! let (ciphertext, length) = cipher.encrypt("attack at dawn").unwrap();
//! let recovered = cipher.decrypt(&ciphertext, length).unwrap();
//! assert_eq!(recovered, "ATTACKATDAWN");
//! ```
//!
//! A key matrix whose determinant shares a factor with 26 is rejected
//! when the cipher is built:
//!
//! ```
//! use hillcrypt::{HybridCipher, ModularMatrix};
//!
//! // det = 2, not coprime with 26
//! let key = ModularMatrix::from_rows([[2, 4], [1, 3]]);
//! assert!(HybridCipher::new(key, "431256").is_err());
//! ```
//!
//! This is a classical cipher: a study piece, not a modern security
//! primitive. The small alphabet and linear structure make it trivially
//! breakable with known plaintext.

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod columnar;
mod hill;
mod hybrid;
mod matrix;

pub use columnar::ColumnarCipher;
pub use error::HillCryptError;
pub use hill::HillCipher;
pub use hybrid::HybridCipher;
pub use matrix::ModularMatrix;
