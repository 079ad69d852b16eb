//! Exact modular matrix arithmetic over the ring Z/26Z.
//!
//! Implements the linear-algebra core of the Hill stage: matrix-vector
//! products, integer determinants by cofactor expansion, and modular matrix
//! inversion through the adjugate. All arithmetic is exact `i64` integer
//! arithmetic; floating point is never involved, so there are no rounding
//! concerns regardless of matrix size.

use crate::alphabet::MODULUS;
use crate::error::HillCryptError;

/// Square integer matrix with arithmetic mod 26.
///
/// Stored row-major in a flat `Vec<i64>`. Entries of key matrices may be
/// arbitrary integers; results of modular operations are always reduced to
/// non-negative residues in `0..=25`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularMatrix {
    size: usize,
    data: Vec<i64>,
}

impl ModularMatrix {
    /// Creates a matrix from a square array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::ModularMatrix;
    ///
    /// let key = ModularMatrix::from_rows([[3, 3], [2, 5]]);
    /// assert_eq!(key.determinant(), 9);
    /// ```
    pub fn from_rows<const N: usize>(rows: [[i64; N]; N]) -> Self {
        ModularMatrix {
            size: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Creates the identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        let mut data = vec![0i64; size * size];
        for i in 0..size {
            data[i * size + i] = 1;
        }
        ModularMatrix { size, data }
    }

    /// Returns the matrix dimension (an n×n matrix returns n).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.size + col]
    }

    /// Multiplies the matrix by a column vector of residues, reducing each
    /// entry to a non-negative residue mod 26.
    ///
    /// # Parameters
    /// - `block`: Column vector; its length must equal the matrix size.
    ///
    /// # Returns
    /// The product vector with entries in `0..=25`.
    pub(crate) fn mul_vec(&self, block: &[u8]) -> Vec<u8> {
        debug_assert_eq!(block.len(), self.size);
        let mut out = Vec::with_capacity(self.size);
        for row in 0..self.size {
            let mut acc: i64 = 0;
            for col in 0..self.size {
                acc += self.get(row, col) * block[col] as i64;
            }
            out.push(acc.rem_euclid(MODULUS) as u8);
        }
        out
    }

    /// Multiplies two matrices, reducing each entry mod 26.
    ///
    /// # Panics
    /// Panics if the matrix sizes differ.
    pub fn mul_mod(&self, other: &ModularMatrix) -> ModularMatrix {
        assert_eq!(self.size, other.size, "matrix size mismatch");
        let n = self.size;
        let mut data = vec![0i64; n * n];
        for row in 0..n {
            for col in 0..n {
                let mut acc: i64 = 0;
                for k in 0..n {
                    acc += self.get(row, k) * other.get(k, col);
                }
                data[row * n + col] = acc.rem_euclid(MODULUS);
            }
        }
        ModularMatrix { size: n, data }
    }

    /// Computes the exact integer determinant by Laplace expansion along
    /// the first row.
    ///
    /// Key matrices are small (typically 2×2 or 3×3), so the factorial
    /// cost of cofactor expansion is irrelevant and exactness is what
    /// matters.
    pub fn determinant(&self) -> i64 {
        match self.size {
            0 => 1,
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            _ => {
                let mut det: i64 = 0;
                for col in 0..self.size {
                    let sign = if col % 2 == 0 { 1 } else { -1 };
                    det += sign * self.get(0, col) * self.minor(0, col).determinant();
                }
                det
            }
        }
    }

    /// Returns the minor matrix with `row` and `col` removed.
    fn minor(&self, row: usize, col: usize) -> ModularMatrix {
        let n = self.size;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for r in 0..n {
            if r == row {
                continue;
            }
            for c in 0..n {
                if c == col {
                    continue;
                }
                data.push(self.get(r, c));
            }
        }
        ModularMatrix { size: n - 1, data }
    }

    /// Computes the exact integer adjugate (transposed cofactor matrix).
    ///
    /// Satisfies `self * adjugate == det(self) * identity` over the
    /// integers, which is what makes the modular inverse exact.
    fn adjugate(&self) -> ModularMatrix {
        let n = self.size;
        let mut data = vec![0i64; n * n];
        for row in 0..n {
            for col in 0..n {
                let sign = if (row + col) % 2 == 0 { 1 } else { -1 };
                // Cofactor of (row, col) lands transposed at (col, row).
                data[col * n + row] = sign * self.minor(row, col).determinant();
            }
        }
        ModularMatrix { size: n, data }
    }

    /// Computes the matrix inverse mod 26.
    ///
    /// Forms `det⁻¹ · adjugate mod 26`, where `det⁻¹` is the modular
    /// multiplicative inverse of the integer determinant obtained by the
    /// extended Euclidean algorithm. Result entries are residues in
    /// `0..=25`.
    ///
    /// # Errors
    /// Returns [`HillCryptError::NotInvertible`] if `gcd(det, 26) != 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::ModularMatrix;
    ///
    /// let key = ModularMatrix::from_rows([[3, 3], [2, 5]]);
    /// let inv = key.modular_inverse().unwrap();
    /// assert_eq!(key.mul_mod(&inv), ModularMatrix::identity(2));
    /// ```
    pub fn modular_inverse(&self) -> Result<ModularMatrix, HillCryptError> {
        let det = self.determinant();
        let det_inv = mod_inverse(det, MODULUS).ok_or(HillCryptError::NotInvertible)?;
        let adj = self.adjugate();
        let data = adj
            .data
            .iter()
            .map(|&v| (det_inv * v.rem_euclid(MODULUS)).rem_euclid(MODULUS))
            .collect();
        Ok(ModularMatrix {
            size: self.size,
            data,
        })
    }
}

/// Computes the modular multiplicative inverse of `value` mod `modulus`
/// using the extended Euclidean algorithm.
///
/// # Returns
/// `Some(inverse)` in `0..modulus`, or `None` if `gcd(value, modulus) != 1`.
fn mod_inverse(value: i64, modulus: i64) -> Option<i64> {
    let (mut r0, mut r1) = (modulus, value.rem_euclid(modulus));
    let (mut t0, mut t1) = (0i64, 1i64);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    if r0 == 1 {
        Some(t0.rem_euclid(modulus))
    } else {
        None
    }
}
