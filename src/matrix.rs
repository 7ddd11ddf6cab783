//! Bit-packed square matrices over GF(2)
//!
//! A matrix is a sequence of equal-length row vectors. Multiplication is
//! XOR accumulation: a dot product is the parity of the popcount of an
//! AND, and a row combination is an XOR of whole rows. Both kernels run
//! word-parallel through [`BitVector`], giving O(N²/64) per product.

use crate::bitvec::BitVector;

/// An N×N boolean matrix over GF(2), read-only after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<BitVector>,
    size: usize,
}

impl BitMatrix {
    /// Build a matrix from its rows; every row must have one bit per row
    pub fn from_rows(rows: Vec<BitVector>) -> Self {
        let size = rows.len();
        for row in &rows {
            assert_eq!(row.len(), size, "matrix must be square");
        }
        BitMatrix { rows, size }
    }

    /// The all-zero matrix
    pub fn zeros(size: usize) -> Self {
        BitMatrix {
            rows: vec![BitVector::zeros(size); size],
            size,
        }
    }

    /// The identity matrix
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size);
        for index in 0..size {
            matrix.rows[index].set(index, true);
        }
        matrix
    }

    /// Matrix dimension N
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrow row `index`
    #[inline]
    pub fn row(&self, index: usize) -> &BitVector {
        &self.rows[index]
    }

    /// Read the bit at (`row`, `col`)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].get(col)
    }

    /// Matrix × column vector: result bit i is the parity of row_i AND x
    pub fn mul_vector(&self, x: &BitVector) -> BitVector {
        assert_eq!(x.len(), self.size, "vector length must match matrix size");
        let mut result = BitVector::zeros(self.size);
        for (index, row) in self.rows.iter().enumerate() {
            if row.and_parity(x) {
                result.set(index, true);
            }
        }
        result
    }

    /// Row vector × matrix: XOR of row j for every j with x[j] set
    pub fn vector_mul(&self, x: &BitVector) -> BitVector {
        assert_eq!(x.len(), self.size, "vector length must match matrix size");
        let mut result = BitVector::zeros(self.size);
        for index in 0..self.size {
            if x.get(index) {
                result.xor_assign(&self.rows[index]);
            }
        }
        result
    }

    /// Exact matrix product over GF(2)
    pub fn mul(&self, other: &BitMatrix) -> BitMatrix {
        assert_eq!(self.size, other.size, "matrix dimensions must agree");
        let rows = self.rows.iter().map(|row| other.vector_mul(row)).collect();
        BitMatrix::from_rows(rows)
    }
}
