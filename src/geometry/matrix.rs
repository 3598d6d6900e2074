//! Matrix operations.
//!
//! This module provides small, stack-allocated square matrices whose
//! determinants feed the geometric predicates. Determinants are computed by
//! cofactor expansion along the first row: the formula is exact for the
//! inputs (no pivoting, no tolerance), which keeps a zero determinant an
//! exact degeneracy signal.

#![forbid(unsafe_code)]

use crate::geometry::vector::Vector;
use num_traits::Float;

/// An `N`×`N` matrix stored by rows.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::matrix::Matrix;
///
/// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.determinant(), -2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T, const N: usize> {
    rows: [[T; N]; N],
}

/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4>;

impl<T, const N: usize> Matrix<T, N>
where
    T: Float,
{
    /// Builds a matrix from row arrays.
    #[inline]
    #[must_use]
    pub const fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { rows }
    }

    /// Builds a matrix whose rows are the given vectors.
    #[inline]
    #[must_use]
    pub fn from_row_vectors(rows: [Vector<T, N>; N]) -> Self {
        Self {
            rows: rows.map(|r| r.to_array()),
        }
    }

    /// The all-zero matrix.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            rows: [[T::zero(); N]; N],
        }
    }

    /// Entry at row `r`, column `c`, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> Option<T> {
        self.rows.get(r).and_then(|row| row.get(c)).copied()
    }

    /// Returns the rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[T; N]; N] {
        &self.rows
    }
}

impl<T> Matrix<T, 2>
where
    T: Float,
{
    /// Determinant `m00·m11 − m01·m10`.
    #[inline]
    #[must_use]
    pub fn determinant(&self) -> T {
        let m = &self.rows;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }
}

impl<T> Matrix<T, 3>
where
    T: Float,
{
    /// Determinant by cofactor expansion along the first row.
    #[inline]
    #[must_use]
    pub fn determinant(&self) -> T {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

impl<T> Matrix<T, 4>
where
    T: Float,
{
    /// Determinant by cofactor expansion along the first row.
    #[inline]
    #[must_use]
    pub fn determinant(&self) -> T {
        let mut det = T::zero();
        for (col, &entry) in self.rows[0].iter().enumerate() {
            let cofactor = entry * self.first_row_minor(col).determinant();
            det = if col % 2 == 0 {
                det + cofactor
            } else {
                det - cofactor
            };
        }
        det
    }

    /// The 3×3 minor obtained by deleting row 0 and column `col`.
    fn first_row_minor(&self, col: usize) -> Matrix<T, 3> {
        let mut minor = Matrix::<T, 3>::zero();
        for (dst_row, src_row) in minor.rows.iter_mut().zip(self.rows.iter().skip(1)) {
            let mut k = 0;
            for (c, &value) in src_row.iter().enumerate() {
                if c != col {
                    dst_row[k] = value;
                    k += 1;
                }
            }
        }
        minor
    }
}

// =============================================================================
// TESTS
// =============================================================================
