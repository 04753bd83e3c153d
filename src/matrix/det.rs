// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed-form determinant, minor, adjugate and inverse for the 2x2, 3x3 and 4x4 matrices.

use super::{Matrix, Matrix2, Matrix3, Matrix4};
use crate::utils::num::{Real, Scalar, Signed};

impl<T: Scalar> Matrix2<T> {
    /// Computes the determinant, `a*d - b*c`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix2;
    /// let matrix = Matrix2::new([[1, 2], [3, 4]]);
    /// assert_eq!(matrix.determinant(), -2);
    /// ```
    #[must_use]
    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }
}

impl<T: Scalar> Matrix3<T> {
    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix3;
    /// let matrix = Matrix3::new([
    ///     [3, 1, 2],
    ///     [0, 2, 5],
    ///     [2, 0, 4],
    /// ]);
    ///
    /// assert_eq!(matrix.determinant(), 26);
    /// ```
    #[must_use]
    #[inline]
    pub fn determinant(&self) -> T {
        let m = self.alphabetic();
        m.a * (m.e * m.i - m.f * m.h) - m.b * (m.d * m.i - m.f * m.g) + m.c * (m.d * m.h - m.e * m.g)
    }
}

impl<T: Scalar> Matrix4<T> {
    /// Computes the determinant by cofactor expansion along the first row, using the minors
    /// of the first row's elements.
    #[must_use]
    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.minor(0, 0) - self.b * self.minor(0, 1) + self.c * self.minor(0, 2)
            - self.d * self.minor(0, 3)
    }
}

macro_rules! impl_minor {
    ( $( $dim:literal => $sub_dim:literal ),* $(,)? ) => {
        $(
            impl<T: Scalar> Matrix<T, $dim, $dim> {
                /// Computes the determinant of the submatrix formed by deleting `row` and `col`.
                ///
                /// # Panics
                ///
                /// Panics if `row` or `col` is out of bounds.
                #[track_caller]
                #[must_use]
                #[inline]
                pub fn minor(&self, row: usize, col: usize) -> T {
                    self.submatrix::<$sub_dim, $sub_dim>(row, col).determinant()
                }
            }

            impl<T: Signed> Matrix<T, $dim, $dim> {
                /// Computes the adjugate, the transpose of the cofactor matrix.
                ///
                /// Element `(i, j)` of the result is the minor at `(j, i)`, negated when `i + j`
                /// is odd. The product of a matrix with its adjugate is the identity scaled by the
                /// determinant.
                #[must_use]
                #[inline]
                pub fn adjugate(&self) -> Self {
                    Self::from_fn(|row, col| {
                        let minor = self.minor(col, row);
                        if (row + col) % 2 == 0 { minor } else { -minor }
                    })
                }
            }
        )*
    };
}

impl_minor! {
    3 => 2,
    4 => 3,
}

impl<T: Signed> Matrix2<T> {
    /// Computes the adjugate, `[[d, -b], [-c, a]]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix2;
    /// let matrix = Matrix2::new([[1, 2], [3, 4]]);
    /// assert_eq!(matrix.adjugate(), Matrix2::new([[4, -2], [-3, 1]]));
    /// ```
    #[must_use]
    #[inline]
    pub fn adjugate(&self) -> Self {
        Self::new([[self.d, -self.b], [-self.c, self.a]])
    }
}

macro_rules! impl_inverse {
    ( $( $dim:literal ),* $(,)? ) => {
        $(
            impl<T: Real> Matrix<T, $dim, $dim> {
                /// Computes the inverse by dividing the adjugate element-wise by the determinant.
                ///
                /// The determinant is not checked. A singular matrix yields non-finite elements;
                /// use [`inverse_checked()`](Self::inverse_checked) to detect that case instead.
                ///
                /// # Examples
                ///
                /// ```
                /// # use fixmat::matrix::Matrix2;
                /// let matrix = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
                /// assert_eq!(matrix.inverse(), Matrix2::new([[-2.0, 1.0], [1.5, -0.5]]));
                /// ```
                #[must_use]
                #[inline]
                pub fn inverse(&self) -> Self {
                    let det = self.determinant();
                    self.adjugate().map(|elem| elem / det)
                }

                /// Computes the inverse, or returns `None` if the determinant is exactly zero.
                #[must_use]
                #[inline]
                pub fn inverse_checked(&self) -> Option<Self> {
                    let det = self.determinant();
                    if det == T::ZERO {
                        return None;
                    }

                    Some(self.adjugate().map(|elem| elem / det))
                }
            }
        )*
    };
}

impl_inverse!(2, 3);
