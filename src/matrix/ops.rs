// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Matrix;
use crate::{
    utils::{num::Scalar, sum},
    vector::Vector,
};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<T: Add<U> + Copy, U: Copy, const ROWS: usize, const COLS: usize> Add<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn add(self, rhs: Matrix<U, ROWS, COLS>) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: AddAssign<U>, U: Copy, const ROWS: usize, const COLS: usize> AddAssign<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn add_assign(&mut self, rhs: Matrix<U, ROWS, COLS>) {
        for (row, rhs_row) in self.rows.iter_mut().zip(rhs.rows) {
            *row += rhs_row;
        }
    }
}

impl<T: Sub<U> + Copy, U: Copy, const ROWS: usize, const COLS: usize> Sub<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn sub(self, rhs: Matrix<U, ROWS, COLS>) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: SubAssign<U>, U: Copy, const ROWS: usize, const COLS: usize> SubAssign<Matrix<U, ROWS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Matrix<U, ROWS, COLS>) {
        for (row, rhs_row) in self.rows.iter_mut().zip(rhs.rows) {
            *row -= rhs_row;
        }
    }
}

impl<T: Neg, const ROWS: usize, const COLS: usize> Neg for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

/// The matrix product. The inner dimensions must agree, which the types enforce.
impl<T: Scalar, const LHS_ROWS: usize, const N: usize, const RHS_COLS: usize> Mul<Matrix<T, N, RHS_COLS>>
    for Matrix<T, LHS_ROWS, N>
{
    type Output = Matrix<T, LHS_ROWS, RHS_COLS>;

    #[inline]
    fn mul(self, rhs: Matrix<T, N, RHS_COLS>) -> Self::Output {
        Matrix::from_fn(|row, col| sum((0..N).map(|k| self.rows[row][k] * rhs.rows[k][col])))
    }
}

impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

/// Transforms a column vector: component `i` of the result is the dot product of row `i` and
/// `rhs`.
impl<T: Scalar, const ROWS: usize, const COLS: usize> Mul<Vector<T, COLS>> for Matrix<T, ROWS, COLS> {
    type Output = Vector<T, ROWS>;

    #[inline]
    fn mul(self, rhs: Vector<T, COLS>) -> Self::Output {
        Vector::from_fn(|row| self.rows[row].dot(rhs))
    }
}

macro_rules! impl_scalar_ops {
    ( $( $scalar:ty ),* $(,)? ) => {
        $(
            impl<const ROWS: usize, const COLS: usize> Mul<$scalar> for Matrix<$scalar, ROWS, COLS> {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $scalar) -> Self::Output {
                    self.map(|elem| elem * rhs)
                }
            }

            impl<const ROWS: usize, const COLS: usize> Mul<Matrix<$scalar, ROWS, COLS>> for $scalar {
                type Output = Matrix<$scalar, ROWS, COLS>;

                #[inline]
                fn mul(self, rhs: Matrix<$scalar, ROWS, COLS>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }

            impl<const ROWS: usize, const COLS: usize> MulAssign<$scalar> for Matrix<$scalar, ROWS, COLS> {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    for elem in self.iter_mut() {
                        *elem *= rhs;
                    }
                }
            }
        )*
    };
}

impl_scalar_ops! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}
