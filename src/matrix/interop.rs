// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait implementations for the optional ecosystem crates.

#[cfg(any(
    feature = "approx",
    feature = "bytemuck",
    feature = "matrixcompare",
    feature = "mint",
    feature = "serde"
))]
use super::Matrix;
#[cfg(feature = "serde")]
use serde_core::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, SerializeTuple, Serializer},
};

macro_rules! impl_mint_conversion {
    ( row $mint_name:ident => ($rows:literal, $cols:literal) [ $( $row_vec:ident ),* $(,)? ] ) => {
        #[cfg(feature = "mint")]
        impl<T> From<mint::$mint_name<T>> for Matrix<T, $rows, $cols> {
            #[inline]
            fn from(value: mint::$mint_name<T>) -> Self {
                Matrix::new([ $( value.$row_vec.into(), )* ])
            }
        }

        #[cfg(feature = "mint")]
        impl<T> From<Matrix<T, $rows, $cols>> for mint::$mint_name<T> {
            #[inline]
            fn from(value: Matrix<T, $rows, $cols>) -> Self {
                let rows: [[T; $cols]; $rows] = value.into();
                mint::$mint_name::from(rows)
            }
        }

        #[cfg(feature = "mint")]
        impl<T> mint::IntoMint for Matrix<T, $rows, $cols> {
            type MintType = mint::$mint_name<T>;
        }
    };

    ( col $mint_name:ident => ($rows:literal, $cols:literal) [ $( $col_vec:ident ),* $(,)? ] ) => {
        #[cfg(feature = "mint")]
        impl<T: Copy> From<mint::$mint_name<T>> for Matrix<T, $rows, $cols> {
            #[inline]
            fn from(value: mint::$mint_name<T>) -> Self {
                Matrix::<T, $cols, $rows>::new([ $( value.$col_vec.into(), )* ]).transpose()
            }
        }

        #[cfg(feature = "mint")]
        impl<T: Copy> From<Matrix<T, $rows, $cols>> for mint::$mint_name<T> {
            #[inline]
            fn from(value: Matrix<T, $rows, $cols>) -> Self {
                let cols: [[T; $rows]; $cols] = value.transpose().into();
                mint::$mint_name::from(cols)
            }
        }
    };
}

macro_rules! impl_mint_conversions {
    (
        $(
            $major:ident $mint_name:ident => ($rows:literal, $cols:literal) [ $( $vec:ident ),* $(,)? ]
        )*
    ) => {
        $(
            impl_mint_conversion!( $major $mint_name => ($rows, $cols) [ $( $vec ),* ] );
        )*
    };
}

impl_mint_conversions! {
    row RowMatrix2 => (2, 2) [x, y]
    row RowMatrix3 => (3, 3) [x, y, z]
    row RowMatrix4 => (4, 4) [x, y, z, w]

    row RowMatrix2x3 => (2, 3) [x, y]
    row RowMatrix2x4 => (2, 4) [x, y]
    row RowMatrix3x2 => (3, 2) [x, y, z]
    row RowMatrix3x4 => (3, 4) [x, y, z]
    row RowMatrix4x2 => (4, 2) [x, y, z, w]
    row RowMatrix4x3 => (4, 3) [x, y, z, w]

    col ColumnMatrix2 => (2, 2) [x, y]
    col ColumnMatrix3 => (3, 3) [x, y, z]
    col ColumnMatrix4 => (4, 4) [x, y, z, w]

    col ColumnMatrix2x3 => (2, 3) [x, y, z]
    col ColumnMatrix2x4 => (2, 4) [x, y, z, w]
    col ColumnMatrix3x2 => (3, 2) [x, y]
    col ColumnMatrix3x4 => (3, 4) [x, y, z, w]
    col ColumnMatrix4x2 => (4, 2) [x, y]
    col ColumnMatrix4x3 => (4, 3) [x, y, z]
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const ROWS: usize, const COLS: usize> bytemuck::Zeroable
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn zeroed() -> Self {
        Matrix::from_fn(|_, _| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize> bytemuck::Pod
    for Matrix<T, ROWS, COLS>
{
}

#[cfg(feature = "matrixcompare")]
impl<T: Copy, const ROWS: usize, const COLS: usize> matrixcompare_core::Matrix<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn rows(&self) -> usize {
        ROWS
    }

    #[inline]
    fn cols(&self) -> usize {
        COLS
    }

    #[inline]
    fn access(&self) -> matrixcompare_core::Access<'_, T> {
        matrixcompare_core::Access::Dense(self)
    }
}

#[cfg(feature = "matrixcompare")]
impl<T: Copy, const ROWS: usize, const COLS: usize> matrixcompare_core::DenseAccess<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn fetch_single(&self, row: usize, col: usize) -> T {
        self.at(row, col)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const ROWS: usize, const COLS: usize> approx::AbsDiffEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const ROWS: usize, const COLS: usize> approx::RelativeEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const ROWS: usize, const COLS: usize> approx::UlpsEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

/// Serialized as a sequence of rows, each a sequence of `COLS` elements.
#[cfg(feature = "serde")]
impl<T: Serialize, const ROWS: usize, const COLS: usize> Serialize for Matrix<T, ROWS, COLS> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(ROWS)?;
        for row in self.rows() {
            tuple.serialize_element(row)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de> + Copy, const ROWS: usize, const COLS: usize> Deserialize<'de>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::vector::deserialize_array(deserializer).map(Matrix::from_rows)
    }
}
