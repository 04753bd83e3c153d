// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    utils::{
        hash_combine,
        num::{Cast, HashBits, One, Scalar, Zero},
        without_index,
    },
    vector::Vector,
};
use core::{
    array, fmt,
    hash::{Hash, Hasher},
    ops::{Div, Index, IndexMut, Mul},
    slice,
};

mod det;
mod interop;
mod ops;
mod square;

#[cfg(test)]
mod tests;

pub use self::square::*;

/// A row-major matrix of arbitrary dimensions.
///
/// The matrix is stored as `ROWS` row vectors of `COLS` elements each, in one contiguous
/// block: element `(i, j)` is component `j` of row `i`, and lives at offset `i * COLS + j`
/// of [`as_slice()`].
///
/// [`as_slice()`]: Matrix::as_slice
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(C)]
pub struct Matrix<T = f32, const ROWS: usize = 4, const COLS: usize = 4> {
    rows: [Vector<T, COLS>; ROWS],
}

impl<T: Default, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_, _| Default::default())
    }
}

impl<T, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// The number of elements in the matrix, `ROWS * COLS`.
    pub const NUM_ELEMENTS: usize = ROWS * COLS;

    /// Create a new `Matrix` from the given nested array, one inner array per row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let data: [[i32; 3]; 2] = [[1, 2, 3], [4, 5, 6]];
    /// let matrix: Matrix<i32, 2, 3> = Matrix::new(data);
    /// assert_eq!(matrix[(1, 0)], 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn new(data: [[T; COLS]; ROWS]) -> Self {
        Self {
            rows: data.map(Vector::new),
        }
    }

    /// Create a new `Matrix` from exactly `ROWS` row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::{matrix::Matrix, vector::Vector};
    /// let matrix = Matrix::from_rows([
    ///     Vector::new([1, 2]),
    ///     Vector::new([3, 4]),
    /// ]);
    /// assert_eq!(matrix, Matrix::new([[1, 2], [3, 4]]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn from_rows(rows: [Vector<T, COLS>; ROWS]) -> Self {
        Self { rows }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            rows: array::from_fn(|row| Vector::from_fn(|col| f(row, col))),
        }
    }

    /// Returns the row vectors of the matrix.
    #[must_use]
    #[inline]
    pub const fn rows(&self) -> &[Vector<T, COLS>; ROWS] {
        &self.rows
    }

    #[must_use]
    #[inline]
    pub const fn rows_mut(&mut self) -> &mut [Vector<T, COLS>; ROWS] {
        &mut self.rows
    }

    /// Access the start of the `Matrix`'s element data as a pointer.
    ///
    /// The `ROWS * COLS` elements behind the pointer are in row-major order.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.rows.as_ptr().cast()
    }

    #[must_use]
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.rows.as_mut_ptr().cast()
    }

    /// Returns the elements of the matrix as a flat, row-major slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), Self::NUM_ELEMENTS) }
    }

    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), Self::NUM_ELEMENTS) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Attempt to get a reference to the element at `(row, col)`.
    ///
    /// This method returns `None` if either of the given indices are out of bounds.
    #[must_use]
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < ROWS { self.rows[row].get(col) } else { None }
    }

    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.rows.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Get a reference to the element at `(row, col)` without performing any bounds checks.
    ///
    /// # Safety
    ///
    /// `row` must be smaller than `ROWS` and `col` smaller than `COLS`, otherwise this
    /// method causes undefined behavior.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        unsafe { self.rows.get_unchecked(row).get_unchecked(col) }
    }

    /// Get a mutable reference to the element at `(row, col)` without performing any bounds
    /// checks.
    ///
    /// # Safety
    ///
    /// `row` must be smaller than `ROWS` and `col` smaller than `COLS`, otherwise this
    /// method causes undefined behavior.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        unsafe { self.rows.get_unchecked_mut(row).get_unchecked_mut(col) }
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`. The check is kept in release builds.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        match self.get_mut(row, col) {
            Some(elem) => elem,
            None => out_of_bounds(row, col, ROWS, COLS),
        }
    }

    /// Applies the given function `f` to every element of the `Matrix`, returning
    /// a new matrix.
    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, ROWS, COLS> {
        Matrix {
            rows: self.rows.map(|row| row.map(&mut f)),
        }
    }

    /// Returns the dimensions of the matrix as `(ROWS, COLS)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::{matrix::Matrix, vector::Vector};
    /// let matrix = Matrix::<f32, 2, 5>::splat(0.0);
    /// assert_eq!(matrix.dimensions(), Vector::new([2, 5]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn dimensions(&self) -> Vector<usize, 2> {
        Vector::new([ROWS, COLS])
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a new matrix, where every element of `Matrix` is set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let matrix: Matrix<_, 4, 4> = Matrix::splat(21);
    /// assert!(matrix.iter().all(|elem| *elem == 21));
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            rows: [Vector::splat(value); ROWS],
        }
    }

    /// Creates a matrix from the first `ROWS * COLS` elements of `elems`, in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `elems` has fewer than `ROWS * COLS` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let matrix = Matrix::<_, 2, 2>::from_slice(&[1, 2, 3, 4]);
    /// assert_eq!(matrix, Matrix::new([[1, 2], [3, 4]]));
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn from_slice(elems: &[T]) -> Self {
        match Self::try_from_slice(elems) {
            Some(matrix) => matrix,
            None => panic!(
                "a {ROWS}x{COLS} matrix needs {} elements, but only {} were given",
                Self::NUM_ELEMENTS,
                elems.len()
            ),
        }
    }

    /// Creates a matrix from the first `ROWS * COLS` elements of `elems`, in row-major order.
    ///
    /// Returns `None` if `elems` is too short.
    #[must_use]
    #[inline]
    pub fn try_from_slice(elems: &[T]) -> Option<Self> {
        if elems.len() < Self::NUM_ELEMENTS {
            return None;
        }

        Some(Self::from_fn(|row, col| elems[row * COLS + col]))
    }

    /// Creates a matrix by copying `ROWS * COLS` elements, in row-major order, from `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `ROWS * COLS` consecutive, initialized elements.
    #[must_use]
    #[inline]
    pub unsafe fn from_ptr(ptr: *const T) -> Self {
        let elems = unsafe { slice::from_raw_parts(ptr, Self::NUM_ELEMENTS) };
        Self::from_fn(|row, col| elems[row * COLS + col])
    }

    /// Converts every element to the element type `U` with an `as`-style cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let matrix = Matrix::new([[1.75f64, -2.5]]);
    /// assert_eq!(matrix.cast::<i32>(), Matrix::new([[1, -2]]));
    /// ```
    #[must_use]
    #[inline]
    pub fn cast<U>(self) -> Matrix<U, ROWS, COLS>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`. The check is kept in release builds.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        match self.get(row, col) {
            Some(elem) => *elem,
            None => out_of_bounds(row, col, ROWS, COLS),
        }
    }

    /// Sets the element at `(row, col)` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    #[track_caller]
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        *self.at_mut(row, col) = value;
    }

    /// Returns a copy of the row at `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= ROWS`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn row(&self, n: usize) -> Vector<T, COLS> {
        assert!(n < ROWS, "row index {n} out of bounds for a matrix with {ROWS} rows");
        self.rows[n]
    }

    #[track_caller]
    #[inline]
    pub fn set_row(&mut self, n: usize, row: Vector<T, COLS>) {
        assert!(n < ROWS, "row index {n} out of bounds for a matrix with {ROWS} rows");
        self.rows[n] = row;
    }

    /// Returns a copy of the column at `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= COLS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::{matrix::Matrix, vector::Vector};
    /// let matrix = Matrix::new([
    ///     [0, 1, 2, 3, 4],
    ///     [5, 6, 7, 8, 9]
    /// ]);
    ///
    /// assert_eq!(matrix.column(1), Vector::new([1, 6]));
    /// assert_eq!(matrix.column(4), Vector::new([4, 9]));
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn column(&self, n: usize) -> Vector<T, ROWS> {
        match self.try_column(n) {
            Some(column) => column,
            None => panic!("column index {n} out of bounds for a matrix with {COLS} columns"),
        }
    }

    #[must_use]
    #[inline]
    pub fn try_column(&self, n: usize) -> Option<Vector<T, ROWS>> {
        if n >= COLS {
            return None;
        }

        Some(Vector::from_fn(|row| self.rows[row][n]))
    }

    /// Sets the column of the `Matrix` at `n` to the given `column`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= COLS`.
    #[track_caller]
    #[inline]
    pub fn set_column(&mut self, n: usize, column: Vector<T, ROWS>) {
        assert!(n < COLS, "column index {n} out of bounds for a matrix with {COLS} columns");
        for (row, elem) in self.rows.iter_mut().zip(column) {
            row[n] = elem;
        }
    }

    /// Returns the matrix formed by deleting `row` and `col`.
    ///
    /// The output dimensions must be exactly one smaller than the input dimensions, which is
    /// checked at compile time. They are usually inferred from the surrounding code.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::{Matrix, Matrix3};
    /// let matrix = Matrix::new([
    ///     [01, 02, 03, 04],
    ///     [05, 06, 07, 08],
    ///     [09, 10, 11, 12],
    ///     [13, 14, 15, 16],
    /// ]);
    ///
    /// let submatrix: Matrix3<i32> = matrix.submatrix(1, 2);
    ///
    /// assert_eq!(submatrix, Matrix::new([
    ///     [01, 02, 04],
    ///     [09, 10, 12],
    ///     [13, 14, 16],
    /// ]));
    /// ```
    ///
    /// A submatrix whose dimensions are not one smaller fails to compile:
    ///
    /// ```compile_fail
    /// # use fixmat::matrix::Matrix;
    /// let matrix = Matrix::<i32, 3, 3>::splat(1);
    /// let _ = matrix.submatrix::<1, 1>(0, 0);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn submatrix<const SUB_ROWS: usize, const SUB_COLS: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Matrix<T, SUB_ROWS, SUB_COLS> {
        match self.try_submatrix(row, col) {
            Some(submatrix) => submatrix,
            None => out_of_bounds(row, col, ROWS, COLS),
        }
    }

    /// Returns the matrix formed by deleting `row` and `col`, or `None` if either index is
    /// out of bounds.
    #[must_use]
    #[inline]
    pub fn try_submatrix<const SUB_ROWS: usize, const SUB_COLS: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Option<Matrix<T, SUB_ROWS, SUB_COLS>> {
        crate::const_assert_one_smaller!(ROWS, SUB_ROWS);
        crate::const_assert_one_smaller!(COLS, SUB_COLS);

        if row >= ROWS || col >= COLS {
            return None;
        }

        let kept_rows: [Vector<T, COLS>; SUB_ROWS] = without_index(&self.rows, row);
        Some(Matrix::from_rows(
            kept_rows.map(|kept| Vector::new(without_index(kept.as_array(), col))),
        ))
    }

    /// Computes the transpose of the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3, 4],
    ///     [5, 6, 7, 8],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::new([
    ///     [1, 5],
    ///     [2, 6],
    ///     [3, 7],
    ///     [4, 8],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Matrix<T, COLS, ROWS> {
        Matrix::from_fn(|row, col| self.rows[col][row])
    }

    #[inline]
    pub fn zip_map<U: Copy, Ret, F: FnMut(T, U) -> Ret>(
        self,
        rhs: Matrix<U, ROWS, COLS>,
        mut f: F,
    ) -> Matrix<Ret, ROWS, COLS> {
        Matrix::from_fn(|row, col| f(self.rows[row][col], rhs.rows[row][col]))
    }

    /// Multiplies each element with the element at the same position in `rhs`.
    ///
    /// This is not the matrix product; see the `Mul` implementations for that.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let lhs = Matrix::new([[1, 2], [3, 4]]);
    /// let rhs = Matrix::new([[5, 6], [7, 8]]);
    /// assert_eq!(lhs.elementwise_mul(rhs), Matrix::new([[5, 12], [21, 32]]));
    /// ```
    #[must_use]
    #[inline]
    pub fn elementwise_mul<U: Copy>(self, rhs: Matrix<U, ROWS, COLS>) -> Matrix<T::Output, ROWS, COLS>
    where
        T: Mul<U>,
    {
        self.zip_map(rhs, Mul::mul)
    }

    /// Divides each element by the element at the same position in `rhs`.
    ///
    /// Division by zero behaves as it does for the element type.
    #[must_use]
    #[inline]
    pub fn elementwise_div<U: Copy>(self, rhs: Matrix<U, ROWS, COLS>) -> Matrix<T::Output, ROWS, COLS>
    where
        T: Div<U>,
    {
        self.zip_map(rhs, Div::div)
    }

    /// In-place version of [`elementwise_mul()`](Matrix::elementwise_mul).
    #[inline]
    pub fn elementwise_mul_assign(&mut self, rhs: Self) -> &mut Self
    where
        T: Mul<Output = T>,
    {
        *self = self.elementwise_mul(rhs);
        self
    }

    /// In-place version of [`elementwise_div()`](Matrix::elementwise_div).
    #[inline]
    pub fn elementwise_div_assign(&mut self, rhs: Self) -> &mut Self
    where
        T: Div<Output = T>,
    {
        *self = self.elementwise_div(rhs);
        self
    }

    /// Returns a hash of every element, combined in row-major order.
    ///
    /// Equal matrices have equal hashes, and the result does not depend on the process or the
    /// platform.
    #[must_use]
    #[inline]
    pub fn hash_code(&self) -> u64
    where
        T: HashBits,
    {
        self.iter()
            .fold(0, |seed, elem| hash_combine(seed, elem.hash_bits()))
    }
}

impl<T, const COLS: usize> Matrix<T, 1, COLS> {
    /// Creates a new single-row matrix from the given vector.
    #[must_use]
    #[inline]
    pub const fn from_row_vector(vector: Vector<T, COLS>) -> Self {
        Self::from_rows([vector])
    }
}

impl<T: Copy, const COLS: usize> Matrix<T, 1, COLS> {
    /// Converts the single-row matrix back into a vector of `COLS` elements.
    #[must_use]
    #[inline]
    pub const fn to_column_vector(self) -> Vector<T, COLS> {
        self.rows[0]
    }
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// Constructs an instance of the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let matrix = Matrix::<f64, 3, 3>::identity();
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Transposes the matrix by swapping elements around the diagonal.
    #[inline]
    pub fn transpose_in_place(&mut self) -> &mut Self {
        let elems = self.as_mut_slice();
        for row in 0..N {
            for col in row + 1..N {
                elems.swap(row * N + col, col * N + row);
            }
        }
        self
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Multiplies the matrix with itself `exponent` times.
    ///
    /// `pow(0)` is the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::matrix::Matrix;
    /// let matrix = Matrix::new([[2, 0], [0, 2]]);
    /// assert_eq!(matrix.pow(3), Matrix::new([[8, 0], [0, 8]]));
    /// ```
    #[must_use]
    #[inline]
    pub fn pow(self, exponent: u32) -> Self {
        let mut result = Self::identity();
        for _ in 0..exponent {
            result *= self;
        }
        result
    }

    /// In-place version of [`pow()`](Matrix::pow).
    #[inline]
    pub fn pow_assign(&mut self, exponent: u32) -> &mut Self {
        *self = self.pow(exponent);
        self
    }
}

#[cold]
#[track_caller]
#[inline(never)]
fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> ! {
    panic!("matrix index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")
}

impl<T: Zero + Copy, const ROWS: usize, const COLS: usize> Zero for Matrix<T, ROWS, COLS> {
    const ZERO: Self = Matrix::splat(T::ZERO);
}

impl<T, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS> {
    type Output = Vector<T, COLS>;

    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Matrix<T, ROWS, COLS> {
    type Output = T;

    #[track_caller]
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.get(row, col) {
            Some(elem) => elem,
            None => out_of_bounds(row, col, ROWS, COLS),
        }
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Matrix<T, ROWS, COLS> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.at_mut(row, col)
    }
}

impl<T: HashBits, const ROWS: usize, const COLS: usize> Hash for Matrix<T, ROWS, COLS> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: fmt::Display, const ROWS: usize, const COLS: usize> fmt::Display for Matrix<T, ROWS, COLS> {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                fmtr.write_str("\n")?;
            }

            fmtr.write_str("[")?;
            for (j, elem) in row.iter().enumerate() {
                if j > 0 {
                    fmtr.write_str(", ")?;
                }
                fmt::Display::fmt(elem, fmtr)?;
            }
            fmtr.write_str("]")?;
        }

        Ok(())
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn from(value: [[T; COLS]; ROWS]) -> Self {
        Self::new(value)
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<Matrix<T, ROWS, COLS>> for [[T; COLS]; ROWS] {
    #[inline]
    fn from(value: Matrix<T, ROWS, COLS>) -> Self {
        value.rows.map(Into::into)
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<[Vector<T, COLS>; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn from(rows: [Vector<T, COLS>; ROWS]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsMut<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
