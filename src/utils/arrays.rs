// SPDX-License-Identifier: MIT OR Apache-2.0

use core::array;

/// Zips two arrays together and applies the function `f` to each memberwise element, returning a fixed
/// size array of the results.
///
/// # Examples
///
/// ```
/// # use fixmat::utils::zip_map;
/// let sums = zip_map([1, 2, 3], [10, 20, 30], |x, y| x + y);
/// assert_eq!(sums, [11, 22, 33]);
/// ```
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    T: Copy,
    U: Copy,
    F: FnMut(T, U) -> Res,
{
    array::from_fn(|i| f(lhs[i], rhs[i]))
}

/// Copies `src` into a new array, leaving out the element at `skip`.
///
/// The output length must be exactly one less than the input length.
///
/// # Panics
///
/// Panics if `skip >= N`.
///
/// # Examples
///
/// ```
/// # use fixmat::utils::without_index;
/// let array: [i32; 3] = without_index(&[1, 2, 3, 4], 1);
/// assert_eq!(array, [1, 3, 4]);
/// ```
#[track_caller]
#[must_use]
#[inline]
pub fn without_index<T: Copy, const N: usize, const N1: usize>(src: &[T; N], skip: usize) -> [T; N1] {
    crate::const_assert_one_smaller!(N, N1);
    assert!(skip < N, "index {skip} out of bounds for array of length {N}");

    array::from_fn(|i| if i < skip { src[i] } else { src[i + 1] })
}
