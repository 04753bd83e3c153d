// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed-length vector used as the row and column type of [`Matrix`].
//!
//! [`Matrix`]: crate::matrix::Matrix

use crate::{
    matrix::Matrix,
    utils::{
        num::{ClosedAdd, One, Zero},
        sum, zip_map,
    },
};
#[cfg(feature = "serde")]
use core::marker::PhantomData;
use core::{
    array,
    fmt,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice::{self, Iter, IterMut},
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{self, Deserialize, Deserializer, SeqAccess},
    ser::{Serialize, SerializeTuple, Serializer},
};

/// A column vector of `N` elements.
///
/// Vectors never multiply a matrix from the left; convert with [`Vector::to_row_vector()`]
/// when a row-vector product is intended.
#[repr(C)]
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Vector<T = f32, const N: usize = 3> {
    data: [T; N],
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("Vector ")?;
        let mut debug_list = fmtr.debug_list();
        debug_list.entries(self.data.iter());
        debug_list.finish()
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self {
            data: array::from_fn(|_| Default::default()),
        }
    }
}

pub type Vector1<T = f32> = Vector<T, 1>;
pub type Vector2<T = f32> = Vector<T, 2>;
pub type Vector3<T = f32> = Vector<T, 3>;
pub type Vector4<T = f32> = Vector<T, 4>;

impl_coerce_to_fields! {
    Vector<{T, 1}> => X,
    Vector<{T, 2}> => Xy,
    Vector<{T, 3}> => Xyz,
    Vector<{T, 4}> => Xyzw,
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of elements in the vector.
    pub const LENGTH: usize = N;

    /// Returns a new vector, initializing every element from the given `array`.
    ///
    /// # Example
    ///
    /// ```
    /// # use fixmat::vector::Vector;
    /// let vector: Vector<i32, 5> = Vector::new([1, 2, 3, 4, 5]);
    /// assert_eq!(vector[4], 5);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(array: [T; N]) -> Self {
        Self { data: array }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(array::from_fn(f))
    }

    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector {
            data: self.data.map(f),
        }
    }

    #[must_use]
    #[inline]
    pub const fn get(&self, index: usize) -> Option<&T> {
        if index < N { Some(&self.data[index]) } else { None }
    }

    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// # Safety
    ///
    /// `index` must be smaller than `N`.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.data.get_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index` must be smaller than `N`.
    #[must_use]
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.data.get_unchecked_mut(index) }
    }

    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[must_use]
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), Self::LENGTH) }
    }

    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), Self::LENGTH) }
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Returns a vector where every element is `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::vector::Vector;
    /// let vector = Vector::<_, 4>::splat(7);
    /// assert_eq!(vector.to_array(), [7; 4]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    #[must_use]
    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn zip_map<U: Copy, Ret, F: FnMut(T, U) -> Ret>(self, rhs: Vector<U, N>, f: F) -> Vector<Ret, N> {
        Vector {
            data: zip_map(self.data, rhs.data, f),
        }
    }

    #[must_use]
    #[inline]
    pub fn dot<U: Copy>(self, rhs: Vector<U, N>) -> T::Output
    where
        T: Mul<U>,
        T::Output: Zero + ClosedAdd,
    {
        sum(zip_map(self.data, rhs.data, Mul::mul))
    }

    #[must_use]
    #[inline]
    pub fn elementwise_mul<U: Copy>(self, rhs: Vector<U, N>) -> Vector<T::Output, N>
    where
        T: Mul<U>,
    {
        self.zip_map(rhs, Mul::mul)
    }

    #[must_use]
    #[inline]
    pub fn elementwise_div<U: Copy>(self, rhs: Vector<U, N>) -> Vector<T::Output, N>
    where
        T: Div<U>,
    {
        self.zip_map(rhs, Div::div)
    }

    /// Converts this column vector into a `1 x N` row matrix.
    ///
    /// The elements are copied unchanged. This is the only way to multiply a vector from the
    /// left of a matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::{matrix::Matrix, vector::Vector};
    /// let row = Vector::new([1, 2]).to_row_vector();
    /// let scale = Matrix::new([
    ///     [2, 0],
    ///     [0, 3],
    /// ]);
    ///
    /// assert_eq!((row * scale).to_column_vector(), Vector::new([2, 6]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn to_row_vector(self) -> Matrix<T, 1, N> {
        Matrix::from_row_vector(self)
    }
}

impl<T: One + Zero + Copy, const N: usize> Vector<T, N> {
    /// Returns a vector with a `1` at `dim` and `0` everywhere else.
    ///
    /// # Panics
    ///
    /// Panics if `dim >= N`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn unit(dim: usize) -> Self {
        assert!(dim < N, "unit vector dimension out of bounds");
        let mut vector = Self::splat(T::ZERO);
        vector.data[dim] = T::ONE;
        vector
    }
}

impl<T: Zero + Copy, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Vector::splat(T::ZERO);
}

impl<T: Neg + Copy, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T: Mul + Copy, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: MulAssign<U>, U: Copy, const N: usize> MulAssign<U> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: U) {
        for elem in self.iter_mut() {
            elem.mul_assign(rhs);
        }
    }
}

impl<T: Add<U> + Copy, U: Copy, const N: usize> Add<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn add(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: AddAssign<U>, U: Copy, const N: usize> AddAssign<Vector<U, N>> for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector<U, N>) {
        for (x, y) in self.iter_mut().zip(rhs.data) {
            x.add_assign(y);
        }
    }
}

impl<T: Sub<U> + Copy, U: Copy, const N: usize> Sub<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn sub(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: SubAssign<U>, U: Copy, const N: usize> SubAssign<Vector<U, N>> for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<U, N>) {
        for (x, y) in self.iter_mut().zip(rhs.data) {
            x.sub_assign(y);
        }
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.data)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

macro_rules! impl_mint_vector {
    ( $( $mint_type:ident < $len:literal > { $( $field:ident ),+ } ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<mint::$mint_type<T>> for Vector<T, $len> {
                #[inline]
                fn from(mint::$mint_type { $( $field ),+ }: mint::$mint_type<T>) -> Self {
                    Vector::new([ $( $field ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Vector<T, $len>> for mint::$mint_type<T> {
                #[inline]
                fn from(value: Vector<T, $len>) -> Self {
                    mint::$mint_type::from(value.data)
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Vector<T, $len> {
                type MintType = mint::$mint_type<T>;
            }
        )*
    };
}

impl_mint_vector! {
    Vector2<2> { x, y },
    Vector3<3> { x, y, z },
    Vector4<4> { x, y, z, w },
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {
    #[inline]
    fn zeroed() -> Self {
        Vector::from_fn(|_| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const N: usize> approx::AbsDiffEq for Vector<T, N>
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
impl<T: approx::RelativeEq, const N: usize> approx::RelativeEq for Vector<T, N>
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
impl<T: approx::UlpsEq, const N: usize> approx::UlpsEq for Vector<T, N>
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

#[cfg(feature = "serde")]
impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for elem in self.iter() {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de> + Copy, const N: usize> Deserialize<'de> for Vector<T, N> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_array(deserializer).map(Vector::new)
    }
}

/// Deserializes exactly `N` elements from a sequence into an array.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_array<'de, D, E, const N: usize>(deserializer: D) -> Result<[E; N], D::Error>
where
    D: Deserializer<'de>,
    E: Deserialize<'de> + Copy,
{
    struct ExpectedLength<const N: usize>;

    impl<const N: usize> de::Expected for ExpectedLength<N> {
        #[inline]
        fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "an array of {N} elements")
        }
    }

    struct Visitor<E, const N: usize>(PhantomData<[E; N]>);

    impl<'de, E: Deserialize<'de> + Copy, const N: usize> de::Visitor<'de> for Visitor<E, N> {
        type Value = [E; N];

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            de::Expected::fmt(&ExpectedLength::<N>, formatter)
        }

        #[inline]
        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut slots = [None::<E>; N];

            for (i, slot) in slots.iter_mut().enumerate() {
                match seq.next_element::<E>()? {
                    Some(item) => *slot = Some(item),
                    None => return Err(de::Error::invalid_length(i, &ExpectedLength::<N>)),
                }
            }

            if seq.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &ExpectedLength::<N>));
            }

            Ok(slots.map(|slot| match slot {
                Some(item) => item,
                None => unreachable!("every slot was filled above"),
            }))
        }
    }

    deserializer.deserialize_tuple(N, Visitor::<E, N>(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        let mut vector = Vector::new([1, 2, 3]);
        assert_eq!((vector.x, vector.y, vector.z), (1, 2, 3));

        vector.y = 20;
        assert_eq!(vector[1], 20);

        let vector = Vector4::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(vector.w, 4.0);
    }

    #[test]
    fn test_dot() {
        let v1 = Vector::new([1.0, 2.0, 3.0]);
        let v2 = Vector::new([7.0, 8.0, 9.0]);

        assert_eq!(Vector::dot(v1, v2), 50.0);
        assert_eq!(Vector3::<i32>::unit(1).dot(Vector::new([4, 5, 6])), 5);
    }

    #[test]
    fn test_arithmetic() {
        let v1 = Vector::new([1, 2, 3]);
        let v2 = Vector::new([4, 5, 6]);

        assert_eq!(v1 + v2, Vector::new([5, 7, 9]));
        assert_eq!(v2 - v1, Vector::splat(3));
        assert_eq!(v1 * 2, Vector::new([2, 4, 6]));
        assert_eq!(-v1, Vector::new([-1, -2, -3]));
        assert_eq!(v1.elementwise_mul(v2), Vector::new([4, 10, 18]));
        assert_eq!(v2.elementwise_div(v1), Vector::new([4, 2, 2]));

        let mut v3 = v1;
        v3 += v2;
        v3 -= v1;
        v3 *= 3;
        assert_eq!(v3, Vector::new([12, 15, 18]));
    }

    #[test]
    fn test_get() {
        let mut vector = Vector::new([1, 2]);
        assert_eq!(vector.get(1), Some(&2));
        assert_eq!(vector.get(2), None);

        if let Some(elem) = vector.get_mut(0) {
            *elem = 9;
        }
        assert_eq!(vector.as_slice(), &[9, 2]);
    }

    #[test]
    #[should_panic]
    fn test_unit_out_of_bounds() {
        let _ = Vector2::<f32>::unit(2);
    }

    #[cfg(feature = "mint")]
    #[test]
    fn test_mint_conversions() {
        let mint_vector = mint::Vector3 { x: 1, y: 2, z: 3 };
        let vector: Vector3<i32> = mint_vector.into();
        assert_eq!(vector, Vector::new([1, 2, 3]));

        let back: mint::Vector3<i32> = vector.into();
        assert_eq!(back, mint_vector);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let vector = Vector::new([1.5, -2.0, 3.25]);
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, "[1.5,-2.0,3.25]");

        let back: Vector3<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vector);

        assert!(serde_json::from_str::<Vector3<f64>>("[1.0,2.0]").is_err());
        assert!(serde_json::from_str::<Vector3<f64>>("[1.0,2.0,3.0,4.0]").is_err());
    }
}
