// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::hash_combine;
use core::ops::{Add, Div, Mul, Neg, Sub};

pub trait ClosedSub: Sized + Sub<Output = Self> {}
pub trait ClosedMul: Sized + Mul<Output = Self> {}
pub trait ClosedAdd: Sized + Add<Output = Self> {}
pub trait ClosedDiv: Sized + Div<Output = Self> {}
pub trait ClosedNeg: Sized + Neg<Output = Self> {}

impl<T: Sized + Sub<Output = Self>> ClosedSub for T {}
impl<T: Sized + Mul<Output = Self>> ClosedMul for T {}
impl<T: Sized + Add<Output = Self>> ClosedAdd for T {}
impl<T: Sized + Div<Output = Self>> ClosedDiv for T {}
impl<T: Sized + Neg<Output = Self>> ClosedNeg for T {}

/// The element requirements shared by every arithmetic operation on a [`Matrix`].
///
/// [`Matrix`]: crate::matrix::Matrix
pub trait Scalar: Copy + ClosedAdd + ClosedSub + ClosedMul + One + Zero + PartialEq {}

impl<T> Scalar for T where T: Copy + ClosedAdd + ClosedSub + ClosedMul + One + Zero + PartialEq {}

/// A [`Scalar`] which can be negated, needed for cofactor signs.
pub trait Signed: Scalar + ClosedNeg {}
impl<T: Scalar + ClosedNeg> Signed for T {}

/// Marker for floating point element types.
///
/// Matrix inversion is only offered for `Real` elements, as integer matrices rarely
/// have an integer inverse.
pub trait Real: Signed + ClosedDiv {}

#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;
}

/// An explicit, possibly lossy, numeric conversion between element types.
///
/// This behaves exactly like an `as` cast, and is used by [`Matrix::cast()`] so that
/// narrowing conversions are always spelled out at the call site.
///
/// [`Matrix::cast()`]: crate::matrix::Matrix::cast
pub trait Cast<U>: Copy {
    #[must_use]
    fn cast(self) -> U;
}

/// Produces a 64-bit hash input for an element.
///
/// Values which compare equal must produce equal bits, so floating point zeroes of either
/// sign map to the same value.
pub trait HashBits: Copy {
    #[must_use]
    fn hash_bits(self) -> u64;
}

macro_rules! impl_nums {
    (
        $(
            $num_ty:ty => ( zero = $zero:expr, one = $one:expr )
        ),* $(,)?
    ) => {
        $(
            impl Zero for $num_ty {
                const ZERO: Self = $zero;
            }

            impl One for $num_ty {
                const ONE: Self = $one;
            }
        )*
    };
}

impl_nums! {
    u8 => (zero = 0, one = 1),
    u16 => (zero = 0, one = 1),
    u32 => (zero = 0, one = 1),
    u64 => (zero = 0, one = 1),
    u128 => (zero = 0, one = 1),
    usize => (zero = 0, one = 1),

    i8 => (zero = 0, one = 1),
    i16 => (zero = 0, one = 1),
    i32 => (zero = 0, one = 1),
    i64 => (zero = 0, one = 1),
    i128 => (zero = 0, one = 1),
    isize => (zero = 0, one = 1),

    f32 => (zero = 0.0, one = 1.0),
    f64 => (zero = 0.0, one = 1.0),
}

impl Real for f32 {}
impl Real for f64 {}

macro_rules! impl_cast {
    ( $( $from:ty ),* $(,)? ) => {
        $(
            impl_cast!(@from $from => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
        )*
    };

    ( @from $from:ty => $( $to:ty ),* ) => {
        $(
            impl Cast<$to> for $from {
                #[inline(always)]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

impl_cast! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}

macro_rules! impl_hash_bits_for_ints {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl HashBits for $ty {
                #[inline(always)]
                fn hash_bits(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_hash_bits_for_ints! {
    u8, u16, u32, u64, usize,
    i8, i16, i32, i64, isize,
}

impl HashBits for u128 {
    #[inline(always)]
    fn hash_bits(self) -> u64 {
        hash_combine(self as u64, (self >> 64) as u64)
    }
}

impl HashBits for i128 {
    #[inline(always)]
    fn hash_bits(self) -> u64 {
        (self as u128).hash_bits()
    }
}

impl HashBits for f32 {
    #[inline(always)]
    fn hash_bits(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() as u64 }
    }
}

impl HashBits for f64 {
    #[inline(always)]
    fn hash_bits(self) -> u64 {
        if self == 0.0 { 0 } else { self.to_bits() }
    }
}
