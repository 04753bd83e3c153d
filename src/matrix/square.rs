// SPDX-License-Identifier: MIT OR Apache-2.0

//! The 2x2, 3x3 and 4x4 matrices, and the named-element views over them.
//!
//! Each square matrix dereferences into its alphabetic view, so `m.a` reads element `(0, 0)`
//! and `m.e = 1.0` writes element `(1, 1)` of a 3x3 matrix. The positional view, with fields
//! named `e<row><col>`, is reached through [`Matrix::positional()`]. Both views alias the
//! matrix storage: a write through either one is visible through `Index`, [`Matrix::at()`]
//! and the other view.

use super::Matrix;
use crate::fields::{Alphabetic2, Alphabetic3, Alphabetic4, Positional2, Positional3, Positional4};
use core::mem;

pub type Matrix2<T = f32> = Matrix<T, 2, 2>;
pub type Matrix3<T = f32> = Matrix<T, 3, 3>;
pub type Matrix4<T = f32> = Matrix<T, 4, 4>;

pub type Mat2 = Matrix2<f32>;
pub type Mat2d = Matrix2<f64>;
pub type Mat2i = Matrix2<i32>;

pub type Mat3 = Matrix3<f32>;
pub type Mat3d = Matrix3<f64>;
pub type Mat3i = Matrix3<i32>;

pub type Mat4 = Matrix4<f32>;
pub type Mat4d = Matrix4<f64>;
pub type Mat4i = Matrix4<i32>;

macro_rules! impl_square_views {
    ( $( $dim:literal => $alphabetic:ident, $positional:ident ),* $(,)? ) => {
        $(
            const _: () = {
                assert!(mem::size_of::<Matrix<u8, $dim, $dim>>() == mem::size_of::<$alphabetic<u8>>());
                assert!(mem::size_of::<Matrix<f64, $dim, $dim>>() == mem::size_of::<$alphabetic<f64>>());
                assert!(mem::align_of::<Matrix<f64, $dim, $dim>>() == mem::align_of::<$alphabetic<f64>>());
                assert!(mem::size_of::<Matrix<u8, $dim, $dim>>() == mem::size_of::<$positional<u8>>());
                assert!(mem::size_of::<Matrix<f64, $dim, $dim>>() == mem::size_of::<$positional<f64>>());
                assert!(mem::align_of::<Matrix<f64, $dim, $dim>>() == mem::align_of::<$positional<f64>>());
            };

            impl<T> Matrix<T, $dim, $dim> {
                /// Views the elements under their row-major alphabetic names.
                #[must_use]
                #[inline(always)]
                pub const fn alphabetic(&self) -> &$alphabetic<T> {
                    unsafe { &*(self as *const Self).cast::<$alphabetic<T>>() }
                }

                #[must_use]
                #[inline(always)]
                pub const fn alphabetic_mut(&mut self) -> &mut $alphabetic<T> {
                    unsafe { &mut *(self as *mut Self).cast::<$alphabetic<T>>() }
                }

                /// Views the elements under their `e<row><col>` names.
                #[must_use]
                #[inline(always)]
                pub const fn positional(&self) -> &$positional<T> {
                    unsafe { &*(self as *const Self).cast::<$positional<T>>() }
                }

                #[must_use]
                #[inline(always)]
                pub const fn positional_mut(&mut self) -> &mut $positional<T> {
                    unsafe { &mut *(self as *mut Self).cast::<$positional<T>>() }
                }
            }

            impl<T> core::ops::Deref for Matrix<T, $dim, $dim> {
                type Target = $alphabetic<T>;

                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    self.alphabetic()
                }
            }

            impl<T> core::ops::DerefMut for Matrix<T, $dim, $dim> {
                #[inline(always)]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    self.alphabetic_mut()
                }
            }

            impl<T: Copy> From<Matrix<T, $dim, $dim>> for $alphabetic<T> {
                #[inline]
                fn from(value: Matrix<T, $dim, $dim>) -> Self {
                    *value.alphabetic()
                }
            }

            impl<T: Copy> From<$alphabetic<T>> for Matrix<T, $dim, $dim> {
                #[inline]
                fn from(value: $alphabetic<T>) -> Self {
                    let elems: [T; $dim * $dim] = value.into();
                    Self::from_fn(|row, col| elems[row * $dim + col])
                }
            }

            impl<T: Copy> From<Matrix<T, $dim, $dim>> for $positional<T> {
                #[inline]
                fn from(value: Matrix<T, $dim, $dim>) -> Self {
                    *value.positional()
                }
            }

            impl<T: Copy> From<$positional<T>> for Matrix<T, $dim, $dim> {
                #[inline]
                fn from(value: $positional<T>) -> Self {
                    let elems: [T; $dim * $dim] = value.into();
                    Self::from_fn(|row, col| elems[row * $dim + col])
                }
            }
        )*
    };
}

impl_square_views! {
    2 => Alphabetic2, Positional2,
    3 => Alphabetic3, Positional3,
    4 => Alphabetic4, Positional4,
}
