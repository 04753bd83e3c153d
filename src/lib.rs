// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-size, row-major matrices for transform, camera and projection math.
//!
//! Every dimension is a compile-time constant and every operation is allocation-free and
//! `#[inline]`, so the crate builds unchanged for a hosted target and for a GPU/accelerator
//! target without `std`.
//!
//! ```
//! use fixmat::{matrix::Matrix2, vector::Vector};
//!
//! let m = Matrix2::new([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//!
//! assert_eq!(m.determinant(), -2.0);
//! assert_eq!(m.a * m.d - m.b * m.c, -2.0);
//! assert_eq!(m * Vector::new([1.0, 0.0]), Vector::new([1.0, 3.0]));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

/// Implements `Deref`/`DerefMut` from a vector-like type into one of the named-field views in
/// [`fields`], after checking at compile time that both have the same layout.
macro_rules! impl_coerce_to_fields {
    (
        $( $type:ident<{ $generic:ident, $const:expr }>  => $fields_type:ident ),+ $(,)?
    ) => {
        $(
            impl<$generic> core::ops::Deref for $type<$generic, $const> {
                type Target = crate::fields:: $fields_type<$generic>;
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const _: () = assert!(
                        core::mem::size_of::<$type<u8, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<u8>>()
                    );

                    const _: () = assert!(
                        core::mem::size_of::<$type<f32, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f64, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f64>>()
                    );

                    unsafe { &*(self as *const _ as *const crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> core::ops::DerefMut for $type<$generic, $const> {
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut _ as *mut crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> From<$type<$generic, $const>> for crate::fields:: $fields_type<$generic> {
                #[inline]
                fn from(value: $type<$generic, $const>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }

            impl<$generic> From<crate::fields:: $fields_type<$generic>> for $type<$generic, $const> {
                #[inline]
                fn from(value: crate::fields:: $fields_type<$generic>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }
        )+
    };
}

pub mod fields;
pub mod matrix;
pub mod utils;
pub mod vector;
