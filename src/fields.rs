// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named-field views over vector and matrix storage.
//!
//! Each type here is a `#[repr(C)]` struct with one field per element, laid out exactly like
//! the array it is a view of. Vectors and square matrices dereference into these types so that
//! elements can be addressed by name (`v.x`, `m.a`, `m.e12`) without owning separate storage.

use crate::utils::num::Zero;

macro_rules! decl_fields {
    (
        $(
            $( #[ $meta:meta ] )*
            $ty_name:ident <{ $dim:expr }> {
                $( $field:ident ),+
                $(,)?
            }
        )*
    ) => {
        $(
            $( #[ $meta ] )*
            #[repr(C)]
            #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
            pub struct $ty_name <T> {
                $( pub $field : T ),+
            }

            impl<T> $ty_name<T> {
                pub const LEN: usize = $dim;

                #[allow(clippy::too_many_arguments)]
                #[must_use]
                #[inline]
                pub const fn new( $( $field : T ),+ ) -> Self {
                    Self {
                        $($field),+
                    }
                }
            }

            impl<T: Copy> $ty_name<T> {
                #[must_use]
                #[inline]
                pub const fn splat(value: T) -> Self {
                    Self {
                        $( $field: value ),+
                    }
                }
            }

            impl<T: Zero> Zero for $ty_name<T> {
                const ZERO: Self = Self {
                    $( $field : Zero::ZERO ),+
                };
            }

            impl<T> From<$ty_name<T>> for [T; $dim] {
                #[inline]
                fn from($ty_name { $( $field ),+}: $ty_name<T>) -> Self {
                    [ $($field),+ ]
                }
            }

            impl<T> From<[T; $dim]> for $ty_name<T> {
                #[inline]
                fn from([ $( $field ),+ ]: [T ; $dim]) -> Self {
                    Self {
                        $($field),+
                    }
                }
            }

            #[cfg(feature = "bytemuck")]
            unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $ty_name<T> {
                #[inline]
                fn zeroed() -> Self {
                    Self {
                        $( $field: bytemuck::Zeroable::zeroed() ),+
                    }
                }
            }

            #[cfg(feature = "bytemuck")]
            unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $ty_name<T> {}
        )*
    };
}

decl_fields! {
    X <{ 1 }> { x }
    Xy <{ 2 }> { x, y }
    Xyz <{ 3 }> { x, y, z }
    Xyzw <{ 4 }> { x, y, z, w }

    /// Row-major alphabetic names for the elements of a 2x2 matrix.
    Alphabetic2 <{ 4 }> {
        a, b,
        c, d,
    }

    /// Row-major alphabetic names for the elements of a 3x3 matrix.
    Alphabetic3 <{ 9 }> {
        a, b, c,
        d, e, f,
        g, h, i,
    }

    /// Row-major alphabetic names for the elements of a 4x4 matrix.
    Alphabetic4 <{ 16 }> {
        a, b, c, d,
        e, f, g, h,
        i, j, k, l,
        m, n, o, p,
    }

    /// Positional names (`e<row><col>`) for the elements of a 2x2 matrix.
    Positional2 <{ 4 }> {
        e00, e01,
        e10, e11,
    }

    /// Positional names (`e<row><col>`) for the elements of a 3x3 matrix.
    Positional3 <{ 9 }> {
        e00, e01, e02,
        e10, e11, e12,
        e20, e21, e22,
    }

    /// Positional names (`e<row><col>`) for the elements of a 4x4 matrix.
    Positional4 <{ 16 }> {
        e00, e01, e02, e03,
        e10, e11, e12, e13,
        e20, e21, e22, e23,
        e30, e31, e32, e33,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        let fields = Alphabetic3::from([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!((fields.a, fields.e, fields.i), (1, 5, 9));

        let fields = Positional4::from(core::array::from_fn::<_, 16, _>(|i| i));
        assert_eq!(fields.e00, 0);
        assert_eq!(fields.e12, 6);
        assert_eq!(fields.e33, 15);

        let back: [usize; 16] = fields.into();
        assert_eq!(back[13], 13);
    }

    #[test]
    fn test_splat_and_zero() {
        assert_eq!(Alphabetic2::splat(3), Alphabetic2::new(3, 3, 3, 3));
        assert_eq!(Positional2::<f32>::ZERO, Positional2::splat(0.0));
        assert_eq!(Alphabetic4::<u8>::LEN, 16);
    }
}
