// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, Zero};
use core::ops::Add;

pub mod assertions {
    /// Fails to compile when `SMALLER + 1 != LARGER`.
    ///
    /// Stable const generics cannot name `N - 1` in a return type, so operations producing
    /// a one-smaller matrix take the target dimension as a parameter and check it here.
    #[macro_export]
    macro_rules! const_assert_one_smaller {
        ($larger:expr, $smaller:expr) => {
            #[allow(path_statements)]
            <$crate::utils::assertions::AssertOneSmaller<{ $larger }, { $smaller }>>::ASSERT;
        };
    }

    #[non_exhaustive]
    pub struct AssertOneSmaller<const LARGER: usize, const SMALLER: usize>;

    impl<const LARGER: usize, const SMALLER: usize> AssertOneSmaller<LARGER, SMALLER> {
        pub const ASSERT: () = assert!(
            SMALLER + 1 == LARGER,
            "dimension must be exactly one smaller than the source dimension"
        );
    }
}

pub mod arrays;
pub mod num;

/// Analogous to the [`Iterator::sum()`] method, but which uses [`Zero`] and [`ClosedAdd`] instead of
/// the [`Sum`] trait.
///
/// [`Sum`]: core::iter::Sum
#[must_use]
#[inline(always)]
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + ClosedAdd,
{
    iter.into_iter().fold(Zero::ZERO, Add::add)
}

/// Mixes `value` into `seed`, in the manner of `boost::hash_combine` widened to 64 bits.
///
/// The result depends on the order in which values are combined.
#[must_use]
#[inline(always)]
pub const fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

pub use self::arrays::*;
