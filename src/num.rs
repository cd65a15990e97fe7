use std::ops::{Div, Rem};

use crate::int2dec::digits::{count_digits32, count_digits64};

pub fn div_rem<T: Copy + Div<Output = T> + Rem<Output = T>>(x: T, y: T) -> (T, T) {
    (x / y, x % y)
}

/// The unsigned working type digits are generated from.
///
/// Signed values are reduced to their magnitude in the unsigned type of the
/// same width before any digit is produced, so every strategy only ever
/// divides unsigned numbers.
pub trait Magnitude: Copy + Eq + Ord + Div<Output = Self> + Rem<Output = Self> {
    const ZERO: Self;
    const TEN: Self;
    const HUNDRED: Self;

    /// Truncates to `usize`. Only meaningful for values below 100.
    fn low(self) -> usize;

    /// The number of decimal digits, 1 for zero.
    fn count_digits(self) -> usize;
}

macro_rules! impl_magnitude {
    ($t:ty, $count:ident) => (
        impl Magnitude for $t {
            const ZERO: $t = 0;
            const TEN: $t = 10;
            const HUNDRED: $t = 100;

            #[inline(always)]
            fn low(self) -> usize { self as usize }

            #[inline(always)]
            fn count_digits(self) -> usize { $count(self) }
        }
    )
}

impl_magnitude!(u32, count_digits32);
impl_magnitude!(u64, count_digits64);
