use std::fmt;
use std::str::{self, FromStr};

use crate::num::Magnitude;

pub use self::digits::{Digit, NDIGITS64, NDIGITS32};

#[macro_use] pub(crate) mod digits;
#[cfg(test)] mod testing;

pub mod strategy {
    pub mod null;
    pub mod system;
    pub mod naive;
    pub mod lut;
    pub mod count;
    pub mod countlut;
}

/// The largest buffer any supported type needs (`i64`).
pub const MAX_BUFFER_SIZE: usize = 22;

/// A fixed-width integer type that can be formatted in decimal.
pub trait Int: Copy + Ord + fmt::Debug + fmt::Display + FromStr + Into<i128> + TryFrom<i128> {
    type Magnitude: Magnitude;

    /// Short type name used in reports, e.g. `u32`.
    const NAME: &'static str;
    /// Digits of the largest magnitude, plus an optional sign, plus the terminator.
    const BUFFER_SIZE: usize;
    /// The number of digits in `MAX`, which for `i64` is one short of its magnitude type.
    const MAX_DIGITS: usize;
    const MIN: Self;
    const MAX: Self;
    const SIGNED: bool;

    /// Returns whether the value is negative, and its magnitude.
    ///
    /// The magnitude of the signed minimum is computed in the unsigned type,
    /// so this never overflows.
    fn split_sign(self) -> (bool, Self::Magnitude);

    /// The next value, wrapping at `MAX`.
    fn successor(self) -> Self;
}

macro_rules! impl_unsigned {
    ($t:ty, $name:expr, $bufsize:expr, $maxdigits:expr) => (
        impl Int for $t {
            type Magnitude = $t;

            const NAME: &'static str = $name;
            const BUFFER_SIZE: usize = $bufsize;
            const MAX_DIGITS: usize = $maxdigits;
            const MIN: $t = <$t>::MIN;
            const MAX: $t = <$t>::MAX;
            const SIGNED: bool = false;

            #[inline(always)]
            fn split_sign(self) -> (bool, $t) { (false, self) }

            #[inline(always)]
            fn successor(self) -> $t { self.wrapping_add(1) }
        }
    )
}

macro_rules! impl_signed {
    ($t:ty, $u:ty, $name:expr, $bufsize:expr, $maxdigits:expr) => (
        impl Int for $t {
            type Magnitude = $u;

            const NAME: &'static str = $name;
            const BUFFER_SIZE: usize = $bufsize;
            const MAX_DIGITS: usize = $maxdigits;
            const MIN: $t = <$t>::MIN;
            const MAX: $t = <$t>::MAX;
            const SIGNED: bool = true;

            #[inline(always)]
            fn split_sign(self) -> (bool, $u) {
                if self < 0 {
                    (true, (self as $u).wrapping_neg())
                } else {
                    (false, self as $u)
                }
            }

            #[inline(always)]
            fn successor(self) -> $t { self.wrapping_add(1) }
        }
    )
}

impl_unsigned!(u32, "u32", 11, 10);
impl_signed!(i32, u32, "i32", 12, 10);
impl_unsigned!(u64, "u64", 21, 20);
impl_signed!(i64, u64, "i64", 22, 19);

/// A conversion routine: writes `value` and a NUL terminator into the buffer,
/// which must hold at least `T::BUFFER_SIZE` bytes.
pub type Convert<T> = fn(T, &mut [u8]);

/// A named conversion routine.
pub struct Strategy<T> {
    pub name: &'static str,
    pub convert: Convert<T>,
}

impl<T> Clone for Strategy<T> {
    fn clone(&self) -> Strategy<T> { *self }
}

impl<T> Copy for Strategy<T> {}

impl<T: Int> Strategy<T> {
    /// `u32_naive` and so on.
    pub fn full_name(&self) -> String {
        format!("{}_{}", T::NAME, self.name)
    }
}

impl<T> fmt::Debug for Strategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

/// The reference conversion every candidate is checked against.
pub fn oracle<T: Int>() -> Strategy<T> {
    Strategy { name: "system", convert: strategy::system::convert::<T> }
}

/// Strategies that produce decimal text, baseline first.
pub fn candidates<T: Int>() -> [Strategy<T>; 4] {
    [
        Strategy { name: "naive", convert: strategy::naive::convert::<T> },
        Strategy { name: "lut", convert: strategy::lut::convert::<T> },
        Strategy { name: "count", convert: strategy::count::convert::<T> },
        Strategy { name: "countlut", convert: strategy::countlut::convert::<T> },
    ]
}

/// Everything worth timing: the empty baseline, the oracle, then the candidates.
pub fn bench_strategies<T: Int>() -> Vec<Strategy<T>> {
    let mut v = vec![
        Strategy { name: "null", convert: strategy::null::convert::<T> },
        oracle::<T>(),
    ];
    v.extend_from_slice(&candidates::<T>());
    v
}

/// Returns the text before the NUL terminator.
///
/// Every strategy writes plain ASCII; a buffer that somehow holds anything
/// else yields an empty string.
pub fn dec_str(buf: &[u8]) -> &str {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    str::from_utf8(&buf[..len]).unwrap_or("")
}

/// Formats an integer through the fastest strategy.
///
/// ```
/// use itoabench::int2dec::IntToDec;
/// assert_eq!(IntToDec(-2147483648i32).to_string(), "-2147483648");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct IntToDec<T>(pub T);

impl<T: Int> fmt::Display for IntToDec<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; MAX_BUFFER_SIZE];
        strategy::countlut::convert(self.0, &mut buf);
        f.pad_integral(!self.0.split_sign().0, "", dec_str(&buf).trim_start_matches('-'))
    }
}
