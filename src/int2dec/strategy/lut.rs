use crate::num::{div_rem, Magnitude};
use crate::int2dec::{Int, NDIGITS64};
use crate::int2dec::digits::DIGITS;

/// Same as `naive`, except each character comes from a ten-entry table.
pub fn convert<T: Int>(value: T, buf: &mut [u8]) {
    let (negative, mut n) = value.split_sign();

    let mut digits = [0u8; NDIGITS64];
    let mut ndigits = 0;
    loop {
        let (q, r) = div_rem(n, T::Magnitude::TEN);
        digits[ndigits] = digit!(r.low());
        ndigits += 1;
        n = q;
        if n == T::Magnitude::ZERO { break; }
    }

    let mut i = 0;
    if negative {
        buf[i] = b'-';
        i += 1;
    }
    for &d in digits[..ndigits].iter().rev() {
        buf[i] = d;
        i += 1;
    }
    buf[i] = 0;
}

#[cfg(test)] use crate::int2dec::testing;

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(convert::<u32>);
    testing::i32_sanity_test(convert::<i32>);
    testing::u64_sanity_test(convert::<u64>);
    testing::i64_sanity_test(convert::<i64>);
}
