use crate::num::{div_rem, Magnitude};
use crate::int2dec::Int;

/// Counts the digits first, so they can be written back to front in place.
pub fn convert<T: Int>(value: T, buf: &mut [u8]) {
    let (negative, mut n) = value.split_sign();

    let len = negative as usize + n.count_digits();
    if negative { buf[0] = b'-'; }
    buf[len] = 0;

    let mut i = len;
    loop {
        let (q, r) = div_rem(n, T::Magnitude::TEN);
        i -= 1;
        buf[i] = r.low() as u8 + b'0';
        n = q;
        if n == T::Magnitude::ZERO { break; }
    }
}

#[cfg(test)] use crate::int2dec::testing;

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(convert::<u32>);
    testing::i32_sanity_test(convert::<i32>);
    testing::u64_sanity_test(convert::<u64>);
    testing::i64_sanity_test(convert::<i64>);
}
