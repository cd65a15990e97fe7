use crate::num::{div_rem, Magnitude};
use crate::int2dec::Int;
use crate::int2dec::digits::{DIGITS, DIGIT_PAIRS};

/// Counts the digits first, then emits two of them per division by 100.
pub fn convert<T: Int>(value: T, buf: &mut [u8]) {
    let (negative, mut n) = value.split_sign();

    let len = negative as usize + n.count_digits();
    if negative { buf[0] = b'-'; }
    buf[len] = 0;

    let mut i = len;
    while n >= T::Magnitude::HUNDRED {
        let (q, r) = div_rem(n, T::Magnitude::HUNDRED);
        i -= 2;
        buf[i..i+2].copy_from_slice(pair!(r.low()));
        n = q;
    }

    // 0..99 left: one digit if the count was odd, a last pair otherwise
    if n < T::Magnitude::TEN {
        buf[i-1] = digit!(n.low());
    } else {
        buf[i-2..i].copy_from_slice(pair!(n.low()));
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

#[cfg(test)] #[test]
fn odd_and_even_digit_counts() {
    let mut buf = [0xff; 11];
    for &(v, s) in &[(5u32, "5"), (10, "10"), (100, "100"), (9999, "9999"), (10000, "10000")] {
        convert(v, &mut buf);
        assert_eq!(crate::int2dec::dec_str(&buf), s);
    }
}
