use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{dec_str, Int, MAX_BUFFER_SIZE};

/// Runs `f` on a buffer filled with garbage and returns the text it wrote.
pub fn run<T: Int, F: FnMut(T, &mut [u8])>(mut f: F, v: T) -> String {
    let mut buf = [0xa5u8; MAX_BUFFER_SIZE];
    f(v, &mut buf[..T::BUFFER_SIZE]);
    assert!(buf[..T::BUFFER_SIZE].contains(&0), "{} {}: no terminator", T::NAME, v);
    dec_str(&buf).to_owned()
}

pub fn u64_sanity_test<F: FnMut(u64, &mut [u8])>(mut f: F) {
    assert_eq!(run(&mut f,                    0), "0");
    assert_eq!(run(&mut f,                    1), "1");
    assert_eq!(run(&mut f,                   12), "12");
    assert_eq!(run(&mut f,                  123), "123");
    assert_eq!(run(&mut f,              1234567), "1234567");
    assert_eq!(run(&mut f,      123456789012345), "123456789012345");
    assert_eq!(run(&mut f,           4294967296), "4294967296");
    assert_eq!(run(&mut f, 18446744073709551615), "18446744073709551615");
}

pub fn i64_sanity_test<F: FnMut(i64, &mut [u8])>(mut f: F) {
    assert_eq!(run(&mut f,                    0), "0");
    assert_eq!(run(&mut f,                   -1), "-1");
    assert_eq!(run(&mut f,                  -10), "-10");
    assert_eq!(run(&mut f,     -123456789012345), "-123456789012345");
    assert_eq!(run(&mut f,  9223372036854775807), "9223372036854775807");
    assert_eq!(run(&mut f, -9223372036854775808), "-9223372036854775808");
}

pub fn u32_sanity_test<F: FnMut(u32, &mut [u8])>(mut f: F) {
    assert_eq!(run(&mut f,          0), "0");
    assert_eq!(run(&mut f,          7), "7");
    assert_eq!(run(&mut f,         99), "99");
    assert_eq!(run(&mut f,        100), "100");
    assert_eq!(run(&mut f,    1234567), "1234567");
    assert_eq!(run(&mut f, 4294967295), "4294967295");
}

pub fn i32_sanity_test<F: FnMut(i32, &mut [u8])>(mut f: F) {
    assert_eq!(run(&mut f,           0), "0");
    assert_eq!(run(&mut f,          -1), "-1");
    assert_eq!(run(&mut f,          99), "99");
    assert_eq!(run(&mut f,        -100), "-100");
    assert_eq!(run(&mut f,  2147483647), "2147483647");
    assert_eq!(run(&mut f, -2147483648), "-2147483648");
}

/// Checks `f` against `to_string` and a parse round trip on random values
/// of every magnitude.
pub fn random_test<T, F>(mut f: F, seed: u64)
    where T: Int, F: FnMut(T, &mut [u8]), rand::distr::StandardUniform: rand::distr::Distribution<T>
{
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..10_000 {
        let v: T = rng.random();
        // shift right by a random amount so short numbers show up as often as long ones
        let shift = rng.random_range(0..64u32);
        let wide: i128 = v.into();
        let v = T::try_from(wide >> shift).ok().unwrap_or(v);

        let s = run(&mut f, v);
        assert_eq!(s, v.to_string());
        assert_eq!(s.parse::<T>().ok(), Some(v));
    }
}
