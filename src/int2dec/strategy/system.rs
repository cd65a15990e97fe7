//! The standard library's `Display` formatting, used as the reference.

use std::io::Write;

use crate::int2dec::Int;

pub fn convert<T: Int>(value: T, buf: &mut [u8]) {
    let mut w = &mut buf[..];
    let written = write!(w, "{}", value).and_then(|_| w.write_all(&[0]));
    debug_assert!(written.is_ok(), "buffer of {} bytes too short for {}", buf.len(), value);
}

#[cfg(test)] use crate::int2dec::testing;

#[cfg(test)] #[test]
fn sanity_test() {
    testing::u32_sanity_test(convert::<u32>);
    testing::i32_sanity_test(convert::<i32>);
    testing::u64_sanity_test(convert::<u64>);
    testing::i64_sanity_test(convert::<i64>);
}

#[cfg(all(test, debug_assertions))] #[test] #[should_panic(expected = "too short")]
fn short_buffer_is_caught() {
    convert(1234567u32, &mut [0u8; 4]);
}
