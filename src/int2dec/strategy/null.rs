//! Writes nothing but the terminator; measures the harness itself.

use crate::int2dec::Int;

pub fn convert<T: Int>(_value: T, buf: &mut [u8]) {
    buf[0] = 0;
}

#[cfg(test)] #[test]
fn writes_only_terminator() {
    let mut buf = [b'x'; 11];
    convert(12345u32, &mut buf);
    assert_eq!(buf[0], 0);
    assert_eq!(crate::int2dec::dec_str(&buf), "");
}
