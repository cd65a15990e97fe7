pub const NDIGITS64: usize = 20; // 1844 6744 0737 0955 1615
pub const NDIGITS32: usize = 10; // 42 9496 7295

pub type Digit = u8;

pub static DIGITS: &'static [Digit; 10] = b"0123456789";

/// `DIGIT_PAIRS[n]` is `n` in two zero-padded ASCII digits, for `n < 100`.
pub static DIGIT_PAIRS: [[Digit; 2]; 100] = make_digit_pairs();

const fn make_digit_pairs() -> [[Digit; 2]; 100] {
    let mut pairs = [[0; 2]; 100];
    let mut i = 0;
    while i < 100 {
        pairs[i] = [b'0' + (i / 10) as u8, b'0' + (i % 10) as u8];
        i += 1;
    }
    pairs
}

macro_rules! digit { ($i:expr) => (DIGITS[$i as usize]) }
macro_rules! pair { ($i:expr) => (&DIGIT_PAIRS[$i as usize]) }

// most formatted values are small, so the cascades test the smallest
// thresholds first.

pub fn count_digits32(n: u32) -> usize {
    if n < 10 { return 1; }
    if n < 100 { return 2; }
    if n < 1_000 { return 3; }
    if n < 10_000 { return 4; }
    if n < 100_000 { return 5; }
    if n < 1_000_000 { return 6; }
    if n < 10_000_000 { return 7; }
    if n < 100_000_000 { return 8; }
    if n < 1_000_000_000 { return 9; }
    10
}

pub fn count_digits64(n: u64) -> usize {
    if n <= u32::MAX as u64 { return count_digits32(n as u32); }
    // 4294967296 has 10 digits already
    if n < 10_000_000_000 { return 10; }
    if n < 100_000_000_000 { return 11; }
    if n < 1_000_000_000_000 { return 12; }
    if n < 10_000_000_000_000 { return 13; }
    if n < 100_000_000_000_000 { return 14; }
    if n < 1_000_000_000_000_000 { return 15; }
    if n < 10_000_000_000_000_000 { return 16; }
    if n < 100_000_000_000_000_000 { return 17; }
    if n < 1_000_000_000_000_000_000 { return 18; }
    if n < 10_000_000_000_000_000_000 { return 19; }
    20
}
