//! Wall-clock timing of conversion strategies over digit-length buckets.

use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::IntType;
use crate::int2dec::{self, Int, Strategy, MAX_BUFFER_SIZE};

/// Conversions timed per bucket unless configured otherwise.
pub const ITERATIONS_PER_DIGIT: u32 = 1_000_000;

/// Inclusive `(start, end)` ranges of all positive values with 1, 2, ...
/// digits. The last bucket ends at `MAX` instead of the next power of ten.
pub fn digit_buckets<T: Int>() -> Vec<(T, T)> {
    let max: i128 = T::MAX.into();
    let mut start: i128 = 1;
    (1..=T::MAX_DIGITS).map_while(|ndigits| {
        let end = if ndigits == T::MAX_DIGITS { max } else { start * 10 - 1 };
        let bucket = (T::try_from(start).ok()?, T::try_from(end).ok()?);
        start = end + 1;
        Some(bucket)
    }).collect()
}

/// The value after `v`, wrapping back to `start` once `end` is reached.
#[inline(always)]
pub fn next_in_bucket<T: Int>(v: T, start: T, end: T) -> T {
    if v == end { start } else { v.successor() }
}

/// Elapsed time per bucket for one strategy.
#[derive(Clone, Debug)]
pub struct BenchReport {
    pub name: String,
    pub buckets: Vec<Duration>,
    pub min: Duration,
    pub max: Duration,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Benchmarking {:<20} ... [{:8.3}ms, {:8.3}ms]",
               self.name, millis(self.min), millis(self.max))
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

/// Runs `iterations` conversions per bucket, cycling through the bucket's
/// values, and records the time each bucket took.
pub fn bench_strategy<T: Int>(strategy: &Strategy<T>, iterations: u32) -> BenchReport {
    let mut buf = [0u8; MAX_BUFFER_SIZE];
    let buf = &mut buf[..T::BUFFER_SIZE];

    let mut buckets = Vec::new();
    for (ndigits, (start, end)) in digit_buckets::<T>().into_iter().enumerate() {
        let mut v = start;
        let timer = Instant::now();
        for _ in 0..iterations {
            (strategy.convert)(black_box(v), black_box(&mut *buf));
            v = next_in_bucket(v, start, end);
        }
        let elapsed = timer.elapsed();
        debug!(strategy = strategy.name, ty = T::NAME, digits = ndigits + 1, ?elapsed, "bucket timed");
        buckets.push(elapsed);
    }

    let min = buckets.iter().copied().min().unwrap_or_default();
    let max = buckets.iter().copied().max().unwrap_or_default();
    BenchReport { name: strategy.full_name(), buckets, min, max }
}

/// Times every strategy of `T`, writing a heading and one line per strategy.
pub fn bench_type<T: Int, W: Write>(out: &mut W, iterations: u32) -> io::Result<Vec<BenchReport>> {
    writeln!(out, "{}toa", T::NAME)?;
    let mut reports = Vec::new();
    for strategy in int2dec::bench_strategies::<T>() {
        let report = bench_strategy(&strategy, iterations);
        info!(strategy = %report.name, min = ?report.min, max = ?report.max, "benchmark finished");
        writeln!(out, "{}", report)?;
        reports.push(report);
    }
    writeln!(out)?;
    Ok(reports)
}

/// Times every selected type in turn.
pub fn bench_all<W: Write>(out: &mut W, types: &[IntType], iterations: u32) -> io::Result<Vec<BenchReport>> {
    let mut reports = Vec::new();
    for ty in types {
        let batch = match ty {
            IntType::U32 => bench_type::<u32, _>(out, iterations)?,
            IntType::I32 => bench_type::<i32, _>(out, iterations)?,
            IntType::U64 => bench_type::<u64, _>(out, iterations)?,
            IntType::I64 => bench_type::<i64, _>(out, iterations)?,
        };
        reports.extend(batch);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_cover_each_digit_count() {
        let b = digit_buckets::<u32>();
        assert_eq!(b.len(), 10);
        assert_eq!(b[0], (1, 9));
        assert_eq!(b[1], (10, 99));
        assert_eq!(b[8], (100_000_000, 999_999_999));
        assert_eq!(b[9], (1_000_000_000, u32::MAX));
    }

    #[test]
    fn last_bucket_ends_at_max() {
        assert_eq!(digit_buckets::<i32>().last(), Some(&(1_000_000_000, i32::MAX)));
        assert_eq!(digit_buckets::<u64>().last(), Some(&(10_000_000_000_000_000_000, u64::MAX)));
        let b = digit_buckets::<i64>();
        assert_eq!(b.len(), 19);
        assert_eq!(b.last(), Some(&(1_000_000_000_000_000_000, i64::MAX)));
    }

    #[test]
    fn buckets_are_contiguous() {
        let b = digit_buckets::<u64>();
        for w in b.windows(2) {
            assert_eq!(w[0].1 + 1, w[1].0);
        }
    }

    #[test]
    fn report_min_not_above_max() {
        for strategy in int2dec::bench_strategies::<i64>() {
            let report = bench_strategy(&strategy, 200);
            assert_eq!(report.buckets.len(), 19);
            assert!(report.min <= report.max);
            assert!(report.buckets.iter().all(|&d| report.min <= d && d <= report.max));
            assert!(millis(report.max).is_finite());
        }
    }

    #[test]
    fn next_in_bucket_wraps_at_end() {
        assert_eq!(next_in_bucket(5u32, 1, 9), 6);
        assert_eq!(next_in_bucket(9u32, 1, 9), 1);
        assert_eq!(next_in_bucket(99i32, 10, 99), 10);
        assert_eq!(next_in_bucket(u32::MAX, 1_000_000_000, u32::MAX), 1_000_000_000);
        assert_eq!(next_in_bucket(i64::MAX, 1_000_000_000_000_000_000, i64::MAX),
                   1_000_000_000_000_000_000);
    }

    #[test]
    fn cycled_values_stay_in_bucket() {
        for (start, end) in digit_buckets::<u32>() {
            let mut v = start;
            for _ in 0..25 {
                assert!(start <= v && v <= end, "{} outside [{}, {}]", v, start, end);
                v = next_in_bucket(v, start, end);
            }
        }
    }

    #[test]
    fn wraps_within_bucket() {
        // more iterations than the 1-digit bucket has values
        let report = bench_strategy(&int2dec::candidates::<u32>()[3], 25);
        assert_eq!(report.buckets.len(), 10);
        assert_eq!(report.name, "u32_countlut");
    }

    #[test]
    fn bench_all_writes_headings() {
        let mut out = Vec::new();
        let reports = bench_all(&mut out, &[IntType::U32, IntType::I64], 10).unwrap();
        assert_eq!(reports.len(), 12);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("u32toa\nBenchmarking u32_null "));
        assert!(text.contains("\ni64toa\n"));
        assert!(text.contains("Benchmarking i64_countlut"));
    }
}
