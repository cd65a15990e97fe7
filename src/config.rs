use clap::{Parser, ValueEnum};

use crate::bench::ITERATIONS_PER_DIGIT;

/// The integer types the harnesses know about.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntType {
    U32,
    I32,
    U64,
    I64,
}

/// Which harnesses to run.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Verify,
    Bench,
    All,
}

impl Mode {
    pub fn verifies(self) -> bool { matches!(self, Mode::Verify | Mode::All) }
    pub fn benches(self) -> bool { matches!(self, Mode::Bench | Mode::All) }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "itoa-bench")]
#[command(about = "Verifies and benchmarks integer-to-decimal conversion strategies", long_about = None)]
pub struct Config {
    #[arg(long, value_enum, default_value = "all", env = "ITOA_BENCH_MODE")]
    pub mode: Mode,

    #[arg(short, long, default_value_t = ITERATIONS_PER_DIGIT, env = "ITOA_BENCH_ITERATIONS",
          value_parser = clap::value_parser!(u32).range(1..),
          help = "Conversions timed per digit-length bucket")]
    pub iterations: u32,

    #[arg(short, long, value_enum, value_delimiter = ',', default_values = ["u32", "i32", "u64", "i64"],
          env = "ITOA_BENCH_TYPES", help = "Integer types to run, comma separated")]
    pub types: Vec<IntType>,

    #[arg(long, default_value = "warn", env = "ITOA_BENCH_LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
