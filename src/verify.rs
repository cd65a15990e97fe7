//! Cross-checks conversion strategies against the reference on boundary values.

use std::collections::BTreeSet;
use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::IntType;
use crate::error::VerifyError;
use crate::int2dec::{self, Int, Strategy, MAX_BUFFER_SIZE};

/// The values where digit-count mistakes concentrate, in ascending order.
///
/// That is 0, `MIN` and `MAX`, every `2^k - 1, 2^k` and `10^k - 1, 10^k`
/// that fits the type, and for signed types the negation of all of these.
pub fn boundary_values<T: Int>() -> Vec<T> {
    let min: i128 = T::MIN.into();
    let max: i128 = T::MAX.into();

    let mut set = BTreeSet::new();
    set.insert(0);
    set.insert(min);
    set.insert(max);
    for base in [2i128, 10] {
        let mut p = 1;
        while p <= max {
            set.insert(p - 1);
            set.insert(p);
            p *= base;
        }
    }
    if T::SIGNED {
        let negated: Vec<i128> = set.iter().map(|&v| -v).filter(|v| (min..=max).contains(v)).collect();
        set.extend(negated);
    }

    set.into_iter().filter_map(|v| T::try_from(v).ok()).collect()
}

/// Runs both strategies over `values`, stopping at the first disagreement.
///
/// Outputs are compared byte for byte up to and including the terminator.
/// Returns the number of values checked.
pub fn verify_pair<T: Int>(candidate: &Strategy<T>, reference: &Strategy<T>,
                           values: &[T]) -> Result<usize, VerifyError> {
    let mut buf1 = [0u8; MAX_BUFFER_SIZE];
    let mut buf2 = [0u8; MAX_BUFFER_SIZE];
    let buf1 = &mut buf1[..T::BUFFER_SIZE];
    let buf2 = &mut buf2[..T::BUFFER_SIZE];

    for &v in values {
        // no strategy may lean on what the previous value left behind
        buf1.fill(0xa5);
        buf2.fill(0xa5);
        (candidate.convert)(v, buf1);
        (reference.convert)(v, buf2);

        if terminated(buf1) != terminated(buf2) {
            warn!(ty = T::NAME, value = %v, candidate = candidate.name, "verification mismatch");
            return Err(VerifyError::Mismatch {
                ty: T::NAME,
                value: v.to_string(),
                candidate: candidate.full_name(),
                candidate_output: String::from_utf8_lossy(strip(terminated(buf1))).into_owned(),
                reference: reference.full_name(),
                reference_output: String::from_utf8_lossy(strip(terminated(buf2))).into_owned(),
            });
        }
    }

    debug!(candidate = %candidate.full_name(), checked = values.len(), "pair verified");
    Ok(values.len())
}

// the written bytes including the terminator, or the whole buffer if there is none
fn terminated(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&c| c == 0) {
        Some(i) => &buf[..i+1],
        None => buf,
    }
}

fn strip(s: &[u8]) -> &[u8] {
    match s.split_last() {
        Some((&0, rest)) => rest,
        _ => s,
    }
}

/// The outcome of verifying one candidate against the reference.
#[derive(Debug)]
pub struct PairOutcome {
    pub candidate: String,
    pub reference: String,
    pub result: Result<usize, VerifyError>,
}

impl PairOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Verifies each candidate against `reference` over `values`, writing one
/// line per pair to `out`.
///
/// A mismatch only ends its own pair; the remaining pairs still run.
pub fn verify_candidates<T: Int, W: Write>(out: &mut W, reference: &Strategy<T>,
                                           candidates: &[Strategy<T>],
                                           values: &[T]) -> io::Result<Vec<PairOutcome>> {
    let mut outcomes = Vec::new();
    for candidate in candidates {
        let outcome = PairOutcome {
            candidate: candidate.full_name(),
            reference: reference.full_name(),
            result: verify_pair(candidate, reference, values),
        };
        match outcome.result {
            Ok(_) => writeln!(out, "Verifying {} = {} ... OK", outcome.candidate, outcome.reference)?,
            Err(ref e) => writeln!(out, "Verifying {} = {} ... Error: {}",
                                   outcome.candidate, outcome.reference, e)?,
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Verifies every text-producing strategy of `T` against the reference
/// on the boundary values.
pub fn verify_type<T: Int, W: Write>(out: &mut W) -> io::Result<Vec<PairOutcome>> {
    let outcomes = verify_candidates(out, &int2dec::oracle::<T>(), &int2dec::candidates::<T>(),
                                     &boundary_values::<T>())?;

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    info!(ty = T::NAME, pairs = outcomes.len(), failed, "verification finished");
    Ok(outcomes)
}

/// Verifies every selected type in turn.
pub fn verify_all<W: Write>(out: &mut W, types: &[IntType]) -> io::Result<Vec<PairOutcome>> {
    let mut outcomes = Vec::new();
    for ty in types {
        let batch = match ty {
            IntType::U32 => verify_type::<u32, _>(out)?,
            IntType::I32 => verify_type::<i32, _>(out)?,
            IntType::U64 => verify_type::<u64, _>(out)?,
            IntType::I64 => verify_type::<i64, _>(out)?,
        };
        outcomes.extend(batch);
    }
    writeln!(out)?;
    Ok(outcomes)
}
