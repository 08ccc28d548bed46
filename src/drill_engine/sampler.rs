//! Constrained random sampling shared by every topic generator.
//!
//! All generation in this crate is reject-and-resample: draw, test, keep or
//! retry. The documented ranges are generous relative to the requested
//! counts, so the loops terminate quickly in practice. A hard iteration cap
//! still backs every loop; tripping it means a caller shrank a range or
//! inflated a count, and surfaces as a [`SampleError`].

use log::warn;
use rand::Rng;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Safety cap for every reject-and-resample loop.
pub const MAX_DRAWS: usize = 10_000;

/// The sampler gave up. Never expected under the documented ranges; this is
/// a configuration bug, not a runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sampler gave up after {MAX_DRAWS} draws while {context}")]
pub struct SampleError {
    pub context: &'static str,
}

/// Draw `count` distinct integers from `range`, each satisfying `predicate`.
/// Values keep their draw order.
pub fn sample_unique<R: Rng>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<u32>,
    predicate: impl Fn(u32) -> bool,
) -> Result<Vec<u32>, SampleError> {
    let mut values = Vec::with_capacity(count);
    let mut draws = 0usize;
    while values.len() < count {
        if draws >= MAX_DRAWS {
            warn!(
                "unique sampling exhausted its draw budget ({} of {} values, range {:?})",
                values.len(),
                count,
                range
            );
            return Err(SampleError { context: "collecting distinct integers" });
        }
        draws += 1;
        let n = rng.gen_range(range.clone());
        if predicate(n) && !values.contains(&n) {
            values.push(n);
        }
    }
    Ok(values)
}

/// Run `draw` until it yields a value, under the shared draw cap. For
/// composite rejection loops (digit pairs, deduplicated sums) that
/// `sample_unique` cannot express.
pub fn retry_until<R: Rng, T>(
    rng: &mut R,
    context: &'static str,
    mut draw: impl FnMut(&mut R) -> Option<T>,
) -> Result<T, SampleError> {
    for _ in 0..MAX_DRAWS {
        if let Some(value) = draw(rng) {
            return Ok(value);
        }
    }
    warn!("retry loop exhausted its draw budget while {context}");
    Err(SampleError { context })
}

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<R: Rng, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
