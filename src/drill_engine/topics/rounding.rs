use rand::Rng;

use crate::drill_engine::models::{RoundingPuzzle, RoundingUnit};
use crate::drill_engine::sampler::{self, SampleError};

/// Required positive set: exactly this many numbers round to the target.
pub const MATCHING_NUMBERS: usize = 5;
/// Distractors that round elsewhere.
pub const OTHER_NUMBERS: usize = 15;

/// Generate a rounding puzzle: pick a unit and a target that is a multiple
/// of it, then mix 5 numbers that round to the target (never the target
/// itself) with 15 three-digit numbers that do not.
pub fn generate<R: Rng>(rng: &mut R) -> Result<RoundingPuzzle, SampleError> {
    let nearest = if rng.gen_bool(0.5) { RoundingUnit::Ten } else { RoundingUnit::Hundred };
    let target = match nearest {
        RoundingUnit::Ten => rng.gen_range(10..=89) * 10,
        RoundingUnit::Hundred => rng.gen_range(1..=8) * 100,
    };

    // Widest offset that still rounds to the target under half-up rounding.
    let near = match nearest {
        RoundingUnit::Ten => 4,
        RoundingUnit::Hundred => 49,
    };
    let matching = sampler::sample_unique(rng, MATCHING_NUMBERS, target - near..=target + near, |n| {
        n != target && nearest.round(n) == target
    })?;
    // Disjoint from `matching` by construction: these never round to the target.
    let others =
        sampler::sample_unique(rng, OTHER_NUMBERS, 100..=999, |n| nearest.round(n) != target)?;

    let mut numbers = matching;
    numbers.extend(others);
    sampler::shuffle(rng, &mut numbers);

    Ok(RoundingPuzzle { numbers, target, nearest })
}
