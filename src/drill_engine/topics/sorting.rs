use rand::Rng;

use crate::drill_engine::models::{SortOrder, SortingPuzzle};
use crate::drill_engine::sampler::{self, SampleError};

pub const NUMBERS: usize = 5;

/// Generate a sorting puzzle: 5 distinct 3-digit numbers and a direction.
/// Distinctness guarantees a unique correct placement.
pub fn generate<R: Rng>(rng: &mut R) -> Result<SortingPuzzle, SampleError> {
    let numbers = sampler::sample_unique(rng, NUMBERS, 100..=999, |_| true)?;
    let order = if rng.gen_bool(0.5) { SortOrder::Ascending } else { SortOrder::Descending };
    Ok(SortingPuzzle { numbers, order })
}
