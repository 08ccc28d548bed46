use rand::Rng;

use crate::drill_engine::models::{DecompositionPuzzle, DecompositionQuestion};
use crate::drill_engine::sampler::{self, SampleError};

pub const DEFAULT_QUESTIONS: usize = 5;

/// Generate a decomposition drill: distinct 3-digit numbers to be split into
/// hundreds, tens and ones. The answer key is the digit triple of each.
pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Result<DecompositionPuzzle, SampleError> {
    let numbers = sampler::sample_unique(rng, count, 100..=999, |_| true)?;
    let questions = numbers.into_iter().map(|number| DecompositionQuestion { number }).collect();
    Ok(DecompositionPuzzle { questions })
}
