use rand::Rng;

use crate::drill_engine::models::RhythmicPuzzle;

/// Generate a skip-counting puzzle on the fixed 1..=81 grid: a step in 2..=9
/// and a start in 1..=step, so the first grid row always contains the start.
pub fn generate<R: Rng>(rng: &mut R) -> RhythmicPuzzle {
    let step = rng.gen_range(2..=9);
    let start = rng.gen_range(1..=step);
    RhythmicPuzzle { start, step }
}
