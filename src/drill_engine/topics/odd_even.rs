use rand::Rng;

use crate::drill_engine::models::{OddEvenKind, OddEvenPuzzle, OddEvenQuestion};

pub const DEFAULT_QUESTIONS: usize = 15;

/// Generate a parity quiz. `Single` asks about one number in 1..=999; `Sum`
/// asks about the parity of the sum of two addends in 1..=499. Repeats are
/// allowed across questions; only the answer sequence matters.
pub fn generate<R: Rng>(rng: &mut R, kind: OddEvenKind, count: usize) -> OddEvenPuzzle {
    let questions = (0..count)
        .map(|_| match kind {
            OddEvenKind::Single => OddEvenQuestion::Single { number: rng.gen_range(1..=999) },
            OddEvenKind::Sum => OddEvenQuestion::Sum {
                addends: [rng.gen_range(1..=499), rng.gen_range(1..=499)],
            },
        })
        .collect();
    OddEvenPuzzle { kind, questions }
}
