use rand::Rng;

use crate::drill_engine::models::{RomanActivity, RomanPrompt, RomanPuzzle, RomanQuestion};
use crate::drill_engine::roman::to_roman;
use crate::drill_engine::sampler::{self, SampleError};

pub const DEFAULT_QUESTIONS: usize = 10;

/// Base values drawn per question. Sums in the addition activity reach at
/// most 150, comfortably inside the numeral domain.
const BASE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

fn roman(n: u32) -> String {
    to_roman(n).expect("quiz values stay within the Roman numeral domain")
}

/// A wrong answer close to `target`: target plus an offset in -5..=4,
/// clamped to stay positive.
fn near_miss<R: Rng>(rng: &mut R, target: u32) -> u32 {
    let offset = rng.gen_range(-5i32..=4);
    (target as i32 + offset).max(1) as u32
}

/// The answer value plus two distinct near-miss values, shuffled.
fn option_values<R: Rng>(rng: &mut R, answer: u32) -> Result<Vec<u32>, SampleError> {
    let mut values = vec![answer];
    while values.len() < 3 {
        let wrong = sampler::retry_until(rng, "drawing a near-miss option", |rng| {
            let w = near_miss(rng, answer);
            (w != answer && !values.contains(&w)).then_some(w)
        })?;
        values.push(wrong);
    }
    sampler::shuffle(rng, &mut values);
    Ok(values)
}

/// Render `n` as Arabic or Roman with equal probability.
fn mixed_render<R: Rng>(rng: &mut R, n: u32) -> String {
    if rng.gen_bool(0.5) { n.to_string() } else { roman(n) }
}

/// Generate one Roman numeral activity.
///
/// Activities 1 and 2 convert between a numeral and its value; activity 3
/// adds two operands shown in independently random representations. Every
/// question has exactly 3 options with exactly one value-equal to the
/// answer, so distractor values are deduplicated against the answer rather
/// than against any particular rendering of it.
pub fn generate<R: Rng>(
    rng: &mut R,
    activity: RomanActivity,
    count: usize,
) -> Result<RomanPuzzle, SampleError> {
    let base_numbers = sampler::sample_unique(rng, count, BASE_RANGE, |_| true)?;

    let mut questions = Vec::with_capacity(count);
    for &num in &base_numbers {
        let question = match activity {
            RomanActivity::RomanToNumber => RomanQuestion {
                prompt: RomanPrompt::Single(roman(num)),
                options: option_values(rng, num)?.into_iter().map(|v| v.to_string()).collect(),
                answer: num,
            },
            RomanActivity::NumberToRoman => RomanQuestion {
                prompt: RomanPrompt::Single(num.to_string()),
                options: option_values(rng, num)?.into_iter().map(roman).collect(),
                answer: num,
            },
            RomanActivity::Addition => {
                let num2 = rng.gen_range(1..=50);
                let sum = num + num2;
                let prompt = RomanPrompt::Sum {
                    lhs: mixed_render(rng, num),
                    rhs: mixed_render(rng, num2),
                };
                let options = option_values(rng, sum)?
                    .into_iter()
                    .map(|v| mixed_render(rng, v))
                    .collect();
                RomanQuestion { prompt, options, answer: sum }
            }
        };
        questions.push(question);
    }

    Ok(RomanPuzzle { activity, questions })
}
