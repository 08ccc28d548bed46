use rand::Rng;

use crate::drill_engine::models::{
    ColoringMode, ColoringPuzzle, ColoringRule, DigitPlace, PlaceTarget,
};
use crate::drill_engine::sampler::{self, SampleError};

/// Grid size when the request does not override it.
pub const DEFAULT_NUMBERS: usize = 20;

/// Generate a place-value coloring puzzle: a grid of distinct 3-digit
/// numbers plus a blue/red coloring rule.
///
/// `Single` mode targets two distinct digits at one place. `Mixed` mode picks
/// two distinct places and two distinct digits; the blue rule takes priority
/// when a number matches both.
pub fn generate<R: Rng>(
    rng: &mut R,
    mode: ColoringMode,
    count: usize,
) -> Result<ColoringPuzzle, SampleError> {
    let numbers = sampler::sample_unique(rng, count, 100..=999, |_| true)?;

    // Two distinct digits come from the head of a shuffled 0..=9 list.
    let mut digits: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    sampler::shuffle(rng, &mut digits);

    let rule = match mode {
        ColoringMode::Single(place) => ColoringRule::Single {
            place,
            blue: digits[0],
            red: digits[1],
        },
        ColoringMode::Mixed => {
            let mut places = [DigitPlace::Hundreds, DigitPlace::Tens, DigitPlace::Ones];
            sampler::shuffle(rng, &mut places);
            ColoringRule::Mixed {
                blue: PlaceTarget { place: places[0], digit: digits[0] },
                red: PlaceTarget { place: places[1], digit: digits[1] },
            }
        }
    };

    Ok(ColoringPuzzle { numbers, rule })
}
