use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::drill_engine::models::{Drill, DrillRequest, DrillTopic, Puzzle};
use crate::drill_engine::sampler::SampleError;
use crate::drill_engine::topics;

fn topic_prefix(topic: DrillTopic) -> &'static str {
    match topic {
        DrillTopic::PlaceValueColoring(_) => "PC",
        DrillTopic::Rounding => "RD",
        DrillTopic::Sorting => "SO",
        DrillTopic::RhythmicCounting => "RC",
        DrillTopic::BlockAddition => "BA",
        DrillTopic::PlaceValueFind => "PV",
        DrillTopic::OddEven(_) => "OE",
        DrillTopic::Roman(_) => "RN",
        DrillTopic::Decomposition => "DC",
        DrillTopic::ColumnAddition(_) => "CA",
        DrillTopic::WordProblems => "WP",
    }
}

/// Generate a unique drill ID from topic prefix + RNG state.
fn make_drill_id(topic: DrillTopic, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", topic_prefix(topic), rng.next_u32())
}

/// Core dispatch: seeds the RNG and routes to the topic generator.
///
/// `rng_seed: Some(_)` reproduces the exact same drill; `None` draws from
/// entropy. `question_count` overrides the topic default where one applies
/// (coloring grid size, quiz lengths); topics with fixed shapes ignore it.
pub fn generate_drill(request: DrillRequest) -> Result<Drill, SampleError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let drill_id = make_drill_id(request.topic, &mut rng);
    let count = request.question_count;

    let puzzle = match request.topic {
        DrillTopic::PlaceValueColoring(mode) => Puzzle::Coloring(topics::coloring::generate(
            &mut rng,
            mode,
            count.unwrap_or(topics::coloring::DEFAULT_NUMBERS),
        )?),

        DrillTopic::Rounding => Puzzle::Rounding(topics::rounding::generate(&mut rng)?),

        DrillTopic::Sorting => Puzzle::Sorting(topics::sorting::generate(&mut rng)?),

        DrillTopic::RhythmicCounting => Puzzle::Rhythmic(topics::rhythmic::generate(&mut rng)),

        DrillTopic::BlockAddition => Puzzle::BlockAddition(topics::addition::generate_block(
            &mut rng,
            count.unwrap_or(topics::addition::DEFAULT_BLOCK_QUESTIONS),
        )),

        DrillTopic::PlaceValueFind => {
            Puzzle::PlaceValueFind(topics::addition::generate_place_value(&mut rng))
        }

        DrillTopic::OddEven(kind) => Puzzle::OddEven(topics::odd_even::generate(
            &mut rng,
            kind,
            count.unwrap_or(topics::odd_even::DEFAULT_QUESTIONS),
        )),

        DrillTopic::Roman(activity) => Puzzle::Roman(topics::roman_quiz::generate(
            &mut rng,
            activity,
            count.unwrap_or(topics::roman_quiz::DEFAULT_QUESTIONS),
        )?),

        DrillTopic::Decomposition => Puzzle::Decomposition(topics::decomposition::generate(
            &mut rng,
            count.unwrap_or(topics::decomposition::DEFAULT_QUESTIONS),
        )?),

        DrillTopic::ColumnAddition(carry) => Puzzle::ColumnAddition(topics::addition::generate_column(
            &mut rng,
            carry,
            count.unwrap_or(topics::addition::DEFAULT_COLUMN_QUESTIONS),
        )?),

        DrillTopic::WordProblems => Puzzle::WordProblems(topics::addition::generate_word_problems(
            &mut rng,
            count.unwrap_or(topics::addition::DEFAULT_WORD_QUESTIONS),
        )?),
    };

    debug!("generated {} drill {}", request.topic, drill_id);
    Ok(Drill { drill_id, topic: request.topic, puzzle })
}
