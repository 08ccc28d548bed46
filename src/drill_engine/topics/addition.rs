//! Addition-family generators: unit-block sums, the canned place-value
//! table, column addition with and without carries, and word problems.

use std::collections::HashSet;

use rand::Rng;

use crate::drill_engine::models::{
    AdditionQuestion, CarryMode, ColumnAdditionPuzzle, DigitTriple, NumberPuzzle, NumberQuestion,
};
use crate::drill_engine::sampler::{self, SampleError};

pub const DEFAULT_BLOCK_QUESTIONS: usize = 4;
pub const DEFAULT_COLUMN_QUESTIONS: usize = 5;
pub const DEFAULT_WORD_QUESTIONS: usize = 5;

// ---------------------------------------------------------------------------
// Block addition (find the number from repeated 100/10/1 terms)
// ---------------------------------------------------------------------------

/// Express a target in 100..=998 as repeated unit blocks: one "100" term per
/// hundreds digit, one "10" per tens digit, one "1" per ones digit. Zero
/// digits contribute no terms, and the hundreds digit is never zero, so the
/// text is never empty.
pub fn generate_block<R: Rng>(rng: &mut R, count: usize) -> NumberPuzzle {
    let questions = (0..count)
        .map(|_| {
            let answer = rng.gen_range(100..=998);
            let d = DigitTriple::of(answer);
            let mut parts: Vec<&str> = Vec::new();
            parts.extend(std::iter::repeat("100").take(d.hundreds as usize));
            parts.extend(std::iter::repeat("10").take(d.tens as usize));
            parts.extend(std::iter::repeat("1").take(d.ones as usize));
            NumberQuestion { text: parts.join(" + "), answer }
        })
        .collect();
    NumberPuzzle { questions }
}

// ---------------------------------------------------------------------------
// Place-value find (fixed table)
// ---------------------------------------------------------------------------

const PLACE_VALUE_TABLE: [(&str, u32); 4] = [
    ("3 yüzlük + 4 onluk + 0 birlik", 340),
    ("5 yüzlük + 0 onluk + 1 birlik", 501),
    ("8 yüzlük + 0 onluk + 0 birlik", 800),
    ("9 yüzlük + 5 onluk + 2 birlik", 952),
];

/// The canned decomposition table, shuffled once per drill.
pub fn generate_place_value<R: Rng>(rng: &mut R) -> NumberPuzzle {
    let mut questions: Vec<NumberQuestion> = PLACE_VALUE_TABLE
        .iter()
        .map(|&(text, answer)| NumberQuestion { text: text.to_string(), answer })
        .collect();
    sampler::shuffle(rng, &mut questions);
    NumberPuzzle { questions }
}

// ---------------------------------------------------------------------------
// Column addition
// ---------------------------------------------------------------------------

/// Digit pairs drawn so that no place can carry: the second digit of each
/// place is bounded by what the first leaves room for, and the hundreds
/// digits keep the sum below 1000.
fn draw_without_carry<R: Rng>(rng: &mut R) -> AdditionQuestion {
    let o1 = rng.gen_range(0..=9u32);
    let o2 = rng.gen_range(0..=9 - o1);
    let t1 = rng.gen_range(0..=9u32);
    let t2 = rng.gen_range(0..=9 - t1);
    let h1 = rng.gen_range(1..=8u32);
    let h2 = rng.gen_range(1..=9 - h1);
    AdditionQuestion { num1: h1 * 100 + t1 * 10 + o1, num2: h2 * 100 + t2 * 10 + o2 }
}

/// Free digit pairs; the caller keeps only draws where some place carries.
fn draw_free<R: Rng>(rng: &mut R) -> AdditionQuestion {
    let o1 = rng.gen_range(0..=9u32);
    let o2 = rng.gen_range(0..=9u32);
    let t1 = rng.gen_range(0..=9u32);
    let t2 = rng.gen_range(0..=9u32);
    let h1 = rng.gen_range(1..=9u32);
    let h2 = rng.gen_range(1..=9u32);
    AdditionQuestion { num1: h1 * 100 + t1 * 10 + o1, num2: h2 * 100 + t2 * 10 + o2 }
}

/// Generate a column-addition drill. `WithoutCarry` questions never carry at
/// any place; `WithCarry` questions carry at least once. Pairs are rejected
/// as duplicates order-independently within one drill.
pub fn generate_column<R: Rng>(
    rng: &mut R,
    carry: CarryMode,
    count: usize,
) -> Result<ColumnAdditionPuzzle, SampleError> {
    let mut questions: Vec<AdditionQuestion> = Vec::with_capacity(count);
    let mut used: HashSet<(u32, u32)> = HashSet::new();

    while questions.len() < count {
        let question = sampler::retry_until(rng, "drawing a fresh column-addition pair", |rng| {
            let candidate = match carry {
                CarryMode::WithoutCarry => draw_without_carry(rng),
                CarryMode::WithCarry => {
                    let q = draw_free(rng);
                    if !q.has_carry() {
                        return None;
                    }
                    q
                }
            };
            let key = pair_key(&candidate);
            (!used.contains(&key)).then_some(candidate)
        })?;
        used.insert(pair_key(&question));
        questions.push(question);
    }

    Ok(ColumnAdditionPuzzle { carry, questions })
}

fn pair_key(q: &AdditionQuestion) -> (u32, u32) {
    (q.num1.min(q.num2), q.num1.max(q.num2))
}

// ---------------------------------------------------------------------------
// Word problems
// ---------------------------------------------------------------------------

const NAMES: [&str; 6] = ["Ali", "Ayşe", "Efe", "Zeynep", "Can", "Elif"];
const OBJECTS_PLURAL: [&str; 6] = ["elması", "cevizi", "kalemi", "kitabı", "bilyesi", "balonu"];
const OBJECTS_SINGULAR: [&str; 6] = ["elma", "ceviz", "kalem", "kitap", "bilye", "balon"];

/// Generate addition word problems: a name, an object, two addends in
/// 5..=49, and one of three sentence templates. Questions whose sum repeats
/// an earlier question's sum are rejected, so no two answers coincide.
pub fn generate_word_problems<R: Rng>(
    rng: &mut R,
    count: usize,
) -> Result<NumberPuzzle, SampleError> {
    let mut questions: Vec<NumberQuestion> = Vec::with_capacity(count);
    let mut used_sums: HashSet<u32> = HashSet::new();

    while questions.len() < count {
        let question = sampler::retry_until(rng, "drawing a word problem with a fresh sum", |rng| {
            let num1 = rng.gen_range(5..=49u32);
            let num2 = rng.gen_range(5..=49u32);
            let answer = num1 + num2;
            if used_sums.contains(&answer) {
                return None;
            }

            let name = NAMES[rng.gen_range(0..NAMES.len())];
            let object = rng.gen_range(0..OBJECTS_PLURAL.len());
            let plural = OBJECTS_PLURAL[object];
            let singular = OBJECTS_SINGULAR[object];

            let text = match rng.gen_range(0..3) {
                0 => format!(
                    "{name}'nin {num1} tane {plural} vardı. Arkadaşı ona {num2} tane daha verdi. \
                     {name}'nin toplam kaç tane {plural} oldu?"
                ),
                1 => format!(
                    "Bir sepette {num1} {singular} vardı. Sepete {num2} {singular} daha eklendi. \
                     Sepette toplam kaç {singular} oldu?"
                ),
                _ => format!(
                    "{name}, pazardan {num1} tane {singular} aldı. Annesi de {num2} tane aldı. \
                     İkisinin toplam kaç {singular} oldu?"
                ),
            };
            Some(NumberQuestion { text, answer })
        })?;
        used_sums.insert(question.answer);
        questions.push(question);
    }

    Ok(NumberPuzzle { questions })
}
