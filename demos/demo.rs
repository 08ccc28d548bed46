//! Full demo of all 11 drill topics.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `math_drill_gen` works end to end:
//!
//! 1. **All 11 topics** — one drill per topic with fixed seeds, so the output
//!    is deterministic and reproducible.
//!
//! 2. **Grading** — a sorting drill is graded twice, once with a perfect
//!    placement and once with two slots swapped.
//!
//! 3. **JSON** — a drill is serialized with `serde_json`, showing the wire
//!    shape a front end would consume.
//!
//! ## Key concepts demonstrated
//!
//! - `DrillRequest::new(topic)` — minimal one-argument constructor. Defaults:
//!   entropy seed, per-topic question count.
//! - `rng_seed: Some(u64)` makes the output fully deterministic.
//! - `grade()` is pure: the same (puzzle, submission) pair always yields the
//!   same verdict, and the puzzle is never mutated.

use math_drill_gen::drill_engine::models::{Puzzle, RomanPrompt};
use math_drill_gen::{
    generate_drill, grade, CarryMode, ColoringMode, ColoringRule, DigitPlace, Drill, DrillRequest,
    DrillTopic, OddEvenKind, RomanActivity, Submission,
};

/// Generate and pretty-print one drill.
fn print_drill(topic: DrillTopic, seed: u64) -> Drill {
    let drill = generate_drill(DrillRequest {
        topic,
        rng_seed: Some(seed),
        question_count: None,
    })
    .unwrap();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  ID: {}", drill.topic, drill.drill_id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match &drill.puzzle {
        Puzzle::Coloring(p) => {
            match &p.rule {
                ColoringRule::Single { place, blue, red } => {
                    println!("  Rule: {place} place — blue {blue}, red {red}");
                }
                ColoringRule::Mixed { blue, red } => {
                    println!(
                        "  Rule: blue {} {}, red {} {}",
                        blue.place, blue.digit, red.place, red.digit
                    );
                }
            }
            let grid: Vec<String> = p.numbers.iter().map(|n| n.to_string()).collect();
            println!("  Grid: {}", grid.join(" "));
        }
        Puzzle::Rounding(p) => {
            println!("  Find every number that rounds to {} (nearest {})", p.target, p.nearest);
            let grid: Vec<String> = p.numbers.iter().map(|n| n.to_string()).collect();
            println!("  Grid: {}", grid.join(" "));
        }
        Puzzle::Sorting(p) => {
            println!("  Sort {:?} in {} order", p.numbers, p.order);
            println!("  Reference: {:?}", p.sorted_reference());
        }
        Puzzle::Rhythmic(p) => {
            println!("  Count by {} starting at {}", p.step, p.start);
            println!("  Sequence: {:?}", p.sequence());
        }
        Puzzle::BlockAddition(p) | Puzzle::PlaceValueFind(p) | Puzzle::WordProblems(p) => {
            for q in &p.questions {
                println!("  Q: {}", q.text);
                println!("     = {}", q.answer);
            }
        }
        Puzzle::OddEven(p) => {
            for q in &p.questions {
                println!("  {} -> {}", q, q.answer());
            }
        }
        Puzzle::Roman(p) => {
            for q in &p.questions {
                let prompt = match &q.prompt {
                    RomanPrompt::Single(s) => s.clone(),
                    RomanPrompt::Sum { lhs, rhs } => format!("{lhs} + {rhs}"),
                };
                println!("  Q: {}  options {:?}  (answer {})", prompt, q.options, q.answer);
            }
        }
        Puzzle::Decomposition(p) => {
            for q in &p.questions {
                let a = q.answer();
                println!(
                    "  {} = {} hundreds, {} tens, {} ones",
                    q.number, a.hundreds, a.tens, a.ones
                );
            }
        }
        Puzzle::ColumnAddition(p) => {
            for q in &p.questions {
                println!("  {} = {}  (carry: {})", q, q.answer(), q.has_carry());
            }
        }
    }
    println!();
    drill
}

fn main() {
    env_logger::init();

    // ── Minimal API ────────────────────────────────────────────────────────
    // DrillRequest::new() only requires a topic — seed and count default.
    println!();
    println!("══ Minimal API: DrillRequest::new() ══");
    println!();
    let d = generate_drill(DrillRequest::new(DrillTopic::Rounding)).unwrap();
    println!("  {}  ID: {}", d.topic, d.drill_id);
    println!();

    // ── One drill per topic, fixed seeds ───────────────────────────────────
    println!("══ All topics, deterministic seeds ══");
    println!();
    print_drill(DrillTopic::PlaceValueColoring(ColoringMode::Single(DigitPlace::Tens)), 11);
    print_drill(DrillTopic::PlaceValueColoring(ColoringMode::Mixed), 12);
    print_drill(DrillTopic::Rounding, 13);
    let sorting = print_drill(DrillTopic::Sorting, 14);
    print_drill(DrillTopic::RhythmicCounting, 15);
    print_drill(DrillTopic::BlockAddition, 16);
    print_drill(DrillTopic::PlaceValueFind, 17);
    print_drill(DrillTopic::OddEven(OddEvenKind::Single), 18);
    print_drill(DrillTopic::OddEven(OddEvenKind::Sum), 19);
    print_drill(DrillTopic::Roman(RomanActivity::RomanToNumber), 20);
    print_drill(DrillTopic::Roman(RomanActivity::NumberToRoman), 21);
    print_drill(DrillTopic::Roman(RomanActivity::Addition), 22);
    print_drill(DrillTopic::Decomposition, 23);
    print_drill(DrillTopic::ColumnAddition(CarryMode::WithoutCarry), 24);
    print_drill(DrillTopic::ColumnAddition(CarryMode::WithCarry), 25);
    let word = print_drill(DrillTopic::WordProblems, 26);

    // ── Grading ────────────────────────────────────────────────────────────
    println!("══ Grading the sorting drill ══");
    println!();
    if let Puzzle::Sorting(puzzle) = &sorting.puzzle {
        let perfect: Vec<Option<u32>> =
            puzzle.sorted_reference().into_iter().map(Some).collect();
        let verdict = grade(&sorting.puzzle, &Submission::Sorting(perfect.clone())).unwrap();
        println!("  Perfect placement: {:?}", verdict.score());

        let mut swapped = perfect;
        swapped.swap(0, 1);
        let verdict = grade(&sorting.puzzle, &Submission::Sorting(swapped)).unwrap();
        println!("  Two slots swapped: {:?}", verdict.score());
    }
    println!();

    // ── JSON wire shape ────────────────────────────────────────────────────
    println!("══ Drill as JSON ══");
    println!();
    println!("{}", serde_json::to_string_pretty(&word).unwrap());
}
