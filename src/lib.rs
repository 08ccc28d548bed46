//! # math_drill_gen
//!
//! A fully offline, deterministic generator and grader for arithmetic
//! mini-games aimed at young learners.
//!
//! The engine covers eleven drill topics: place-value coloring (single and
//! mixed rules), rounding, sorting, rhythmic (skip) counting, unit-block
//! addition, a canned place-value table, odd/even classification, three
//! Roman-numeral activities, number decomposition, column addition with and
//! without carries, and addition word problems.
//!
//! ## How it works
//!
//! 1. Create a [`DrillRequest`] with a topic, an optional RNG seed, and an
//!    optional question count.
//! 2. Call [`generate_drill`] — the engine samples a constraint-satisfying
//!    problem instance (distinct grid numbers, carry/no-carry digit pairs,
//!    near-miss multiple-choice options, …) and returns an immutable
//!    [`Drill`] whose answer key is fully recoverable from the puzzle.
//! 3. Collect the player's input into a [`Submission`] and call [`grade`] —
//!    a pure function yielding a per-item [`Verdict`] plus an aggregate
//!    score. The puzzle is never mutated; "new game" just generates again.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same drill — useful for tests and progress tracking.
//! - **Pure core**: no network, files, clocks, or shared state. All UI
//!   concerns (layout, drag and drop, feedback timers) live in the caller.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{generate_drill, grade, DrillRequest, DrillTopic, Puzzle, Submission};
//!
//! // Minimal — defaults: entropy seed, per-topic question count:
//! let drill = generate_drill(DrillRequest::new(DrillTopic::Rounding)).unwrap();
//! println!("{}: {}", drill.topic, drill.drill_id);
//!
//! // Deterministic, then grade a perfect sorting round:
//! let drill = generate_drill(DrillRequest {
//!     topic: DrillTopic::Sorting,
//!     rng_seed: Some(42),
//!     question_count: None,
//! })
//! .unwrap();
//!
//! if let Puzzle::Sorting(puzzle) = &drill.puzzle {
//!     let placement = puzzle.sorted_reference().into_iter().map(Some).collect();
//!     let verdict = grade(&drill.puzzle, &Submission::Sorting(placement)).unwrap();
//!     assert_eq!(verdict.score(), (5, 5));
//! }
//! ```

pub mod drill_engine;

// Convenience re-exports so callers can use `math_drill_gen::generate_drill`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate_drill, grade, CarryMode, CellColor, ColoringMode, ColoringRule, DigitPlace,
    DigitTriple, Drill, DrillRequest, DrillTopic, GradeError, ItemStatus, OddEvenKind, Parity,
    Puzzle, RomanActivity, RoundingUnit, SampleError, SortOrder, Submission, Verdict,
};

#[cfg(test)]
mod tests;
