//! Core drill engine — puzzle generation, grading, and numeral conversion.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: puzzles, requests, submissions, verdicts |
//! | `roman`     | Roman numeral conversion (domain 1..=399) |
//! | `sampler`   | Constrained unique sampling, retry loops, Fisher-Yates shuffle |
//! | `generator` | Single entry point `generate_drill()` — dispatches to topics |
//! | `grading`   | Total grading functions and the `grade()` dispatcher |
//! | `topics`    | One generator module per game family |

pub mod generator;
pub mod grading;
pub mod models;
pub mod roman;
pub mod sampler;
pub mod topics;

// Re-export the public API surface so callers can use
// `drill_engine::generate_drill` without reaching into sub-modules.
pub use generator::generate_drill;
pub use grading::{grade, GradeError};
pub use models::{
    CarryMode, CellColor, ColoringMode, ColoringRule, DigitPlace, DigitTriple, Drill,
    DrillRequest, DrillTopic, ItemStatus, OddEvenKind, Parity, Puzzle, RomanActivity,
    RoundingUnit, SortOrder, Submission, Verdict,
};
pub use sampler::SampleError;
