//! Topic generators, one module per game family.
//!
//! Every generator draws from a caller-supplied `R: Rng` and returns a typed
//! puzzle value; fallible ones (anything with a rejection loop) return
//! `Result<_, SampleError>`. The engine dispatches to these via
//! `generator.rs`, which wraps the result in the tagged [`Puzzle`] union.
//!
//! [`Puzzle`]: crate::drill_engine::models::Puzzle

pub mod addition;
pub mod coloring;
pub mod decomposition;
pub mod odd_even;
pub mod rhythmic;
pub mod roman_quiz;
pub mod rounding;
pub mod sorting;
