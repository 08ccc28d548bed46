//! Pure grading functions: (puzzle, submission) -> verdict.
//!
//! The typed per-game graders are total — every well-formed pair yields a
//! verdict, with unanswered items grading `Incorrect` and subset games also
//! producing `Missed` for required-but-unselected items. The only failure
//! path is the top-level [`grade`] dispatcher rejecting a submission whose
//! variant does not fit the puzzle.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::drill_engine::models::{
    CellColor, ColoringPuzzle, ColumnAdditionPuzzle, ColumnVerdict, DecompositionPuzzle,
    DecompositionVerdict, DigitTriple, GridVerdict, ItemStatus, NumberPuzzle, OddEvenPuzzle,
    Parity, Puzzle, QuizVerdict, RhythmicPuzzle, RomanPuzzle, RoundingPuzzle, SortingPuzzle,
    SortingVerdict, Submission, Verdict,
};
use crate::drill_engine::roman::from_roman;

/// The submission variant does not fit the puzzle variant. The UI layer owns
/// pairing them up; hitting this is a caller bug, not a player mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission shape {submitted} does not match puzzle {expected}")]
pub struct GradeError {
    pub expected: &'static str,
    pub submitted: &'static str,
}

/// Grade any puzzle against a submission of the matching shape.
pub fn grade(puzzle: &Puzzle, submission: &Submission) -> Result<Verdict, GradeError> {
    match (puzzle, submission) {
        (Puzzle::Coloring(p), Submission::Coloring(s)) => Ok(Verdict::Grid(grade_coloring(p, s))),
        (Puzzle::Rounding(p), Submission::Selection(s)) => Ok(Verdict::Grid(grade_rounding(p, s))),
        (Puzzle::Rhythmic(p), Submission::Selection(s)) => Ok(Verdict::Grid(grade_rhythmic(p, s))),
        (Puzzle::Sorting(p), Submission::Sorting(s)) => Ok(Verdict::Sorting(grade_sorting(p, s))),
        (Puzzle::OddEven(p), Submission::Parity(s)) => Ok(Verdict::Quiz(grade_odd_even(p, s))),
        (Puzzle::Roman(p), Submission::Choices(s)) => Ok(Verdict::Quiz(grade_roman(p, s))),
        (
            Puzzle::BlockAddition(p) | Puzzle::PlaceValueFind(p) | Puzzle::WordProblems(p),
            Submission::Numbers(s),
        ) => Ok(Verdict::Quiz(grade_numbers(p, s))),
        (Puzzle::ColumnAddition(p), Submission::Numbers(s)) => {
            Ok(Verdict::Quiz(grade_column_addition(p, s)))
        }
        (Puzzle::Decomposition(p), Submission::Decomposition(s)) => {
            Ok(Verdict::Decomposition(grade_decomposition(p, s)))
        }
        (p, s) => Err(GradeError { expected: p.kind(), submitted: s.kind() }),
    }
}

// ---------------------------------------------------------------------------
// Subset-selection games
// ---------------------------------------------------------------------------

/// Shared classifier for "select the matching subset" games: every candidate
/// is correct / incorrect / missed, or absent when neither required nor
/// selected. The aggregate counts correct over required.
fn grade_subset(
    candidates: impl IntoIterator<Item = u32>,
    is_required: impl Fn(u32) -> bool,
    selected: &BTreeSet<u32>,
) -> GridVerdict {
    let mut cells = BTreeMap::new();
    let mut correct = 0;
    let mut required = 0;
    for n in candidates {
        let want = is_required(n);
        let got = selected.contains(&n);
        if want {
            required += 1;
        }
        match (want, got) {
            (true, true) => {
                cells.insert(n, ItemStatus::Correct);
                correct += 1;
            }
            (false, true) => {
                cells.insert(n, ItemStatus::Incorrect);
            }
            (true, false) => {
                cells.insert(n, ItemStatus::Missed);
            }
            (false, false) => {}
        }
    }
    GridVerdict { cells, correct, required }
}

/// Coloring is the subset game with a twist: the selection carries a color,
/// and a required number painted the wrong color grades `Incorrect`.
pub fn grade_coloring(puzzle: &ColoringPuzzle, painted: &BTreeMap<u32, CellColor>) -> GridVerdict {
    let mut cells = BTreeMap::new();
    let mut correct = 0;
    let mut required = 0;
    for &n in &puzzle.numbers {
        let expected = puzzle.correct_color(n);
        if expected.is_some() {
            required += 1;
        }
        match (expected, painted.get(&n).copied()) {
            (Some(want), Some(got)) if want == got => {
                cells.insert(n, ItemStatus::Correct);
                correct += 1;
            }
            (_, Some(_)) => {
                cells.insert(n, ItemStatus::Incorrect);
            }
            (Some(_), None) => {
                cells.insert(n, ItemStatus::Missed);
            }
            (None, None) => {}
        }
    }
    GridVerdict { cells, correct, required }
}

pub fn grade_rounding(puzzle: &RoundingPuzzle, selected: &[u32]) -> GridVerdict {
    let selected: BTreeSet<u32> = selected.iter().copied().collect();
    grade_subset(puzzle.numbers.iter().copied(), |n| puzzle.rounds_to_target(n), &selected)
}

/// The rhythmic grid grades every cell in 1..=81, not just selected ones.
pub fn grade_rhythmic(puzzle: &RhythmicPuzzle, selected: &[u32]) -> GridVerdict {
    let selected: BTreeSet<u32> = selected.iter().copied().collect();
    grade_subset(1..=RhythmicPuzzle::GRID_MAX, |n| puzzle.contains(n), &selected)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Slot-by-slot comparison against the unique sorted reference. Empty slots
/// grade `Incorrect`.
pub fn grade_sorting(puzzle: &SortingPuzzle, slots: &[Option<u32>]) -> SortingVerdict {
    let reference = puzzle.sorted_reference();
    let statuses: Vec<ItemStatus> = reference
        .iter()
        .enumerate()
        .map(|(i, &want)| {
            if slots.get(i).copied().flatten() == Some(want) {
                ItemStatus::Correct
            } else {
                ItemStatus::Incorrect
            }
        })
        .collect();
    let correct = statuses.iter().filter(|&&s| s == ItemStatus::Correct).count();
    SortingVerdict { slots: statuses, correct }
}

// ---------------------------------------------------------------------------
// Quiz games
// ---------------------------------------------------------------------------

fn quiz_verdict(statuses: Vec<ItemStatus>) -> QuizVerdict {
    let correct = statuses.iter().filter(|&&s| s == ItemStatus::Correct).count();
    QuizVerdict { questions: statuses, correct }
}

pub fn grade_odd_even(puzzle: &OddEvenPuzzle, answers: &[Option<Parity>]) -> QuizVerdict {
    let statuses = puzzle
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            if answers.get(i).copied().flatten() == Some(q.answer()) {
                ItemStatus::Correct
            } else {
                ItemStatus::Incorrect
            }
        })
        .collect();
    quiz_verdict(statuses)
}

/// Numeric value of a displayed option: decimal first, Roman otherwise.
fn option_value(option: &str) -> u32 {
    option.trim().parse().unwrap_or_else(|_| from_roman(option.trim()))
}

/// Roman grading is value-based: "14" and "XIV" are the same answer.
pub fn grade_roman(puzzle: &RomanPuzzle, choices: &[Option<String>]) -> QuizVerdict {
    let statuses = puzzle
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let chosen = choices.get(i).and_then(|c| c.as_deref());
            match chosen {
                Some(option) if option_value(option) == q.answer => ItemStatus::Correct,
                _ => ItemStatus::Incorrect,
            }
        })
        .collect();
    quiz_verdict(statuses)
}

pub fn grade_numbers(puzzle: &NumberPuzzle, answers: &[Option<u32>]) -> QuizVerdict {
    let statuses = puzzle
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            if answers.get(i).copied().flatten() == Some(q.answer) {
                ItemStatus::Correct
            } else {
                ItemStatus::Incorrect
            }
        })
        .collect();
    quiz_verdict(statuses)
}

pub fn grade_column_addition(puzzle: &ColumnAdditionPuzzle, answers: &[Option<u32>]) -> QuizVerdict {
    let statuses = puzzle
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            if answers.get(i).copied().flatten() == Some(q.answer()) {
                ItemStatus::Correct
            } else {
                ItemStatus::Incorrect
            }
        })
        .collect();
    quiz_verdict(statuses)
}

// ---------------------------------------------------------------------------
// Decomposition
// ---------------------------------------------------------------------------

fn column_status(want: u8, got: Option<u8>) -> ItemStatus {
    if got == Some(want) { ItemStatus::Correct } else { ItemStatus::Incorrect }
}

/// Each question is graded per column; it only counts as complete when all
/// three columns are correct.
pub fn grade_decomposition(
    puzzle: &DecompositionPuzzle,
    answers: &[DigitTriple],
) -> DecompositionVerdict {
    let questions: Vec<ColumnVerdict> = puzzle
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let want = q.answer();
            let got = answers.get(i).copied();
            ColumnVerdict {
                hundreds: column_status(want.hundreds, got.map(|g| g.hundreds)),
                tens: column_status(want.tens, got.map(|g| g.tens)),
                ones: column_status(want.ones, got.map(|g| g.ones)),
            }
        })
        .collect();
    let complete = questions.iter().filter(|c| c.complete()).count();
    DecompositionVerdict { questions, complete }
}
