use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Digit primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitPlace {
    Hundreds,
    Tens,
    Ones,
}

impl DigitPlace {
    /// The digit of `n` at this place.
    pub fn digit_of(self, n: u32) -> u8 {
        match self {
            DigitPlace::Hundreds => (n / 100 % 10) as u8,
            DigitPlace::Tens => (n / 10 % 10) as u8,
            DigitPlace::Ones => (n % 10) as u8,
        }
    }
}

impl fmt::Display for DigitPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fixed-locale labels, matching the rest of the question text.
        match self {
            DigitPlace::Hundreds => write!(f, "Yüzler"),
            DigitPlace::Tens => write!(f, "Onlar"),
            DigitPlace::Ones => write!(f, "Birler"),
        }
    }
}

/// The (hundreds, tens, ones) digits of a number below 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitTriple {
    pub hundreds: u8,
    pub tens: u8,
    pub ones: u8,
}

impl DigitTriple {
    pub fn of(n: u32) -> Self {
        DigitTriple {
            hundreds: DigitPlace::Hundreds.digit_of(n),
            tens: DigitPlace::Tens.digit_of(n),
            ones: DigitPlace::Ones.digit_of(n),
        }
    }

    pub fn value(self) -> u32 {
        self.hundreds as u32 * 100 + self.tens as u32 * 10 + self.ones as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of(n: u32) -> Self {
        if n % 2 == 0 { Parity::Even } else { Parity::Odd }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Odd => write!(f, "tek"),
            Parity::Even => write!(f, "çift"),
        }
    }
}

// ---------------------------------------------------------------------------
// Place-value coloring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellColor {
    Blue,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColoringMode {
    Single(DigitPlace),
    Mixed,
}

/// One place/digit pair of a mixed coloring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceTarget {
    pub place: DigitPlace,
    pub digit: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColoringRule {
    /// Both colors look at the same place; `blue` and `red` are distinct digits.
    Single { place: DigitPlace, blue: u8, red: u8 },
    /// Each color has its own place and digit. Blue wins when both match.
    Mixed { blue: PlaceTarget, red: PlaceTarget },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringPuzzle {
    pub numbers: Vec<u32>,
    pub rule: ColoringRule,
}

impl ColoringPuzzle {
    /// The color `n` must be painted, or `None` when the rule ignores it.
    /// This is the answer key; the whole puzzle is gradable from it.
    pub fn correct_color(&self, n: u32) -> Option<CellColor> {
        match &self.rule {
            ColoringRule::Single { place, blue, red } => {
                let digit = place.digit_of(n);
                if digit == *blue {
                    Some(CellColor::Blue)
                } else if digit == *red {
                    Some(CellColor::Red)
                } else {
                    None
                }
            }
            ColoringRule::Mixed { blue, red } => {
                if blue.place.digit_of(n) == blue.digit {
                    Some(CellColor::Blue)
                } else if red.place.digit_of(n) == red.digit {
                    Some(CellColor::Red)
                } else {
                    None
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingUnit {
    Ten,
    Hundred,
}

impl RoundingUnit {
    pub fn divisor(self) -> u32 {
        match self {
            RoundingUnit::Ten => 10,
            RoundingUnit::Hundred => 100,
        }
    }

    /// Round `n` to the nearest multiple of this unit, halves rounding up.
    pub fn round(self, n: u32) -> u32 {
        let d = self.divisor();
        (n + d / 2) / d * d
    }
}

impl fmt::Display for RoundingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingUnit::Ten => write!(f, "ten"),
            RoundingUnit::Hundred => write!(f, "hundred"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingPuzzle {
    pub numbers: Vec<u32>,
    pub target: u32,
    pub nearest: RoundingUnit,
}

impl RoundingPuzzle {
    pub fn rounds_to_target(&self, n: u32) -> bool {
        self.nearest.round(n) == self.target
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingPuzzle {
    /// Presentation order; all values distinct.
    pub numbers: Vec<u32>,
    pub order: SortOrder,
}

impl SortingPuzzle {
    /// The unique correct placement.
    pub fn sorted_reference(&self) -> Vec<u32> {
        let mut sorted = self.numbers.clone();
        sorted.sort_unstable();
        if self.order == SortOrder::Descending {
            sorted.reverse();
        }
        sorted
    }
}

// ---------------------------------------------------------------------------
// Rhythmic (skip) counting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhythmicPuzzle {
    /// First number of the sequence, in `1..=step`.
    pub start: u32,
    /// Step size, in `2..=9`.
    pub step: u32,
}

impl RhythmicPuzzle {
    /// The board is a fixed 1..=81 grid.
    pub const GRID_MAX: u32 = 81;

    /// The full answer sequence: start, start+step, ... while within the grid.
    pub fn sequence(&self) -> Vec<u32> {
        (self.start..=Self::GRID_MAX).step_by(self.step as usize).collect()
    }

    pub fn contains(&self, n: u32) -> bool {
        n >= self.start && n <= Self::GRID_MAX && (n - self.start) % self.step == 0
    }
}

// ---------------------------------------------------------------------------
// Odd / even quiz
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OddEvenKind {
    /// Classify a single number.
    Single,
    /// Classify the parity of a sum.
    Sum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OddEvenQuestion {
    Single { number: u32 },
    Sum { addends: [u32; 2] },
}

impl OddEvenQuestion {
    pub fn answer(&self) -> Parity {
        match self {
            OddEvenQuestion::Single { number } => Parity::of(*number),
            OddEvenQuestion::Sum { addends } => Parity::of(addends[0] + addends[1]),
        }
    }
}

impl fmt::Display for OddEvenQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddEvenQuestion::Single { number } => write!(f, "{}", number),
            OddEvenQuestion::Sum { addends } => write!(f, "{} + {}", addends[0], addends[1]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddEvenPuzzle {
    pub kind: OddEvenKind,
    pub questions: Vec<OddEvenQuestion>,
}

// ---------------------------------------------------------------------------
// Roman numeral quiz
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RomanActivity {
    /// Read a Roman numeral, pick the matching number.
    RomanToNumber,
    /// Read a number, pick the matching Roman numeral.
    NumberToRoman,
    /// Add two operands shown in mixed representations.
    Addition,
}

impl fmt::Display for RomanActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomanActivity::RomanToNumber => write!(f, "Roman to Number"),
            RomanActivity::NumberToRoman => write!(f, "Number to Roman"),
            RomanActivity::Addition => write!(f, "Roman Addition"),
        }
    }
}

/// What the player is shown. Operands of a sum may each be Arabic or Roman.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RomanPrompt {
    Single(String),
    Sum { lhs: String, rhs: String },
}

impl fmt::Display for RomanPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomanPrompt::Single(s) => write!(f, "{}", s),
            RomanPrompt::Sum { lhs, rhs } => write!(f, "{} + {}", lhs, rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanQuestion {
    pub prompt: RomanPrompt,
    /// Exactly 3 options; exactly one has the answer's value. Options may mix
    /// Arabic ("14") and Roman ("XIV") renderings.
    pub options: Vec<String>,
    /// Canonical numeric answer; either rendering of it grades correct.
    pub answer: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanPuzzle {
    pub activity: RomanActivity,
    pub questions: Vec<RomanQuestion>,
}

// ---------------------------------------------------------------------------
// Typed-answer questions (block addition, place-value find, word problems)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberQuestion {
    pub text: String,
    pub answer: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPuzzle {
    pub questions: Vec<NumberQuestion>,
}

// ---------------------------------------------------------------------------
// Decomposition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionQuestion {
    pub number: u32,
}

impl DecompositionQuestion {
    pub fn answer(&self) -> DigitTriple {
        DigitTriple::of(self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionPuzzle {
    pub questions: Vec<DecompositionQuestion>,
}

// ---------------------------------------------------------------------------
// Column addition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarryMode {
    WithCarry,
    WithoutCarry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionQuestion {
    pub num1: u32,
    pub num2: u32,
}

impl AdditionQuestion {
    pub fn answer(&self) -> u32 {
        self.num1 + self.num2
    }

    /// True when any digit place sums to 10 or more.
    pub fn has_carry(&self) -> bool {
        let a = DigitTriple::of(self.num1);
        let b = DigitTriple::of(self.num2);
        a.ones + b.ones >= 10 || a.tens + b.tens >= 10 || a.hundreds + b.hundreds >= 10
    }
}

impl fmt::Display for AdditionQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.num1, self.num2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAdditionPuzzle {
    pub carry: CarryMode,
    pub questions: Vec<AdditionQuestion>,
}

// ---------------------------------------------------------------------------
// The tagged puzzle union
// ---------------------------------------------------------------------------

/// One immutable generated problem instance. Grading and rendering dispatch
/// exhaustively on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Puzzle {
    Coloring(ColoringPuzzle),
    Rounding(RoundingPuzzle),
    Sorting(SortingPuzzle),
    Rhythmic(RhythmicPuzzle),
    BlockAddition(NumberPuzzle),
    PlaceValueFind(NumberPuzzle),
    OddEven(OddEvenPuzzle),
    Roman(RomanPuzzle),
    Decomposition(DecompositionPuzzle),
    ColumnAddition(ColumnAdditionPuzzle),
    WordProblems(NumberPuzzle),
}

impl Puzzle {
    /// Variant name, used in grading mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Puzzle::Coloring(_) => "Coloring",
            Puzzle::Rounding(_) => "Rounding",
            Puzzle::Sorting(_) => "Sorting",
            Puzzle::Rhythmic(_) => "Rhythmic",
            Puzzle::BlockAddition(_) => "BlockAddition",
            Puzzle::PlaceValueFind(_) => "PlaceValueFind",
            Puzzle::OddEven(_) => "OddEven",
            Puzzle::Roman(_) => "Roman",
            Puzzle::Decomposition(_) => "Decomposition",
            Puzzle::ColumnAddition(_) => "ColumnAddition",
            Puzzle::WordProblems(_) => "WordProblems",
        }
    }
}

// ---------------------------------------------------------------------------
// Drill request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillTopic {
    PlaceValueColoring(ColoringMode),
    Rounding,
    Sorting,
    RhythmicCounting,
    BlockAddition,
    PlaceValueFind,
    OddEven(OddEvenKind),
    Roman(RomanActivity),
    Decomposition,
    ColumnAddition(CarryMode),
    WordProblems,
}

impl fmt::Display for DrillTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DrillTopic::PlaceValueColoring(_) => "Place Value Coloring",
            DrillTopic::Rounding => "Rounding",
            DrillTopic::Sorting => "Sorting",
            DrillTopic::RhythmicCounting => "Rhythmic Counting",
            DrillTopic::BlockAddition => "Block Addition",
            DrillTopic::PlaceValueFind => "Place Value Find",
            DrillTopic::OddEven(_) => "Odd or Even",
            DrillTopic::Roman(_) => "Roman Numerals",
            DrillTopic::Decomposition => "Decomposition",
            DrillTopic::ColumnAddition(CarryMode::WithCarry) => "Addition With Carry",
            DrillTopic::ColumnAddition(CarryMode::WithoutCarry) => "Addition Without Carry",
            DrillTopic::WordProblems => "Word Problems",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRequest {
    pub topic: DrillTopic,
    /// `Some` makes generation fully reproducible.
    pub rng_seed: Option<u64>,
    /// Overrides the per-topic default item count where one applies.
    pub question_count: Option<usize>,
}

impl DrillRequest {
    pub fn new(topic: DrillTopic) -> Self {
        DrillRequest { topic, rng_seed: None, question_count: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    /// Topic-prefixed identifier, e.g. "RD-1F0A93C2".
    pub drill_id: String,
    pub topic: DrillTopic,
    pub puzzle: Puzzle,
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

/// The player's recorded input, frozen at grading time. The variant must
/// match the puzzle variant (see `grading::grade`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// Number -> painted color. Unpainted numbers carry no entry.
    Coloring(BTreeMap<u32, CellColor>),
    /// The set of selected numbers (rounding, rhythmic counting).
    Selection(Vec<u32>),
    /// Slot-by-slot placement; `None` for an empty slot.
    Sorting(Vec<Option<u32>>),
    /// One parity per question; `None` for unanswered.
    Parity(Vec<Option<Parity>>),
    /// One typed number per question; `None` for unanswered.
    Numbers(Vec<Option<u32>>),
    /// One selected option per Roman question, as displayed ("14" or "XIV").
    Choices(Vec<Option<String>>),
    /// One digit triple per decomposition question.
    Decomposition(Vec<DigitTriple>),
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Coloring(_) => "Coloring",
            Submission::Selection(_) => "Selection",
            Submission::Sorting(_) => "Sorting",
            Submission::Parity(_) => "Parity",
            Submission::Numbers(_) => "Numbers",
            Submission::Choices(_) => "Choices",
            Submission::Decomposition(_) => "Decomposition",
        }
    }
}

// ---------------------------------------------------------------------------
// Verdicts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Correct,
    Incorrect,
    /// Required but not selected. Only subset-selection games produce this.
    Missed,
}

/// Verdict for subset-selection games (coloring, rounding, rhythmic).
/// Numbers that are neither required nor selected carry no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridVerdict {
    pub cells: BTreeMap<u32, ItemStatus>,
    pub correct: usize,
    /// Count of numbers the answer key requires.
    pub required: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingVerdict {
    /// One status per slot, in slot order. Never `Missed`.
    pub slots: Vec<ItemStatus>,
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizVerdict {
    /// One status per question, in question order. Never `Missed`.
    pub questions: Vec<ItemStatus>,
    pub correct: usize,
}

/// Per-column grading of one decomposition question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVerdict {
    pub hundreds: ItemStatus,
    pub tens: ItemStatus,
    pub ones: ItemStatus,
}

impl ColumnVerdict {
    /// The question counts as solved only with all three columns correct.
    pub fn complete(&self) -> bool {
        self.hundreds == ItemStatus::Correct
            && self.tens == ItemStatus::Correct
            && self.ones == ItemStatus::Correct
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionVerdict {
    pub questions: Vec<ColumnVerdict>,
    /// Count of fully solved questions.
    pub complete: usize,
}

/// Graded outcome: per-item statuses plus an aggregate score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Grid(GridVerdict),
    Sorting(SortingVerdict),
    Quiz(QuizVerdict),
    Decomposition(DecompositionVerdict),
}

impl Verdict {
    /// Aggregate `(correct, expected)` score.
    pub fn score(&self) -> (usize, usize) {
        match self {
            Verdict::Grid(v) => (v.correct, v.required),
            Verdict::Sorting(v) => (v.correct, v.slots.len()),
            Verdict::Quiz(v) => (v.correct, v.questions.len()),
            Verdict::Decomposition(v) => (v.complete, v.questions.len()),
        }
    }
}
