//! Unit tests for the `math_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical drill; different seeds → varied output |
//! | Structural | Drill ID prefixes; per-topic default and overridden counts |
//! | Per-topic invariants | Distinctness, ranges, carry/no-carry, option shape |
//! | Grading | Subset, sorting, quiz, Roman-equivalence, per-column decomposition |
//! | Serialization | Drill survives a JSON round trip |
//! | Errors | Mismatched submission shape is rejected |

use std::collections::HashSet;

use crate::drill_engine::models::*;
use crate::drill_engine::roman::from_roman;
use crate::drill_engine::{generate_drill, grade};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Build a deterministic request with the topic default question count.
fn req(topic: DrillTopic, seed: u64) -> DrillRequest {
    DrillRequest { topic, rng_seed: Some(seed), question_count: None }
}

/// Every topic variant in canonical order.
fn all_topics() -> Vec<DrillTopic> {
    vec![
        DrillTopic::PlaceValueColoring(ColoringMode::Single(DigitPlace::Hundreds)),
        DrillTopic::PlaceValueColoring(ColoringMode::Single(DigitPlace::Tens)),
        DrillTopic::PlaceValueColoring(ColoringMode::Single(DigitPlace::Ones)),
        DrillTopic::PlaceValueColoring(ColoringMode::Mixed),
        DrillTopic::Rounding,
        DrillTopic::Sorting,
        DrillTopic::RhythmicCounting,
        DrillTopic::BlockAddition,
        DrillTopic::PlaceValueFind,
        DrillTopic::OddEven(OddEvenKind::Single),
        DrillTopic::OddEven(OddEvenKind::Sum),
        DrillTopic::Roman(RomanActivity::RomanToNumber),
        DrillTopic::Roman(RomanActivity::NumberToRoman),
        DrillTopic::Roman(RomanActivity::Addition),
        DrillTopic::Decomposition,
        DrillTopic::ColumnAddition(CarryMode::WithoutCarry),
        DrillTopic::ColumnAddition(CarryMode::WithCarry),
        DrillTopic::WordProblems,
    ]
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Numeric value of a displayed Roman-quiz option.
fn option_value(option: &str) -> u32 {
    option.parse().unwrap_or_else(|_| from_roman(option))
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_drill() {
    for topic in all_topics() {
        let a = generate_drill(req(topic, 12345)).unwrap();
        let b = generate_drill(req(topic, 12345)).unwrap();
        assert_eq!(a, b, "drill mismatch for {topic:?}");
    }
}

#[test]
fn different_seeds_produce_different_drills() {
    for topic in all_topics() {
        for seed in SEEDS {
            let a = generate_drill(req(topic, seed)).unwrap();
            let b = generate_drill(req(topic, seed + 500)).unwrap();
            assert_ne!(a.drill_id, b.drill_id, "drill_id collision for {topic:?} seed={seed}");
        }
    }
}

#[test]
fn entropy_seed_produces_a_valid_drill() {
    // Smoke test: rng_seed: None must not fail for any topic.
    for topic in all_topics() {
        let drill = generate_drill(DrillRequest::new(topic)).unwrap();
        assert!(!drill.drill_id.is_empty());
        assert_eq!(drill.topic, topic);
    }
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_drill_id_starts_with_topic_prefix() {
    let expected_prefixes = [
        (DrillTopic::PlaceValueColoring(ColoringMode::Mixed), "PC-"),
        (DrillTopic::Rounding, "RD-"),
        (DrillTopic::Sorting, "SO-"),
        (DrillTopic::RhythmicCounting, "RC-"),
        (DrillTopic::BlockAddition, "BA-"),
        (DrillTopic::PlaceValueFind, "PV-"),
        (DrillTopic::OddEven(OddEvenKind::Single), "OE-"),
        (DrillTopic::Roman(RomanActivity::Addition), "RN-"),
        (DrillTopic::Decomposition, "DC-"),
        (DrillTopic::ColumnAddition(CarryMode::WithCarry), "CA-"),
        (DrillTopic::WordProblems, "WP-"),
    ];
    for (topic, prefix) in expected_prefixes {
        let drill = generate_drill(req(topic, 1)).unwrap();
        assert!(
            drill.drill_id.starts_with(prefix),
            "ID '{}' for {topic:?} does not start with '{prefix}'",
            drill.drill_id
        );
    }
}

#[test]
fn question_count_override_is_honoured() {
    let drill = generate_drill(DrillRequest {
        topic: DrillTopic::OddEven(OddEvenKind::Single),
        rng_seed: Some(1),
        question_count: Some(7),
    })
    .unwrap();
    match drill.puzzle {
        Puzzle::OddEven(p) => assert_eq!(p.questions.len(), 7),
        other => panic!("unexpected puzzle {other:?}"),
    }

    let drill = generate_drill(DrillRequest {
        topic: DrillTopic::Roman(RomanActivity::RomanToNumber),
        rng_seed: Some(1),
        question_count: Some(5),
    })
    .unwrap();
    match drill.puzzle {
        Puzzle::Roman(p) => assert_eq!(p.questions.len(), 5),
        other => panic!("unexpected puzzle {other:?}"),
    }
}

#[test]
fn default_question_counts() {
    let counts = |topic: DrillTopic| -> usize {
        match generate_drill(req(topic, 3)).unwrap().puzzle {
            Puzzle::Coloring(p) => p.numbers.len(),
            Puzzle::Rounding(p) => p.numbers.len(),
            Puzzle::OddEven(p) => p.questions.len(),
            Puzzle::Roman(p) => p.questions.len(),
            Puzzle::ColumnAddition(p) => p.questions.len(),
            Puzzle::BlockAddition(p) | Puzzle::WordProblems(p) => p.questions.len(),
            other => panic!("unexpected puzzle {other:?}"),
        }
    };
    assert_eq!(counts(DrillTopic::PlaceValueColoring(ColoringMode::Mixed)), 20);
    assert_eq!(counts(DrillTopic::Rounding), 20);
    assert_eq!(counts(DrillTopic::OddEven(OddEvenKind::Sum)), 15);
    assert_eq!(counts(DrillTopic::Roman(RomanActivity::NumberToRoman)), 10);
    assert_eq!(counts(DrillTopic::ColumnAddition(CarryMode::WithoutCarry)), 5);
    assert_eq!(counts(DrillTopic::BlockAddition), 4);
    assert_eq!(counts(DrillTopic::WordProblems), 5);
}

// ── coloring ─────────────────────────────────────────────────────────────────

fn coloring_puzzle(topic: DrillTopic, seed: u64) -> ColoringPuzzle {
    match generate_drill(req(topic, seed)).unwrap().puzzle {
        Puzzle::Coloring(p) => p,
        other => panic!("unexpected puzzle {other:?}"),
    }
}

#[test]
fn coloring_numbers_are_distinct_three_digit() {
    for seed in SEEDS {
        for mode in [ColoringMode::Single(DigitPlace::Tens), ColoringMode::Mixed] {
            let p = coloring_puzzle(DrillTopic::PlaceValueColoring(mode), seed);
            assert_eq!(p.numbers.len(), 20);
            let distinct: HashSet<u32> = p.numbers.iter().copied().collect();
            assert_eq!(distinct.len(), 20, "duplicate grid number (seed={seed})");
            assert!(p.numbers.iter().all(|n| (100..=999).contains(n)));
        }
    }
}

#[test]
fn coloring_targets_are_distinct() {
    for seed in SEEDS {
        let p = coloring_puzzle(
            DrillTopic::PlaceValueColoring(ColoringMode::Single(DigitPlace::Ones)),
            seed,
        );
        match p.rule {
            ColoringRule::Single { place, blue, red } => {
                assert_eq!(place, DigitPlace::Ones);
                assert_ne!(blue, red, "blue and red digits collide (seed={seed})");
            }
            ref other => panic!("unexpected rule {other:?}"),
        }

        let p = coloring_puzzle(DrillTopic::PlaceValueColoring(ColoringMode::Mixed), seed);
        match p.rule {
            ColoringRule::Mixed { blue, red } => {
                assert_ne!(blue.place, red.place, "mixed places collide (seed={seed})");
                assert_ne!(blue.digit, red.digit, "mixed digits collide (seed={seed})");
            }
            ref other => panic!("unexpected rule {other:?}"),
        }
    }
}

#[test]
fn coloring_blue_rule_wins_in_mixed_mode() {
    let puzzle = ColoringPuzzle {
        numbers: vec![303],
        rule: ColoringRule::Mixed {
            blue: PlaceTarget { place: DigitPlace::Hundreds, digit: 3 },
            red: PlaceTarget { place: DigitPlace::Ones, digit: 3 },
        },
    };
    // 303 matches both rules; blue has priority.
    assert_eq!(puzzle.correct_color(303), Some(CellColor::Blue));
}

#[test]
fn coloring_grading_classifies_each_cell() {
    use std::collections::BTreeMap;

    // Tens digits: 152 -> 5 (blue), 521 -> 2 (red), 620 -> 2 (red), 333 -> none.
    let puzzle = Puzzle::Coloring(ColoringPuzzle {
        numbers: vec![152, 521, 620, 333],
        rule: ColoringRule::Single { place: DigitPlace::Tens, blue: 5, red: 2 },
    });
    let mut painted = BTreeMap::new();
    painted.insert(152, CellColor::Blue); // correct
    painted.insert(521, CellColor::Blue); // wrong color
    let verdict = grade(&puzzle, &Submission::Coloring(painted)).unwrap();

    match verdict {
        Verdict::Grid(v) => {
            assert_eq!(v.cells.get(&152), Some(&ItemStatus::Correct));
            assert_eq!(v.cells.get(&521), Some(&ItemStatus::Incorrect));
            assert_eq!(v.cells.get(&620), Some(&ItemStatus::Missed));
            assert_eq!(v.cells.get(&333), None);
            assert_eq!((v.correct, v.required), (1, 3));
        }
        other => panic!("unexpected verdict {other:?}"),
    }
}

// ── rounding ─────────────────────────────────────────────────────────────────

fn rounding_puzzle(seed: u64) -> RoundingPuzzle {
    match generate_drill(req(DrillTopic::Rounding, seed)).unwrap().puzzle {
        Puzzle::Rounding(p) => p,
        other => panic!("unexpected puzzle {other:?}"),
    }
}

#[test]
fn rounding_has_exactly_five_matching_numbers() {
    for seed in SEEDS {
        let p = rounding_puzzle(seed);
        assert_eq!(p.numbers.len(), 20);
        let distinct: HashSet<u32> = p.numbers.iter().copied().collect();
        assert_eq!(distinct.len(), 20, "duplicate number (seed={seed})");

        let matching: Vec<u32> =
            p.numbers.iter().copied().filter(|&n| p.rounds_to_target(n)).collect();
        assert_eq!(matching.len(), 5, "wrong matching count (seed={seed})");
        assert!(
            matching.iter().all(|&n| n != p.target),
            "target itself appears as a matching number (seed={seed})"
        );
        assert_eq!(p.target % p.nearest.divisor(), 0, "target not a unit multiple (seed={seed})");
    }
}

#[test]
fn rounding_grading_scores_required_set() {
    let p = rounding_puzzle(42);
    let required: Vec<u32> = p.numbers.iter().copied().filter(|&n| p.rounds_to_target(n)).collect();
    let puzzle = Puzzle::Rounding(p);

    // Perfect selection.
    let verdict = grade(&puzzle, &Submission::Selection(required.clone())).unwrap();
    assert_eq!(verdict.score(), (5, 5));

    // Selecting everything: 5 correct, 15 incorrect, required stays 5.
    if let Puzzle::Rounding(ref p) = puzzle {
        let verdict = grade(&puzzle, &Submission::Selection(p.numbers.clone())).unwrap();
        match verdict {
            Verdict::Grid(v) => {
                assert_eq!((v.correct, v.required), (5, 5));
                let incorrect =
                    v.cells.values().filter(|&&s| s == ItemStatus::Incorrect).count();
                assert_eq!(incorrect, 15);
            }
            other => panic!("unexpected verdict {other:?}"),
        }
    }
}

// ── sorting ──────────────────────────────────────────────────────────────────

#[test]
fn sorting_reference_is_the_unique_correct_placement() {
    let puzzle = SortingPuzzle { numbers: vec![342, 118, 905, 276, 410], order: SortOrder::Ascending };
    assert_eq!(puzzle.sorted_reference(), vec![118, 276, 342, 410, 905]);

    let desc = SortingPuzzle { numbers: vec![342, 118, 905, 276, 410], order: SortOrder::Descending };
    assert_eq!(desc.sorted_reference(), vec![905, 410, 342, 276, 118]);
}

#[test]
fn sorting_grading_is_per_slot() {
    let puzzle = Puzzle::Sorting(SortingPuzzle {
        numbers: vec![342, 118, 905, 276, 410],
        order: SortOrder::Ascending,
    });

    let perfect: Vec<Option<u32>> = [118, 276, 342, 410, 905].into_iter().map(Some).collect();
    assert_eq!(grade(&puzzle, &Submission::Sorting(perfect)).unwrap().score(), (5, 5));

    // Two swapped slots, one empty.
    let flawed = vec![Some(276), Some(118), Some(342), None, Some(905)];
    match grade(&puzzle, &Submission::Sorting(flawed)).unwrap() {
        Verdict::Sorting(v) => {
            assert_eq!(
                v.slots,
                vec![
                    ItemStatus::Incorrect,
                    ItemStatus::Incorrect,
                    ItemStatus::Correct,
                    ItemStatus::Incorrect,
                    ItemStatus::Correct,
                ]
            );
            assert_eq!(v.correct, 2);
        }
        other => panic!("unexpected verdict {other:?}"),
    }
}

#[test]
fn sorting_numbers_are_distinct() {
    for seed in SEEDS {
        match generate_drill(req(DrillTopic::Sorting, seed)).unwrap().puzzle {
            Puzzle::Sorting(p) => {
                let distinct: HashSet<u32> = p.numbers.iter().copied().collect();
                assert_eq!(distinct.len(), 5, "duplicate sort number (seed={seed})");
            }
            other => panic!("unexpected puzzle {other:?}"),
        }
    }
}

// ── rhythmic counting ────────────────────────────────────────────────────────

#[test]
fn rhythmic_sequence_matches_step_and_grid() {
    for seed in SEEDS {
        let p = match generate_drill(req(DrillTopic::RhythmicCounting, seed)).unwrap().puzzle {
            Puzzle::Rhythmic(p) => p,
            other => panic!("unexpected puzzle {other:?}"),
        };
        assert!((2..=9).contains(&p.step), "step out of range (seed={seed})");
        assert!((1..=p.step).contains(&p.start), "start out of range (seed={seed})");

        let seq = p.sequence();
        assert_eq!(seq[0], p.start);
        assert!(*seq.last().unwrap() <= RhythmicPuzzle::GRID_MAX);
        assert!(seq.windows(2).all(|w| w[1] - w[0] == p.step));
        assert!(seq.iter().all(|&n| p.contains(n)));
    }
}

#[test]
fn rhythmic_grading_marks_omissions_as_missed() {
    let p = RhythmicPuzzle { start: 3, step: 4 };
    let mut selection = p.sequence();
    let dropped = selection.pop().unwrap();
    let expected_total = p.sequence().len();

    let puzzle = Puzzle::Rhythmic(p);
    match grade(&puzzle, &Submission::Selection(selection)).unwrap() {
        Verdict::Grid(v) => {
            assert_eq!((v.correct, v.required), (expected_total - 1, expected_total));
            assert_eq!(v.cells.get(&dropped), Some(&ItemStatus::Missed));
        }
        other => panic!("unexpected verdict {other:?}"),
    }
}

// ── block addition / place-value find ────────────────────────────────────────

#[test]
fn block_addition_text_sums_to_answer() {
    for seed in SEEDS {
        let p = match generate_drill(req(DrillTopic::BlockAddition, seed)).unwrap().puzzle {
            Puzzle::BlockAddition(p) => p,
            other => panic!("unexpected puzzle {other:?}"),
        };
        for q in &p.questions {
            assert!((100..=998).contains(&q.answer));
            let sum: u32 = q.text.split(" + ").map(|part| part.parse::<u32>().unwrap()).sum();
            assert_eq!(sum, q.answer, "block terms do not sum to answer (seed={seed})");
            assert!(
                q.text.split(" + ").all(|part| matches!(part, "100" | "10" | "1")),
                "unexpected block term in '{}'",
                q.text
            );
        }
    }
}

#[test]
fn place_value_find_is_the_canned_table_shuffled() {
    let p = match generate_drill(req(DrillTopic::PlaceValueFind, 9)).unwrap().puzzle {
        Puzzle::PlaceValueFind(p) => p,
        other => panic!("unexpected puzzle {other:?}"),
    };
    let answers: HashSet<u32> = p.questions.iter().map(|q| q.answer).collect();
    assert_eq!(answers, HashSet::from([340, 501, 800, 952]));
}

// ── odd / even ───────────────────────────────────────────────────────────────

#[test]
fn odd_even_operands_stay_in_range() {
    for seed in SEEDS {
        for kind in [OddEvenKind::Single, OddEvenKind::Sum] {
            let p = match generate_drill(req(DrillTopic::OddEven(kind), seed)).unwrap().puzzle {
                Puzzle::OddEven(p) => p,
                other => panic!("unexpected puzzle {other:?}"),
            };
            assert_eq!(p.kind, kind);
            for q in &p.questions {
                match q {
                    OddEvenQuestion::Single { number } => {
                        assert!((1..=999).contains(number), "single out of range (seed={seed})");
                    }
                    OddEvenQuestion::Sum { addends } => {
                        assert!(addends.iter().all(|a| (1..=499).contains(a)));
                    }
                }
            }
        }
    }
}

#[test]
fn odd_even_grading_uses_parity_of_the_value_or_sum() {
    let puzzle = Puzzle::OddEven(OddEvenPuzzle {
        kind: OddEvenKind::Single,
        questions: vec![OddEvenQuestion::Single { number: 457 }],
    });
    let verdict = grade(&puzzle, &Submission::Parity(vec![Some(Parity::Odd)])).unwrap();
    assert_eq!(verdict.score(), (1, 1));

    // 12 + 7 = 19 is odd, so "even" is wrong.
    let puzzle = Puzzle::OddEven(OddEvenPuzzle {
        kind: OddEvenKind::Sum,
        questions: vec![OddEvenQuestion::Sum { addends: [12, 7] }],
    });
    let verdict = grade(&puzzle, &Submission::Parity(vec![Some(Parity::Even)])).unwrap();
    assert_eq!(verdict.score(), (0, 1));
}

// ── roman numerals ───────────────────────────────────────────────────────────

fn roman_puzzle(activity: RomanActivity, seed: u64) -> RomanPuzzle {
    match generate_drill(req(DrillTopic::Roman(activity), seed)).unwrap().puzzle {
        Puzzle::Roman(p) => p,
        other => panic!("unexpected puzzle {other:?}"),
    }
}

#[test]
fn roman_questions_have_exactly_one_correct_option() {
    for seed in SEEDS {
        for activity in
            [RomanActivity::RomanToNumber, RomanActivity::NumberToRoman, RomanActivity::Addition]
        {
            let p = roman_puzzle(activity, seed);
            assert_eq!(p.questions.len(), 10);
            for q in &p.questions {
                assert_eq!(q.options.len(), 3, "{activity:?} seed={seed}");
                let correct =
                    q.options.iter().filter(|o| option_value(o) == q.answer).count();
                assert_eq!(
                    correct, 1,
                    "expected exactly 1 correct option for {activity:?} seed={seed} \
                     (answer={}, options={:?})",
                    q.answer, q.options
                );
            }
        }
    }
}

#[test]
fn roman_prompts_are_consistent_with_answers() {
    for seed in SEEDS {
        for q in &roman_puzzle(RomanActivity::RomanToNumber, seed).questions {
            match &q.prompt {
                RomanPrompt::Single(s) => assert_eq!(from_roman(s), q.answer),
                other => panic!("unexpected prompt {other:?}"),
            }
        }
        for q in &roman_puzzle(RomanActivity::Addition, seed).questions {
            match &q.prompt {
                RomanPrompt::Sum { lhs, rhs } => {
                    assert_eq!(option_value(lhs) + option_value(rhs), q.answer);
                }
                other => panic!("unexpected prompt {other:?}"),
            }
        }
    }
}

#[test]
fn roman_grading_accepts_either_rendering() {
    let puzzle = Puzzle::Roman(RomanPuzzle {
        activity: RomanActivity::RomanToNumber,
        questions: vec![RomanQuestion {
            prompt: RomanPrompt::Single("XIV".to_string()),
            options: vec!["14".to_string(), "XV".to_string(), "XIII".to_string()],
            answer: 14,
        }],
    });

    let pick = |option: &str| {
        grade(&puzzle, &Submission::Choices(vec![Some(option.to_string())])).unwrap().score()
    };
    assert_eq!(pick("14"), (1, 1));
    assert_eq!(pick("XIV"), (1, 1)); // same value, Roman rendering
    assert_eq!(pick("XV"), (0, 1));
    assert_eq!(pick("XIII"), (0, 1));
}

// ── decomposition ────────────────────────────────────────────────────────────

#[test]
fn decomposition_numbers_are_distinct_and_answers_recompose() {
    for seed in SEEDS {
        let p = match generate_drill(req(DrillTopic::Decomposition, seed)).unwrap().puzzle {
            Puzzle::Decomposition(p) => p,
            other => panic!("unexpected puzzle {other:?}"),
        };
        assert_eq!(p.questions.len(), 5);
        let distinct: HashSet<u32> = p.questions.iter().map(|q| q.number).collect();
        assert_eq!(distinct.len(), 5, "duplicate number (seed={seed})");
        for q in &p.questions {
            assert!((100..=999).contains(&q.number));
            assert_eq!(q.answer().value(), q.number);
        }
    }
}

#[test]
fn decomposition_grading_is_per_column() {
    let puzzle = Puzzle::Decomposition(DecompositionPuzzle {
        questions: vec![DecompositionQuestion { number: 952 }],
    });

    let exact = DigitTriple { hundreds: 9, tens: 5, ones: 2 };
    match grade(&puzzle, &Submission::Decomposition(vec![exact])).unwrap() {
        Verdict::Decomposition(v) => {
            assert!(v.questions[0].complete());
            assert_eq!(v.complete, 1);
        }
        other => panic!("unexpected verdict {other:?}"),
    }

    let wrong_tens = DigitTriple { hundreds: 9, tens: 4, ones: 2 };
    match grade(&puzzle, &Submission::Decomposition(vec![wrong_tens])).unwrap() {
        Verdict::Decomposition(v) => {
            let columns = v.questions[0];
            assert_eq!(columns.hundreds, ItemStatus::Correct);
            assert_eq!(columns.tens, ItemStatus::Incorrect);
            assert_eq!(columns.ones, ItemStatus::Correct);
            assert!(!columns.complete());
            assert_eq!(v.complete, 0);
        }
        other => panic!("unexpected verdict {other:?}"),
    }
}

// ── column addition ──────────────────────────────────────────────────────────

fn column_puzzle(carry: CarryMode, seed: u64) -> ColumnAdditionPuzzle {
    match generate_drill(req(DrillTopic::ColumnAddition(carry), seed)).unwrap().puzzle {
        Puzzle::ColumnAddition(p) => p,
        other => panic!("unexpected puzzle {other:?}"),
    }
}

#[test]
fn without_carry_never_carries_and_stays_below_1000() {
    for seed in SEEDS {
        let p = column_puzzle(CarryMode::WithoutCarry, seed);
        for q in &p.questions {
            assert!(!q.has_carry(), "{} carries (seed={seed})", q);
            assert!(q.answer() < 1000, "{} overflows three digits (seed={seed})", q);
            assert!((100..=999).contains(&q.num1) && (100..=999).contains(&q.num2));
        }
    }
}

#[test]
fn with_carry_always_carries_somewhere() {
    for seed in SEEDS {
        let p = column_puzzle(CarryMode::WithCarry, seed);
        for q in &p.questions {
            assert!(q.has_carry(), "{} never carries (seed={seed})", q);
            assert!((100..=999).contains(&q.num1) && (100..=999).contains(&q.num2));
        }
    }
}

#[test]
fn column_addition_pairs_are_unique_order_independently() {
    for seed in SEEDS {
        for carry in [CarryMode::WithoutCarry, CarryMode::WithCarry] {
            let p = column_puzzle(carry, seed);
            let keys: HashSet<(u32, u32)> = p
                .questions
                .iter()
                .map(|q| (q.num1.min(q.num2), q.num1.max(q.num2)))
                .collect();
            assert_eq!(keys.len(), p.questions.len(), "duplicate pair ({carry:?} seed={seed})");
        }
    }
}

#[test]
fn column_addition_grading_checks_the_sum() {
    let puzzle = Puzzle::ColumnAddition(ColumnAdditionPuzzle {
        carry: CarryMode::WithoutCarry,
        questions: vec![
            AdditionQuestion { num1: 123, num2: 456 },
            AdditionQuestion { num1: 211, num2: 333 },
        ],
    });
    let verdict = grade(&puzzle, &Submission::Numbers(vec![Some(579), Some(545)])).unwrap();
    match verdict {
        Verdict::Quiz(v) => {
            assert_eq!(v.questions, vec![ItemStatus::Correct, ItemStatus::Incorrect]);
            assert_eq!(v.correct, 1);
        }
        other => panic!("unexpected verdict {other:?}"),
    }
}

// ── word problems ────────────────────────────────────────────────────────────

#[test]
fn word_problem_sums_are_distinct_and_in_range() {
    for seed in SEEDS {
        let p = match generate_drill(req(DrillTopic::WordProblems, seed)).unwrap().puzzle {
            Puzzle::WordProblems(p) => p,
            other => panic!("unexpected puzzle {other:?}"),
        };
        assert_eq!(p.questions.len(), 5);
        let sums: HashSet<u32> = p.questions.iter().map(|q| q.answer).collect();
        assert_eq!(sums.len(), 5, "duplicate sum (seed={seed})");
        for q in &p.questions {
            // Two addends in 5..=49.
            assert!((10..=98).contains(&q.answer), "sum out of range (seed={seed})");
            assert!(!q.text.is_empty());
        }
    }
}

#[test]
fn unanswered_quiz_questions_grade_incorrect() {
    let drill = generate_drill(req(DrillTopic::WordProblems, 11)).unwrap();
    let verdict = grade(&drill.puzzle, &Submission::Numbers(vec![])).unwrap();
    assert_eq!(verdict.score(), (0, 5));
}

// ── serialization / errors ───────────────────────────────────────────────────

#[test]
fn drill_survives_a_json_round_trip() {
    for topic in all_topics() {
        let drill = generate_drill(req(topic, 42)).unwrap();
        let json = serde_json::to_string(&drill).unwrap();
        let back: Drill = serde_json::from_str(&json).unwrap();
        assert_eq!(drill, back, "JSON round trip changed the drill for {topic:?}");
    }
}

#[test]
fn mismatched_submission_shape_is_rejected() {
    let drill = generate_drill(req(DrillTopic::Sorting, 1)).unwrap();
    let err = grade(&drill.puzzle, &Submission::Numbers(vec![Some(1)])).unwrap_err();
    assert_eq!(err.expected, "Sorting");
    assert_eq!(err.submitted, "Numbers");
}
