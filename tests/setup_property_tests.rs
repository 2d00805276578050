//! Property tests for board setup and move resolution.

use proptest::prelude::*;

use snakes_and_ladders::board::{Board, BoardEntity};
use snakes_and_ladders::core::{ConfigError, GameError, GameRng};
use snakes_and_ladders::rules::RuleSet;
use snakes_and_ladders::setup::{BoardSetupStrategy, CustomLayout, Difficulty};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn assert_well_formed(board: &Board) -> Result<(), TestCaseError> {
    let entities = board.entities();
    let mut starts: Vec<_> = entities.iter().map(BoardEntity::start).collect();
    starts.dedup();
    prop_assert_eq!(starts.len(), entities.len());

    for entity in &entities {
        prop_assert!(board.contains_cell(entity.start()));
        prop_assert!(board.contains_cell(entity.end()));
        if entity.is_snake() {
            prop_assert!(entity.end() < entity.start());
        } else {
            prop_assert!(entity.end() > entity.start());
        }
    }
    Ok(())
}

proptest! {
    /// Random layouts are well formed and never exceed their target.
    #[test]
    fn prop_random_layout_invariants(side in 1u32..=30, level in difficulty(), seed in any::<u64>()) {
        let mut board = Board::square(side).unwrap();
        let summary = BoardSetupStrategy::Random(level)
            .apply(&mut board, &mut GameRng::new(seed))
            .unwrap();

        assert_well_formed(&board)?;
        prop_assert_eq!(summary.placed() + summary.skipped, board.size() / 10);
        prop_assert_eq!(summary.placed() as usize, board.entity_count());

        // Random entities never touch the final cell.
        for entity in board.entities() {
            prop_assert!(entity.start() < board.size());
            prop_assert!(entity.end() < board.size());
        }
    }

    /// Feasible custom counts are placed exactly.
    #[test]
    fn prop_custom_counts_are_exact(
        side in 10u32..=20,
        snakes in 0u32..=10,
        ladders in 0u32..=10,
        seed in any::<u64>(),
    ) {
        let mut board = Board::square(side).unwrap();
        let layout = CustomLayout::counts(snakes, ladders);
        let summary = BoardSetupStrategy::CustomCount(layout)
            .apply(&mut board, &mut GameRng::new(seed))
            .unwrap();

        assert_well_formed(&board)?;
        prop_assert_eq!(summary.snakes, snakes);
        prop_assert_eq!(summary.ladders, ladders);
        prop_assert_eq!(board.snake_count(), snakes as usize);
        prop_assert_eq!(board.ladder_count(), ladders as usize);
    }

    /// Explicit layouts either fail before placing anything or keep the
    /// first entity for every start cell.
    #[test]
    fn prop_explicit_layout_first_wins(
        snakes in prop::collection::vec((1u32..=49, 1u32..=49), 0..8),
        ladders in prop::collection::vec((1u32..=49, 1u32..=49), 0..8),
    ) {
        let mut board = Board::square(7).unwrap();
        let layout = CustomLayout::explicit(snakes.clone(), ladders.clone());
        let result = BoardSetupStrategy::CustomCount(layout).apply(&mut board, &mut GameRng::new(0));

        let final_cell = board.size();
        let any_bad = snakes.iter().any(|&(s, e)| e >= s || s == final_cell)
            || ladders.iter().any(|&(s, e)| e <= s);
        match result {
            Err(GameError::Config(
                ConfigError::InvalidSnake { .. }
                | ConfigError::InvalidLadder { .. }
                | ConfigError::SnakeOnFinalCell { .. },
            )) => {
                prop_assert!(any_bad);
                prop_assert!(board.is_empty());
            }
            Ok(summary) => {
                prop_assert!(!any_bad);
                assert_well_formed(&board)?;
                prop_assert_eq!(summary.placed() + summary.skipped, (snakes.len() + ladders.len()) as u32);

                let all = snakes.iter().map(|&p| (p, true)).chain(ladders.iter().map(|&p| (p, false)));
                let mut seen = std::collections::HashSet::new();
                for ((start, end), is_snake) in all {
                    if seen.insert(start) {
                        let placed = board.entity_at(start).unwrap();
                        prop_assert_eq!(placed.end(), end);
                        prop_assert_eq!(placed.is_snake(), is_snake);
                    }
                }
            }
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    /// Resolution is a pure function of position, roll and board.
    #[test]
    fn prop_resolution_is_deterministic(position in 0u32..100, roll in 1u32..=6, seed in any::<u64>()) {
        let mut board = Board::square(10).unwrap();
        BoardSetupStrategy::Random(Difficulty::Medium)
            .apply(&mut board, &mut GameRng::new(seed))
            .unwrap();
        let rules = RuleSet::Standard;
        prop_assume!(rules.is_valid_move(position, roll, board.size()));

        let first = rules.resolve_position(position, roll, &board);
        let second = rules.resolve_position(position, roll, &board);
        prop_assert_eq!(first, second);

        let landing = position + roll;
        let expected = board.entity_at(landing).map_or(landing, BoardEntity::end);
        prop_assert_eq!(first, expected);
    }

    /// Win and validity boundaries.
    #[test]
    fn prop_win_and_validity(position in 0u32..=120, roll in 1u32..=6, size in 1u32..=110) {
        let rules = RuleSet::Standard;
        prop_assert_eq!(rules.is_win(position, size), position == size);
        prop_assert_eq!(rules.is_valid_move(position, roll, size), position + roll <= size);
    }
}

/// An infeasible custom count reports exhaustion rather than spinning.
#[test]
fn test_infeasible_custom_count() {
    // Nine cells leave no room for a snake start.
    let mut board = Board::square(3).unwrap();
    let err = BoardSetupStrategy::CustomCount(CustomLayout::counts(1, 0))
        .apply(&mut board, &mut GameRng::new(0))
        .unwrap_err();

    assert!(matches!(err, GameError::PlacementExhausted { placed: 0, requested: 1, .. }));
}
