//! Random layouts and the draw-and-retry placement they share with
//! custom counts.
//!
//! A snake draws its start from `[10, cells - 1]` and its end from
//! `[1, start - 1]`. A ladder draws its start from `[1, cells - 10]` and
//! its end from `[start + 1, cells - 1]`. An attempt succeeds when the start
//! cell is free.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::strategy::PlacementSummary;
use crate::board::{Board, BoardEntity, EntityKind};
use crate::core::{ConfigError, GameResult, GameRng};

/// Attempts per entity before a random layout gives up on it.
pub const RANDOM_RETRY_BUDGET: u32 = 50;

/// Random layouts aim for one entity per this many cells.
pub const CELLS_PER_ENTITY: u32 = 10;

const SNAKE_MIN_START: u32 = 10;
const LADDER_TOP_MARGIN: u32 = 10;

/// Bias of a random layout towards snakes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Mostly ladders.
    Easy,
    /// Even split.
    #[default]
    Medium,
    /// Mostly snakes.
    Hard,
}

impl Difficulty {
    /// Chance that each generated entity is a snake.
    #[must_use]
    pub const fn snake_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.7,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

/// Start cells a randomly drawn entity of `kind` may use, or `None` when the
/// board is too small to hold one.
#[must_use]
pub fn start_range(kind: EntityKind, cell_count: u32) -> Option<RangeInclusive<u32>> {
    let (low, high) = match kind {
        EntityKind::Snake => (SNAKE_MIN_START, cell_count.checked_sub(1)?),
        EntityKind::Ladder => (1, cell_count.checked_sub(LADDER_TOP_MARGIN)?),
    };
    (low <= high).then_some(low..=high)
}

/// End cells for a random entity of `kind` starting on `start`.
fn end_range(kind: EntityKind, start: u32, cell_count: u32) -> RangeInclusive<u32> {
    match kind {
        EntityKind::Snake => 1..=start - 1,
        EntityKind::Ladder => start + 1..=cell_count - 1,
    }
}

/// Try up to `budget` random draws for one entity of `kind`.
///
/// Returns whether an entity was placed.
pub(crate) fn place_one(
    board: &mut Board,
    rng: &mut GameRng,
    kind: EntityKind,
    budget: u32,
) -> Result<bool, ConfigError> {
    let cell_count = board.size();
    let Some(starts) = start_range(kind, cell_count) else {
        return Ok(false);
    };

    for _ in 0..budget {
        let start = rng.gen_inclusive(starts.clone());
        let end = rng.gen_inclusive(end_range(kind, start, cell_count));
        if board.can_place(start) {
            return Ok(board.place(BoardEntity::new(kind, start, end)?));
        }
    }
    Ok(false)
}

/// Place one entity of `kind` on a start cell chosen uniformly among those
/// still free. Returns `false` when none is left.
pub(crate) fn place_on_free_start(
    board: &mut Board,
    rng: &mut GameRng,
    kind: EntityKind,
) -> Result<bool, ConfigError> {
    let cell_count = board.size();
    let Some(starts) = start_range(kind, cell_count) else {
        return Ok(false);
    };
    let free: Vec<u32> = starts.filter(|&cell| board.can_place(cell)).collect();
    let Some(last) = free.len().checked_sub(1) else {
        return Ok(false);
    };

    let start = free[rng.gen_inclusive(0..=last as u32) as usize];
    let end = rng.gen_inclusive(end_range(kind, start, cell_count));
    Ok(board.place(BoardEntity::new(kind, start, end)?))
}

/// Free start cells left for `kind`.
pub(crate) fn free_starts(board: &Board, kind: EntityKind) -> usize {
    start_range(kind, board.size())
        .map(|range| range.filter(|&cell| board.can_place(cell)).count())
        .unwrap_or(0)
}

pub(crate) fn apply(
    board: &mut Board,
    rng: &mut GameRng,
    difficulty: Difficulty,
) -> GameResult<PlacementSummary> {
    let target = board.size() / CELLS_PER_ENTITY;
    let threshold = difficulty.snake_probability();
    let mut summary = PlacementSummary::default();

    for _ in 0..target {
        let kind = if rng.gen_unit() < threshold {
            EntityKind::Snake
        } else {
            EntityKind::Ladder
        };

        if place_one(board, rng, kind, RANDOM_RETRY_BUDGET)? {
            summary.count(kind);
        } else {
            tracing::debug!(%kind, "random placement exhausted its retries; skipping");
            summary.skipped += 1;
        }
    }

    tracing::debug!(
        %difficulty,
        target,
        snakes = summary.snakes,
        ladders = summary.ladders,
        skipped = summary.skipped,
        "random layout placed"
    );
    Ok(summary)
}
