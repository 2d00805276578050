//! Caller-specified layouts: exact counts placed at random, or exact cells.

use serde::{Deserialize, Serialize};

use super::random::{free_starts, place_on_free_start, place_one};
use super::strategy::PlacementSummary;
use crate::board::{Board, BoardEntity, EntityKind};
use crate::core::{ConfigError, GameError, GameResult, GameRng};

/// Random draws per entity before a custom count falls back to choosing
/// among the start cells still free.
pub const CUSTOM_RETRY_BUDGET: u32 = 1000;

/// A custom layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "placement", rename_all = "snake_case")]
pub enum CustomLayout {
    /// Place exactly this many of each, at random cells.
    Counts { snakes: u32, ladders: u32 },
    /// Place entities at these `(start, end)` cells.
    ///
    /// A pair whose start is already taken is skipped. A snake may not
    /// start on the final cell.
    Explicit {
        #[serde(default)]
        snakes: Vec<(u32, u32)>,
        #[serde(default)]
        ladders: Vec<(u32, u32)>,
    },
}

impl CustomLayout {
    /// Random placement of exact counts.
    #[must_use]
    pub const fn counts(snakes: u32, ladders: u32) -> Self {
        CustomLayout::Counts { snakes, ladders }
    }

    /// Explicit placement.
    #[must_use]
    pub fn explicit(snakes: Vec<(u32, u32)>, ladders: Vec<(u32, u32)>) -> Self {
        CustomLayout::Explicit { snakes, ladders }
    }

    #[must_use]
    pub fn uses_random_placement(&self) -> bool {
        matches!(self, CustomLayout::Counts { .. })
    }

    /// Snakes this layout asks for.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        match self {
            CustomLayout::Counts { snakes, .. } => *snakes as usize,
            CustomLayout::Explicit { snakes, .. } => snakes.len(),
        }
    }

    /// Ladders this layout asks for.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        match self {
            CustomLayout::Counts { ladders, .. } => *ladders as usize,
            CustomLayout::Explicit { ladders, .. } => ladders.len(),
        }
    }
}

pub(crate) fn apply(
    board: &mut Board,
    rng: &mut GameRng,
    layout: &CustomLayout,
) -> GameResult<PlacementSummary> {
    match layout {
        CustomLayout::Counts { snakes, ladders } => {
            let mut summary = PlacementSummary::default();
            place_counted(board, rng, EntityKind::Snake, *snakes, &mut summary)?;
            place_counted(board, rng, EntityKind::Ladder, *ladders, &mut summary)?;
            Ok(summary)
        }
        CustomLayout::Explicit { snakes, ladders } => place_explicit(board, snakes, ladders),
    }
}

fn place_counted(
    board: &mut Board,
    rng: &mut GameRng,
    kind: EntityKind,
    requested: u32,
    summary: &mut PlacementSummary,
) -> GameResult<()> {
    let exhausted = |placed| GameError::PlacementExhausted {
        kind,
        placed,
        requested,
    };

    if free_starts(board, kind) < requested as usize {
        return Err(exhausted(0));
    }

    for placed in 0..requested {
        let done = place_one(board, rng, kind, CUSTOM_RETRY_BUDGET)?
            || place_on_free_start(board, rng, kind)?;
        if !done {
            return Err(exhausted(placed));
        }
        summary.count(kind);
    }
    Ok(())
}

fn place_explicit(
    board: &mut Board,
    snakes: &[(u32, u32)],
    ladders: &[(u32, u32)],
) -> GameResult<PlacementSummary> {
    let pairs = snakes
        .iter()
        .map(|&(start, end)| BoardEntity::snake(start, end))
        .chain(
            ladders
                .iter()
                .map(|&(start, end)| BoardEntity::ladder(start, end)),
        );

    let mut entities = Vec::with_capacity(snakes.len() + ladders.len());
    for entity in pairs {
        let entity = entity?;
        board.check_in_bounds(&entity)?;
        if entity.is_snake() && entity.start() == board.size() {
            return Err(ConfigError::SnakeOnFinalCell {
                start: entity.start(),
                end: entity.end(),
            }
            .into());
        }
        entities.push(entity);
    }

    let mut summary = PlacementSummary::default();
    for entity in entities {
        if !summary.record(board, entity) {
            tracing::debug!(%entity, "start cell already taken; skipping");
        }
    }
    Ok(summary)
}
