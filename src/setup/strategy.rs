//! Strategy dispatch and placement bookkeeping.

use serde::{Deserialize, Serialize};

use super::custom::{self, CustomLayout};
use super::random::{self, Difficulty};
use super::standard;
use crate::board::{Board, BoardEntity, EntityKind};
use crate::core::{GameResult, GameRng};

/// How a board gets its entities. Applied exactly once per board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardSetupStrategy {
    /// The traditional 10x10 layout.
    Standard,
    /// About one entity per ten cells, snake share set by difficulty.
    Random(Difficulty),
    /// Caller-chosen counts or cells.
    CustomCount(CustomLayout),
}

impl BoardSetupStrategy {
    /// Populate `board`.
    ///
    /// Random layouts may under-fill silently; the summary reports what was
    /// skipped. Every other failure is an error and the board must be
    /// discarded.
    pub fn apply(&self, board: &mut Board, rng: &mut GameRng) -> GameResult<PlacementSummary> {
        let summary = match self {
            BoardSetupStrategy::Standard => standard::apply(board)?,
            BoardSetupStrategy::Random(difficulty) => random::apply(board, rng, *difficulty)?,
            BoardSetupStrategy::CustomCount(layout) => custom::apply(board, rng, layout)?,
        };

        tracing::debug!(
            strategy = self.name(),
            cells = board.size(),
            snakes = summary.snakes,
            ladders = summary.ladders,
            skipped = summary.skipped,
            "board set up"
        );
        Ok(summary)
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            BoardSetupStrategy::Standard => "standard",
            BoardSetupStrategy::Random(_) => "random",
            BoardSetupStrategy::CustomCount(_) => "custom",
        }
    }
}

/// What a strategy placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSummary {
    pub snakes: u32,
    pub ladders: u32,
    /// Entities dropped because no free start cell was found.
    pub skipped: u32,
}

impl PlacementSummary {
    /// Total entities placed.
    #[must_use]
    pub const fn placed(&self) -> u32 {
        self.snakes + self.ladders
    }

    pub(crate) fn count(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Snake => self.snakes += 1,
            EntityKind::Ladder => self.ladders += 1,
        }
    }

    /// Place `entity` and tally the outcome. Returns whether it was placed.
    pub(crate) fn record(&mut self, board: &mut Board, entity: BoardEntity) -> bool {
        let placed = board.place(entity);
        if placed {
            self.count(entity.kind());
        } else {
            self.skipped += 1;
        }
        placed
    }
}
