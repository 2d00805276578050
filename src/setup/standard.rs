//! The traditional 10x10 layout.

use super::strategy::PlacementSummary;
use crate::board::{Board, BoardEntity};
use crate::core::{ConfigError, GameResult};

/// Cells on the only board the standard layout fits.
pub const STANDARD_CELLS: u32 = 100;

/// Standard snakes as `(start, end)`.
pub const STANDARD_SNAKES: [(u32, u32); 10] = [
    (99, 54),
    (95, 75),
    (92, 88),
    (89, 68),
    (74, 53),
    (64, 60),
    (62, 19),
    (49, 11),
    (46, 25),
    (16, 6),
];

/// Standard ladders as `(start, end)`.
pub const STANDARD_LADDERS: [(u32, u32); 11] = [
    (2, 38),
    (7, 14),
    (8, 31),
    (15, 26),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (78, 98),
    (87, 94),
];

pub(crate) fn apply(board: &mut Board) -> GameResult<PlacementSummary> {
    if board.size() != STANDARD_CELLS {
        return Err(ConfigError::StandardBoardSize {
            cell_count: board.size(),
        }
        .into());
    }

    let mut summary = PlacementSummary::default();
    for &(start, end) in &STANDARD_SNAKES {
        summary.record(board, BoardEntity::snake(start, end)?);
    }
    for &(start, end) in &STANDARD_LADDERS {
        summary.record(board, BoardEntity::ladder(start, end)?);
    }
    Ok(summary)
}
