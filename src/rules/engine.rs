//! Movement and win rules.
//!
//! Rules are stateless: every decision is a pure function of the current
//! position, the roll and the board.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Rule variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleSet {
    /// Exact landing on the final cell wins; overshooting forfeits the
    /// turn; at most one entity applies per move.
    #[default]
    Standard,
}

impl RuleSet {
    /// Whether a token on `position` may move `roll` cells.
    #[must_use]
    pub fn is_valid_move(self, position: u32, roll: u32, board_size: u32) -> bool {
        match self {
            RuleSet::Standard => position
                .checked_add(roll)
                .is_some_and(|landing| landing <= board_size),
        }
    }

    /// Cell the roll lands on before any entity applies.
    #[must_use]
    pub fn landing(self, position: u32, roll: u32) -> u32 {
        match self {
            RuleSet::Standard => position.saturating_add(roll),
        }
    }

    /// Final cell after the roll, following at most one snake or ladder.
    #[must_use]
    pub fn resolve_position(self, position: u32, roll: u32, board: &Board) -> u32 {
        match self {
            RuleSet::Standard => {
                let landing = self.landing(position, roll);
                board.entity_at(landing).map_or(landing, |entity| entity.end())
            }
        }
    }

    /// Whether `position` wins on a board of `board_size` cells.
    #[must_use]
    pub fn is_win(self, position: u32, board_size: u32) -> bool {
        match self {
            RuleSet::Standard => position == board_size,
        }
    }
}
