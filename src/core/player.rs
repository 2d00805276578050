//! Player identification and per-player progress.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 255 players, assigned in
//! join order.
//!
//! ## Player
//!
//! A token on the board: display name, current cell and win tally. Only the
//! game mutates it.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Player indices are 0-based: the first player to join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player token.
///
/// Position 0 is the off-board start; cell `n` of an `n`-cell board wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    position: u32,
    win_count: u32,
}

impl Player {
    /// Create a player at the start square with no wins.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: 0,
            win_count: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current cell, 0 when still off the board.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Games won with this token.
    #[must_use]
    pub const fn win_count(&self) -> u32 {
        self.win_count
    }

    pub(crate) fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    pub(crate) fn record_win(&mut self) {
        self.win_count += 1;
    }
}
