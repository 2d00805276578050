//! FIFO turn order.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Rotating queue of players; the front takes the next turn.
///
/// Every player appears exactly once. Uses a persistent vector so game
/// snapshots clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRotation {
    order: Vector<PlayerId>,
}

impl TurnRotation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player at the back. Returns `false` if already present.
    pub fn push(&mut self, player: PlayerId) -> bool {
        if self.contains(player) {
            return false;
        }
        self.order.push_back(player);
        true
    }

    /// Whose turn is next.
    #[must_use]
    pub fn front(&self) -> Option<PlayerId> {
        self.order.front().copied()
    }

    /// Move the front player to the back and return them.
    pub fn rotate(&mut self) -> Option<PlayerId> {
        let player = self.order.pop_front()?;
        self.order.push_back(player);
        Some(player)
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.order.contains(&player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Players from next-up to last.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.order.iter().copied()
    }
}
