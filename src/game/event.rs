//! Game events broadcast to listeners.
//!
//! Events are structured; `Display` gives the textual notice a console
//! notifier would print.

use serde::{Deserialize, Serialize};

use crate::board::EntityKind;
use crate::core::PlayerId;

/// One observable occurrence in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The game moved to in-progress.
    GameStarted { player_count: usize },

    /// The roll would overshoot the final cell; the player stays put.
    TurnForfeited {
        player: PlayerId,
        name: String,
        roll: u32,
        position: u32,
        final_cell: u32,
    },

    /// The landing cell held a snake or ladder.
    EntityEncountered {
        player: PlayerId,
        name: String,
        kind: EntityKind,
        landing: u32,
        destination: u32,
    },

    /// A valid move finished.
    MoveCompleted {
        player: PlayerId,
        name: String,
        roll: u32,
        position: u32,
    },

    /// A player reached the final cell.
    GameWon {
        player: PlayerId,
        name: String,
        win_count: u32,
    },
}

impl GameEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::GameStarted { .. } => None,
            GameEvent::TurnForfeited { player, .. }
            | GameEvent::EntityEncountered { player, .. }
            | GameEvent::MoveCompleted { player, .. }
            | GameEvent::GameWon { player, .. } => Some(*player),
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { player_count } => {
                write!(f, "Game initiated with {player_count} players.")
            }
            GameEvent::TurnForfeited {
                name,
                roll,
                position,
                final_cell,
                ..
            } => write!(
                f,
                "{name} rolled {roll} from {position}: exact roll required to reach cell {final_cell}. Turn forfeited."
            ),
            GameEvent::EntityEncountered {
                name,
                kind,
                landing,
                destination,
                ..
            } => {
                let direction = match kind {
                    EntityKind::Snake => "down",
                    EntityKind::Ladder => "up",
                };
                write!(
                    f,
                    "{name} encountered a {kind} at {landing} and moved {direction} to {destination}"
                )
            }
            GameEvent::MoveCompleted { name, position, .. } => {
                write!(f, "{name} completed a move. Current position: {position}")
            }
            GameEvent::GameWon { name, .. } => write!(f, "Game concluded. Winner: {name}"),
        }
    }
}
