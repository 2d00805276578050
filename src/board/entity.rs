//! Snakes and ladders.
//!
//! A `BoardEntity` maps one cell to another. Direction is checked at
//! construction: snakes go down, ladders go up. Entities are immutable.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Which way an entity moves a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Moves a token backward.
    Snake,
    /// Moves a token forward.
    Ladder,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Snake => f.write_str("snake"),
            EntityKind::Ladder => f.write_str("ladder"),
        }
    }
}

/// A snake or ladder between two 1-based cells.
///
/// ```
/// use snakes_and_ladders::board::{BoardEntity, EntityKind};
///
/// let ladder = BoardEntity::ladder(2, 38).unwrap();
/// assert_eq!(ladder.kind(), EntityKind::Ladder);
/// assert_eq!(ladder.end(), 38);
///
/// assert!(BoardEntity::snake(10, 40).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardEntity {
    kind: EntityKind,
    start: u32,
    end: u32,
}

impl BoardEntity {
    /// Create an entity, rejecting a pair that points the wrong way.
    pub fn new(kind: EntityKind, start: u32, end: u32) -> Result<Self, ConfigError> {
        match kind {
            EntityKind::Snake if end >= start => Err(ConfigError::InvalidSnake { start, end }),
            EntityKind::Ladder if end <= start => Err(ConfigError::InvalidLadder { start, end }),
            _ => Ok(Self { kind, start, end }),
        }
    }

    /// A snake from `start` down to `end`.
    pub fn snake(start: u32, end: u32) -> Result<Self, ConfigError> {
        Self::new(EntityKind::Snake, start, end)
    }

    /// A ladder from `start` up to `end`.
    pub fn ladder(start: u32, end: u32) -> Result<Self, ConfigError> {
        Self::new(EntityKind::Ladder, start, end)
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Cell that triggers the entity.
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Cell the token ends up on.
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    #[must_use]
    pub fn is_snake(&self) -> bool {
        self.kind == EntityKind::Snake
    }

    #[must_use]
    pub fn is_ladder(&self) -> bool {
        self.kind == EntityKind::Ladder
    }
}

impl std::fmt::Display for BoardEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.start, self.end)
    }
}
