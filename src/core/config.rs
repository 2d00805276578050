//! Game configuration.
//!
//! The outer CLI/config layer produces a `GameConfig`, either through the
//! builder methods or by deserializing it from any serde format:
//!
//! ```
//! use snakes_and_ladders::core::{GameConfig, GameMode};
//! use snakes_and_ladders::setup::Difficulty;
//!
//! let config = GameConfig::new(GameMode::Random { side: 8, difficulty: Difficulty::Hard })
//!     .with_player("Ada")
//!     .with_player("Bo")
//!     .with_seed(42);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.mode.cell_count(), Some(64));
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;
use crate::setup::{BoardSetupStrategy, CustomLayout, Difficulty};

/// Side length of the standard board.
pub const STANDARD_SIDE: u32 = 10;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can hold (`PlayerId` is a `u8`).
pub const MAX_PLAYERS: usize = 255;

/// How the board is laid out.
///
/// `side` is the side length of a square board; the board has
/// `side * side` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GameMode {
    /// 10x10 board with the traditional layout.
    Standard,
    /// Randomly generated layout, biased by difficulty.
    Random { side: u32, difficulty: Difficulty },
    /// Caller-chosen counts or positions.
    Custom { side: u32, layout: CustomLayout },
}

impl GameMode {
    /// Side length of the board this mode builds.
    #[must_use]
    pub const fn side(&self) -> u32 {
        match self {
            GameMode::Standard => STANDARD_SIDE,
            GameMode::Random { side, .. } | GameMode::Custom { side, .. } => *side,
        }
    }

    /// Total cells on the board this mode builds, `None` if it overflows.
    #[must_use]
    pub const fn cell_count(&self) -> Option<u32> {
        self.side().checked_mul(self.side())
    }

    /// The setup strategy this mode applies.
    #[must_use]
    pub fn strategy(&self) -> BoardSetupStrategy {
        match self {
            GameMode::Standard => BoardSetupStrategy::Standard,
            GameMode::Random { difficulty, .. } => BoardSetupStrategy::Random(*difficulty),
            GameMode::Custom { layout, .. } => BoardSetupStrategy::CustomCount(layout.clone()),
        }
    }
}

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board layout.
    #[serde(flatten)]
    pub mode: GameMode,

    /// Player display names in turn order.
    #[serde(default)]
    pub players: Vec<String>,

    /// RNG seed. `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with no players and no fixed seed.
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            players: Vec::new(),
            seed: None,
        }
    }

    /// Append a player to the roster.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    /// Append several players to the roster.
    #[must_use]
    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the roster before anything is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.players.len();
        if count < MIN_PLAYERS {
            return Err(ConfigError::NotEnoughPlayers { count });
        }
        if count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers { count });
        }
        match self.mode.cell_count() {
            None => Err(ConfigError::BoardTooLarge {
                side: self.mode.side(),
            }),
            Some(0) => Err(ConfigError::EmptyBoard),
            Some(_) => Ok(()),
        }
    }

    /// The RNG for this configuration, seeded once.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}
