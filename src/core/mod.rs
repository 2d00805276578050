//! Core engine types: RNG, dice, players, errors, configuration.
//!
//! These are the leaves every other module builds on.

pub mod rng;
pub mod dice;
pub mod player;
pub mod error;
pub mod config;

pub use rng::GameRng;
pub use dice::{Dice, STANDARD_FACES};
pub use player::{Player, PlayerId};
pub use error::{ConfigError, GameError, GameResult};
pub use config::{GameConfig, GameMode, MAX_PLAYERS, MIN_PLAYERS, STANDARD_SIDE};
