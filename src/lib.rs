//! # snakes-and-ladders
//!
//! A turn-based snakes and ladders engine.
//!
//! ## Design Principles
//!
//! 1. **Pluggable layouts**: boards are populated once by a setup strategy
//!    (standard, random by difficulty, or caller-specified).
//!
//! 2. **Pluggable rules**: move validity, entity resolution and the win
//!    condition live in `RuleSet`, never in the turn loop.
//!
//! 3. **No I/O**: the caller advances the game one turn at a time and
//!    observes it through listeners. Rendering and input stay outside.
//!
//! 4. **Deterministic**: one seeded `GameRng` feeds setup and dice, so a
//!    seed reproduces a whole game.
//!
//! ## Modules
//!
//! - `core`: RNG, dice, players, errors, configuration
//! - `board`: snakes, ladders and the board
//! - `setup`: board setup strategies
//! - `rules`: movement and win rules
//! - `game`: turn loop, events, listeners, factory

pub mod core;
pub mod board;
pub mod setup;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Dice, GameConfig, GameError, GameMode, GameResult, GameRng, Player, PlayerId,
};

pub use crate::board::{Board, BoardEntity, EntityKind};

pub use crate::setup::{BoardSetupStrategy, CustomLayout, Difficulty, PlacementSummary};

pub use crate::rules::RuleSet;

pub use crate::game::{
    EventRecorder, Game, GameEvent, GameFactory, GameListener, GameSnapshot, GameStatus,
    MoveRecord, TracingListener, TurnOutcome, TurnRotation,
};
