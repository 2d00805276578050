//! Error types.
//!
//! `ConfigError` covers caller mistakes that abort construction or game
//! start. `GameError` wraps it and adds the runtime failures of setup and
//! the turn loop. Overshooting rolls are not errors; they surface as a
//! forfeited turn.

use thiserror::Error;

use crate::board::EntityKind;

/// Invalid configuration supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A snake must end below where it starts.
    #[error("invalid snake {start} -> {end}: end must be less than start")]
    InvalidSnake { start: u32, end: u32 },

    /// A ladder must end above where it starts.
    #[error("invalid ladder {start} -> {end}: end must be greater than start")]
    InvalidLadder { start: u32, end: u32 },

    /// An entity endpoint lies outside `1..=cell_count`.
    #[error("cell {cell} is outside the board (1..={cell_count})")]
    CellOutOfRange { cell: u32, cell_count: u32 },

    /// A snake on the final cell makes the game unwinnable.
    #[error("snake {start} -> {end} starts on the final cell")]
    SnakeOnFinalCell { start: u32, end: u32 },

    /// Boards need at least one cell.
    #[error("board must have at least one cell")]
    EmptyBoard,

    /// `side * side` does not fit in a `u32` cell count.
    #[error("a {side}x{side} board has too many cells")]
    BoardTooLarge { side: u32 },

    /// The standard layout only exists for a 10x10 board.
    #[error("standard layout requires a 100-cell board, got {cell_count}")]
    StandardBoardSize { cell_count: u32 },

    /// A game needs at least two players.
    #[error("at least 2 players are required, got {count}")]
    NotEnoughPlayers { count: usize },

    /// Player ids are `u8`.
    #[error("at most 255 players are supported, got {count}")]
    TooManyPlayers { count: usize },

    /// Dice need at least one face.
    #[error("dice must have at least one face, got {faces}")]
    InvalidFaceCount { faces: u32 },
}

/// Errors raised by setup and the turn loop.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Bounded random placement ran out of attempts.
    #[error("retry budget exhausted placing {kind}s: placed {placed} of {requested}")]
    PlacementExhausted {
        kind: EntityKind,
        placed: u32,
        requested: u32,
    },

    /// An externally supplied roll outside `1..=faces`.
    #[error("roll {roll} is not possible on a {faces}-faced die")]
    InvalidRoll { roll: u32, faces: u32 },

    /// Turns can only be taken once the game has started.
    #[error("game has not started")]
    NotStarted,

    /// The game already has a winner.
    #[error("game is over")]
    GameOver,

    /// Players can only join before the game starts.
    #[error("game has already started")]
    AlreadyStarted,
}

/// Result alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;
