//! Game construction.
//!
//! Each constructor builds a square board, applies one setup strategy, forks
//! a six-faced die off the same RNG and returns a game with standard rules.

use super::session::Game;
use crate::board::Board;
use crate::core::{Dice, GameConfig, GameResult, GameRng, STANDARD_SIDE};
use crate::rules::RuleSet;
use crate::setup::{BoardSetupStrategy, CustomLayout, Difficulty};

/// Wiring for the supported game modes.
pub struct GameFactory;

impl GameFactory {
    /// 10x10 board, traditional layout.
    pub fn standard(rng: &mut GameRng) -> GameResult<Game> {
        Self::build(STANDARD_SIDE, &BoardSetupStrategy::Standard, rng)
    }

    /// `side x side` board, random layout.
    pub fn random(side: u32, difficulty: Difficulty, rng: &mut GameRng) -> GameResult<Game> {
        Self::build(side, &BoardSetupStrategy::Random(difficulty), rng)
    }

    /// `side x side` board, caller-chosen layout.
    pub fn custom(side: u32, layout: CustomLayout, rng: &mut GameRng) -> GameResult<Game> {
        Self::build(side, &BoardSetupStrategy::CustomCount(layout), rng)
    }

    /// `side x side` board set up by `strategy`. No players yet.
    pub fn build(side: u32, strategy: &BoardSetupStrategy, rng: &mut GameRng) -> GameResult<Game> {
        let mut board = Board::square(side)?;
        strategy.apply(&mut board, rng)?;
        let dice = Dice::standard(rng.fork());
        Ok(Game::new(board, dice, RuleSet::Standard))
    }

    /// Build a game from configuration and seat its roster.
    ///
    /// The roster is validated before any board is built.
    pub fn from_config(config: &GameConfig) -> GameResult<Game> {
        config.validate()?;
        let mut rng = config.rng();
        tracing::debug!(seed = rng.seed(), mode = ?config.mode, "building game");

        let mut game = Self::build(config.mode.side(), &config.mode.strategy(), &mut rng)?;
        for name in &config.players {
            game.add_player(name.as_str())?;
        }
        Ok(game)
    }
}
