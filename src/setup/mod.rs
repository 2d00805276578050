//! Board setup strategies.
//!
//! A strategy populates an empty board exactly once, before play:
//!
//! - `Standard`: the traditional 10 snakes and 11 ladders on a 100-cell board
//! - `Random(difficulty)`: roughly one entity per ten cells, bounded retries,
//!   silent under-fill allowed
//! - `CustomCount(layout)`: exact counts at random cells, or exact cells
//!
//! ```
//! use snakes_and_ladders::board::Board;
//! use snakes_and_ladders::core::GameRng;
//! use snakes_and_ladders::setup::BoardSetupStrategy;
//!
//! let mut board = Board::square(10).unwrap();
//! BoardSetupStrategy::Standard.apply(&mut board, &mut GameRng::new(0)).unwrap();
//!
//! assert_eq!(board.snake_count(), 10);
//! assert_eq!(board.ladder_count(), 11);
//! ```

pub mod strategy;
pub mod standard;
pub mod random;
pub mod custom;

pub use strategy::{BoardSetupStrategy, PlacementSummary};
pub use standard::{STANDARD_CELLS, STANDARD_LADDERS, STANDARD_SNAKES};
pub use random::{Difficulty, CELLS_PER_ENTITY, RANDOM_RETRY_BUDGET};
pub use custom::{CustomLayout, CUSTOM_RETRY_BUDGET};
