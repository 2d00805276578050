//! Rule set for move validity, entity resolution and winning.
//!
//! The game calls into `RuleSet` for every turn and never interprets
//! snakes, ladders or the final cell directly.

pub mod engine;

pub use engine::RuleSet;
