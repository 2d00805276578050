//! Board model: snakes, ladders and the cells they sit on.
//!
//! Only start cells are indexed. Lookups by end cell find nothing unless
//! another entity happens to start there.

pub mod entity;
pub mod grid;

pub use entity::{BoardEntity, EntityKind};
pub use grid::Board;
