//! Turn loop, events, listeners and game construction.
//!
//! ```
//! use snakes_and_ladders::core::GameRng;
//! use snakes_and_ladders::game::{EventRecorder, GameFactory, GameStatus};
//!
//! let mut game = GameFactory::standard(&mut GameRng::new(42)).unwrap();
//! game.add_player("Ada").unwrap();
//! game.add_player("Bo").unwrap();
//!
//! let recorder = EventRecorder::new();
//! game.add_listener(recorder.clone());
//!
//! let winner = game.play().unwrap();
//! assert_eq!(game.status(), GameStatus::Over { winner });
//! assert!(recorder.messages().last().unwrap().starts_with("Game concluded. Winner:"));
//! ```

pub mod event;
pub mod listener;
pub mod rotation;
pub mod session;
pub mod factory;

pub use event::GameEvent;
pub use listener::{EventRecorder, GameListener, TracingListener};
pub use rotation::TurnRotation;
pub use session::{Game, GameSnapshot, GameStatus, MoveRecord, TurnOutcome};
pub use factory::GameFactory;
