//! Listeners receive every event synchronously, in emission order.
//!
//! Any `FnMut(&GameEvent)` closure is a listener:
//!
//! ```
//! use snakes_and_ladders::game::{GameEvent, GameListener};
//!
//! let mut seen = Vec::new();
//! let mut listener = |event: &GameEvent| seen.push(event.to_string());
//! listener.on_event(&GameEvent::GameStarted { player_count: 2 });
//! assert_eq!(seen, vec!["Game initiated with 2 players."]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::event::GameEvent;

/// Receiver of game events.
///
/// Called from inside the turn loop; implementations must return promptly
/// and handle their own failures.
pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// Forwards every event to `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingListener;

impl GameListener for TracingListener {
    fn on_event(&mut self, event: &GameEvent) {
        tracing::info!(target: "snakes_and_ladders::events", player = ?event.player(), "{event}");
    }
}

/// Records events for later inspection.
///
/// Clones share the same log, so one copy can be handed to the game while
/// another is kept for reading.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Textual notices for everything recorded so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl GameListener for EventRecorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
