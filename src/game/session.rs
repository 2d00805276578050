//! The turn loop.
//!
//! ```text
//! NotStarted --start()--> InProgress --winning move--> Over
//!      ^                                                 |
//!      +-------------------- rematch() ------------------+
//! ```
//!
//! Each turn the front player of the rotation rolls. An overshooting roll
//! forfeits the turn. Otherwise the token moves, at most one snake or ladder
//! applies, and either the player wins or goes to the back of the rotation.
//! Events reach every listener before the next state change.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use super::listener::GameListener;
use super::rotation::TurnRotation;
use crate::board::{Board, BoardEntity};
use crate::core::{
    ConfigError, Dice, GameError, GameResult, Player, PlayerId, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::rules::RuleSet;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Over { winner: PlayerId },
}

/// A valid move, as resolved by the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub roll: u32,
    pub from: u32,
    /// Cell reached before any entity applied.
    pub landing: u32,
    pub to: u32,
    /// Snake or ladder on the landing cell.
    pub entity: Option<BoardEntity>,
}

/// Result of one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Overshooting roll; position unchanged.
    Forfeited {
        player: PlayerId,
        roll: u32,
        position: u32,
    },
    /// Moved without winning.
    Moved(MoveRecord),
    /// Moved onto the final cell.
    Won(MoveRecord),
}

impl TurnOutcome {
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        match self {
            TurnOutcome::Forfeited { player, .. } => *player,
            TurnOutcome::Moved(record) | TurnOutcome::Won(record) => record.player,
        }
    }

    #[must_use]
    pub const fn roll(&self) -> u32 {
        match self {
            TurnOutcome::Forfeited { roll, .. } => *roll,
            TurnOutcome::Moved(record) | TurnOutcome::Won(record) => record.roll,
        }
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, TurnOutcome::Won(_))
    }
}

/// Point-in-time copy of the mutable parts of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub players: Vector<Player>,
    pub rotation: TurnRotation,
    pub turns_taken: u64,
}

/// One game: board, dice, rules, players and listeners.
pub struct Game {
    board: Board,
    dice: Dice,
    rules: RuleSet,
    /// Indexed by `PlayerId::index()`.
    players: Vector<Player>,
    rotation: TurnRotation,
    listeners: Vec<Box<dyn GameListener>>,
    status: GameStatus,
    turns_taken: u64,
}

impl Game {
    /// Create a game with no players. The board must already be set up.
    pub fn new(board: Board, dice: Dice, rules: RuleSet) -> Self {
        Self {
            board,
            dice,
            rules,
            players: Vector::new(),
            rotation: TurnRotation::new(),
            listeners: Vec::new(),
            status: GameStatus::NotStarted,
            turns_taken: 0,
        }
    }

    /// Add a player at the back of the rotation.
    pub fn add_player(&mut self, name: impl Into<String>) -> GameResult<PlayerId> {
        if self.status != GameStatus::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        let count = self.players.len();
        if count >= MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers { count: count + 1 }.into());
        }

        let id = PlayerId::new(count as u8);
        self.players.push_back(Player::new(id, name));
        self.rotation.push(id);
        Ok(id)
    }

    /// Register a listener. Listeners are called in registration order.
    pub fn add_listener(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Move to `InProgress`. Needs at least two players.
    pub fn start(&mut self) -> GameResult<()> {
        match self.status {
            GameStatus::NotStarted => {}
            GameStatus::InProgress => return Err(GameError::AlreadyStarted),
            GameStatus::Over { .. } => return Err(GameError::GameOver),
        }

        let player_count = self.players.len();
        if player_count < MIN_PLAYERS {
            return Err(ConfigError::NotEnoughPlayers {
                count: player_count,
            }
            .into());
        }

        self.status = GameStatus::InProgress;
        tracing::info!(
            players = player_count,
            cells = self.board.size(),
            snakes = self.board.snake_count(),
            ladders = self.board.ladder_count(),
            "game started"
        );
        self.emit(GameEvent::GameStarted { player_count });
        Ok(())
    }

    /// Roll the game's dice for the front player and resolve the turn.
    pub fn take_turn(&mut self) -> GameResult<TurnOutcome> {
        self.ensure_in_progress()?;
        let roll = self.dice.roll();
        self.resolve_turn(roll)
    }

    /// Resolve the front player's turn with an externally supplied roll.
    pub fn take_turn_with(&mut self, roll: u32) -> GameResult<TurnOutcome> {
        self.ensure_in_progress()?;
        if !self.dice.can_show(roll) {
            return Err(GameError::InvalidRoll {
                roll,
                faces: self.dice.faces(),
            });
        }
        self.resolve_turn(roll)
    }

    /// Start if needed, then take turns until someone wins.
    pub fn play(&mut self) -> GameResult<PlayerId> {
        if self.status == GameStatus::NotStarted {
            self.start()?;
        }
        loop {
            if let TurnOutcome::Won(record) = self.take_turn()? {
                return Ok(record.player);
            }
        }
    }

    /// Reset a finished game for another round on the same board.
    ///
    /// Positions return to 0, win counts are kept, and the rotation is left
    /// as it stood, so the previous winner leads off.
    pub fn rematch(&mut self) -> GameResult<()> {
        match self.status {
            GameStatus::Over { .. } => {}
            GameStatus::NotStarted => return Err(GameError::NotStarted),
            GameStatus::InProgress => return Err(GameError::AlreadyStarted),
        }

        for player in self.players.iter_mut() {
            player.set_position(0);
        }
        self.status = GameStatus::NotStarted;
        self.turns_taken = 0;
        tracing::debug!("game reset for rematch");
        Ok(())
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    #[must_use]
    pub fn dice_faces(&self) -> u32 {
        self.dice.faces()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Over { winner } => self.player(winner),
            _ => None,
        }
    }

    /// Players in join order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Player whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.rotation.front().and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn rotation(&self) -> &TurnRotation {
        &self.rotation
    }

    /// Turns resolved since the game (or rematch) started.
    #[must_use]
    pub fn turns_taken(&self) -> u64 {
        self.turns_taken
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            players: self.players.clone(),
            rotation: self.rotation.clone(),
            turns_taken: self.turns_taken,
        }
    }

    fn ensure_in_progress(&self) -> GameResult<()> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::NotStarted => Err(GameError::NotStarted),
            GameStatus::Over { .. } => Err(GameError::GameOver),
        }
    }

    fn resolve_turn(&mut self, roll: u32) -> GameResult<TurnOutcome> {
        let id = self.rotation.front().ok_or(GameError::NotStarted)?;
        let (name, from) = match self.player(id) {
            Some(player) => (player.name().to_owned(), player.position()),
            None => return Err(GameError::NotStarted),
        };
        let final_cell = self.board.size();
        self.turns_taken += 1;

        if !self.rules.is_valid_move(from, roll, final_cell) {
            tracing::debug!(player = %id, roll, position = from, "turn forfeited");
            self.emit(GameEvent::TurnForfeited {
                player: id,
                name,
                roll,
                position: from,
                final_cell,
            });
            self.rotation.rotate();
            return Ok(TurnOutcome::Forfeited {
                player: id,
                roll,
                position: from,
            });
        }

        let landing = self.rules.landing(from, roll);
        let to = self.rules.resolve_position(from, roll, &self.board);
        let entity = self.board.entity_at(landing).copied();

        if let Some(entity) = entity {
            self.emit(GameEvent::EntityEncountered {
                player: id,
                name: name.clone(),
                kind: entity.kind(),
                landing,
                destination: to,
            });
        }
        self.emit(GameEvent::MoveCompleted {
            player: id,
            name: name.clone(),
            roll,
            position: to,
        });

        let record = MoveRecord {
            player: id,
            roll,
            from,
            landing,
            to,
            entity,
        };
        tracing::debug!(player = %id, roll, from, to, "move resolved");

        if self.rules.is_win(to, final_cell) {
            let win_count = self.update_player(id, |player| {
                player.set_position(to);
                player.record_win();
                player.win_count()
            });
            self.status = GameStatus::Over { winner: id };
            tracing::info!(player = %id, %name, turns = self.turns_taken, "game won");
            self.emit(GameEvent::GameWon {
                player: id,
                name,
                win_count,
            });
            return Ok(TurnOutcome::Won(record));
        }

        self.update_player(id, |player| player.set_position(to));
        self.rotation.rotate();
        Ok(TurnOutcome::Moved(record))
    }

    fn update_player<T: Default>(&mut self, id: PlayerId, f: impl FnOnce(&mut Player) -> T) -> T {
        self.players.get_mut(id.index()).map(f).unwrap_or_default()
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("dice", &self.dice)
            .field("rules", &self.rules)
            .field("players", &self.players)
            .field("rotation", &self.rotation)
            .field("listeners", &self.listeners.len())
            .field("status", &self.status)
            .field("turns_taken", &self.turns_taken)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::game::EventRecorder;
    use crate::setup::BoardSetupStrategy;

    fn standard_game(players: &[&str]) -> Game {
        let mut rng = GameRng::new(42);
        let mut board = Board::square(10).unwrap();
        BoardSetupStrategy::Standard.apply(&mut board, &mut rng).unwrap();
        let mut game = Game::new(board, Dice::standard(rng.fork()), RuleSet::Standard);
        for name in players {
            game.add_player(*name).unwrap();
        }
        game
    }

    fn walk_to(game: &mut Game, rolls: &[u32]) {
        for &roll in rolls {
            game.take_turn_with(roll).unwrap();
        }
    }

    #[test]
    fn test_start_requires_two_players() {
        let mut game = standard_game(&["Ada"]);
        assert_eq!(
            game.start(),
            Err(GameError::Config(ConfigError::NotEnoughPlayers { count: 1 }))
        );
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.take_turn(), Err(GameError::NotStarted));
    }

    #[test]
    fn test_start_twice_fails() {
        let mut game = standard_game(&["Ada", "Bo"]);
        game.start().unwrap();
        assert_eq!(game.start(), Err(GameError::AlreadyStarted));
        assert_eq!(game.add_player("Cy"), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_ladder_on_first_roll() {
        let mut game = standard_game(&["Ada", "Bo"]);
        game.start().unwrap();

        // Ada rolls 1 to cell 1, Bo rolls 1 to cell 1, Ada rolls 1 onto the 2 -> 38 ladder.
        walk_to(&mut game, &[1, 1]);
        let outcome = game.take_turn_with(1).unwrap();

        let TurnOutcome::Moved(record) = outcome else {
            panic!("expected a move, got {outcome:?}");
        };
        assert_eq!(record.landing, 2);
        assert_eq!(record.to, 38);
        assert_eq!(record.entity, Some(BoardEntity::ladder(2, 38).unwrap()));
        assert_eq!(game.player(PlayerId::new(0)).unwrap().position(), 38);
    }

    #[test]
    fn test_out_of_range_roll_rejected() {
        let mut game = standard_game(&["Ada", "Bo"]);
        game.start().unwrap();

        assert_eq!(
            game.take_turn_with(7),
            Err(GameError::InvalidRoll { roll: 7, faces: 6 })
        );
        assert_eq!(game.take_turn_with(0), Err(GameError::InvalidRoll { roll: 0, faces: 6 }));
        assert_eq!(game.turns_taken(), 0);
    }

    #[test]
    fn test_events_in_order() {
        let mut game = standard_game(&["Ada", "Bo"]);
        let recorder = EventRecorder::new();
        game.add_listener(recorder.clone());
        game.start().unwrap();

        // Ada: 0 -> 2 via ladder to 38.
        game.take_turn_with(2).unwrap();

        assert_eq!(
            recorder.messages(),
            vec![
                "Game initiated with 2 players.",
                "Ada encountered a ladder at 2 and moved up to 38",
                "Ada completed a move. Current position: 38",
            ]
        );
    }

    #[test]
    fn test_closure_listener_receives_move_positions() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut game = standard_game(&["Ada", "Bo"]);
        let positions = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&positions);
        game.add_listener(move |event: &GameEvent| {
            if let GameEvent::MoveCompleted { position, .. } = event {
                seen.borrow_mut().push(*position);
            }
        });
        game.start().unwrap();

        let before = game.snapshot();
        game.take_turn_with(3).unwrap(); // Ada 0 -> 3
        game.take_turn_with(2).unwrap(); // Bo 0 -> 2 -> 38

        assert_eq!(before.players[0].position(), 0);
        assert_eq!(*positions.borrow(), vec![3, 38]);
        assert_eq!(game.player(PlayerId::new(0)).unwrap().position(), 3);
        assert_eq!(game.player(PlayerId::new(1)).unwrap().position(), 38);
    }

    #[test]
    fn test_play_runs_to_completion() {
        let mut game = standard_game(&["Ada", "Bo", "Cy"]);
        let winner = game.play().unwrap();

        assert!(game.is_over());
        let winner = game.player(winner).unwrap();
        assert_eq!(winner.position(), 100);
        assert_eq!(winner.win_count(), 1);
        assert_eq!(game.take_turn(), Err(GameError::GameOver));
    }

    #[test]
    fn test_rematch_keeps_wins() {
        let mut game = standard_game(&["Ada", "Bo"]);
        assert_eq!(game.rematch(), Err(GameError::NotStarted));

        let winner = game.play().unwrap();
        game.rematch().unwrap();

        assert_eq!(game.status(), GameStatus::NotStarted);
        assert!(game.players().all(|p| p.position() == 0));
        assert_eq!(game.player(winner).unwrap().win_count(), 1);
        assert_eq!(game.current_player().map(Player::id), Some(winner));

        game.play().unwrap();
        let total_wins: u32 = game.players().map(Player::win_count).sum();
        assert_eq!(total_wins, 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut game = standard_game(&["Ada", "Bo"]);
        game.start().unwrap();
        let before = game.snapshot();

        game.take_turn_with(5).unwrap();

        assert_eq!(before.turns_taken, 0);
        assert_eq!(before.players[0].position(), 0);
        assert_eq!(game.snapshot().players[0].position(), 5);
    }
}
