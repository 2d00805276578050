//! The board: a cell count and the entities keyed by start cell.

use rustc_hash::FxHashMap;

use super::entity::{BoardEntity, EntityKind};
use crate::core::ConfigError;

/// Fixed-size linear board.
///
/// At most one entity starts on any cell. An entity's end cell may be
/// another entity's start; that second entity is not applied in the same
/// move. A board is populated once by a setup strategy and read-only during
/// play.
#[derive(Clone, Debug)]
pub struct Board {
    cell_count: u32,
    entities: FxHashMap<u32, BoardEntity>,
}

impl Board {
    /// Create an empty board with `cell_count` cells.
    pub fn new(cell_count: u32) -> Result<Self, ConfigError> {
        if cell_count == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        Ok(Self {
            cell_count,
            entities: FxHashMap::default(),
        })
    }

    /// Create an empty `side x side` board.
    pub fn square(side: u32) -> Result<Self, ConfigError> {
        let cells = side
            .checked_mul(side)
            .ok_or(ConfigError::BoardTooLarge { side })?;
        Self::new(cells)
    }

    /// Total cells, which is also the winning cell.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.cell_count
    }

    /// Whether no entity starts on `cell`.
    #[must_use]
    pub fn can_place(&self, cell: u32) -> bool {
        !self.entities.contains_key(&cell)
    }

    /// Place an entity on its start cell.
    ///
    /// Returns `false` and leaves the board unchanged when the start cell is
    /// already taken.
    pub fn place(&mut self, entity: BoardEntity) -> bool {
        if !self.can_place(entity.start()) {
            return false;
        }
        self.entities.insert(entity.start(), entity);
        true
    }

    /// The entity starting on `cell`, if any. End cells are not indexed.
    #[must_use]
    pub fn entity_at(&self, cell: u32) -> Option<&BoardEntity> {
        self.entities.get(&cell)
    }

    #[must_use]
    pub fn contains_cell(&self, cell: u32) -> bool {
        (1..=self.cell_count).contains(&cell)
    }

    /// Reject endpoints that fall outside `1..=size()`.
    pub fn check_in_bounds(&self, entity: &BoardEntity) -> Result<(), ConfigError> {
        for cell in [entity.start(), entity.end()] {
            if !self.contains_cell(cell) {
                return Err(ConfigError::CellOutOfRange {
                    cell,
                    cell_count: self.cell_count,
                });
            }
        }
        Ok(())
    }

    /// Number of placed entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities, ordered by start cell.
    #[must_use]
    pub fn entities(&self) -> Vec<BoardEntity> {
        let mut all: Vec<_> = self.entities.values().copied().collect();
        all.sort_by_key(BoardEntity::start);
        all
    }

    /// Snakes ordered by start cell.
    #[must_use]
    pub fn snakes(&self) -> Vec<BoardEntity> {
        self.of_kind(EntityKind::Snake)
    }

    /// Ladders ordered by start cell.
    #[must_use]
    pub fn ladders(&self) -> Vec<BoardEntity> {
        self.of_kind(EntityKind::Ladder)
    }

    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.entities.values().filter(|e| e.is_snake()).count()
    }

    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.entities.values().filter(|e| e.is_ladder()).count()
    }

    fn of_kind(&self, kind: EntityKind) -> Vec<BoardEntity> {
        let mut matching: Vec<_> = self
            .entities
            .values()
            .filter(|e| e.kind() == kind)
            .copied()
            .collect();
        matching.sort_by_key(BoardEntity::start);
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_rejected() {
        assert_eq!(Board::new(0).unwrap_err(), ConfigError::EmptyBoard);
        assert_eq!(Board::square(0).unwrap_err(), ConfigError::EmptyBoard);
    }

    #[test]
    fn test_square_board() {
        let board = Board::square(10).unwrap();
        assert_eq!(board.size(), 100);
        assert!(board.is_empty());
    }

    #[test]
    fn test_oversized_square_rejected() {
        assert_eq!(
            Board::square(65_536).unwrap_err(),
            ConfigError::BoardTooLarge { side: 65_536 }
        );
        assert_eq!(Board::square(65_535).unwrap().size(), 65_535 * 65_535);
    }

    #[test]
    fn test_place_and_lookup() {
        let mut board = Board::new(100).unwrap();
        let ladder = BoardEntity::ladder(2, 38).unwrap();

        assert!(board.can_place(2));
        assert!(board.place(ladder));
        assert!(!board.can_place(2));
        assert_eq!(board.entity_at(2), Some(&ladder));
    }

    #[test]
    fn test_duplicate_start_is_rejected() {
        let mut board = Board::new(100).unwrap();
        let ladder = BoardEntity::ladder(20, 40).unwrap();
        let snake = BoardEntity::snake(20, 5).unwrap();

        assert!(board.place(ladder));
        assert!(!board.place(snake));
        assert_eq!(board.entity_at(20), Some(&ladder));
        assert_eq!(board.entity_count(), 1);
    }

    #[test]
    fn test_end_cell_is_not_indexed() {
        let mut board = Board::new(100).unwrap();
        board.place(BoardEntity::snake(99, 54).unwrap());

        assert!(board.entity_at(54).is_none());
        assert!(board.can_place(54));
    }

    #[test]
    fn test_end_may_coincide_with_other_start() {
        let mut board = Board::new(100).unwrap();
        assert!(board.place(BoardEntity::ladder(5, 30).unwrap()));
        assert!(board.place(BoardEntity::snake(30, 12).unwrap()));
        assert_eq!(board.entity_count(), 2);
    }

    #[test]
    fn test_bounds_check() {
        let board = Board::new(50).unwrap();

        assert!(board.check_in_bounds(&BoardEntity::ladder(1, 50).unwrap()).is_ok());
        assert_eq!(
            board.check_in_bounds(&BoardEntity::ladder(10, 51).unwrap()),
            Err(ConfigError::CellOutOfRange { cell: 51, cell_count: 50 })
        );
        assert_eq!(
            board.check_in_bounds(&BoardEntity::ladder(0, 5).unwrap()),
            Err(ConfigError::CellOutOfRange { cell: 0, cell_count: 50 })
        );
    }

    #[test]
    fn test_kind_views_are_sorted() {
        let mut board = Board::new(100).unwrap();
        board.place(BoardEntity::snake(90, 3).unwrap());
        board.place(BoardEntity::ladder(40, 60).unwrap());
        board.place(BoardEntity::snake(20, 1).unwrap());
        board.place(BoardEntity::ladder(4, 9).unwrap());

        let snake_starts: Vec<_> = board.snakes().iter().map(BoardEntity::start).collect();
        let ladder_starts: Vec<_> = board.ladders().iter().map(BoardEntity::start).collect();
        let all_starts: Vec<_> = board.entities().iter().map(BoardEntity::start).collect();

        assert_eq!(snake_starts, vec![20, 90]);
        assert_eq!(ladder_starts, vec![4, 40]);
        assert_eq!(all_starts, vec![4, 20, 40, 90]);
        assert_eq!(board.snake_count(), 2);
        assert_eq!(board.ladder_count(), 2);
    }
}
