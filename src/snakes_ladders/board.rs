use hashbrown::HashMap;
use thiserror::Error;

/// One cell of the board, numbered from 1 (start) to [`Board::LAST_SQUARE`].
pub type Square = u16;

/// Square to square jumps. Keys are the squares a token lands on.
pub type JumpTable = HashMap<Square, Square>;

const CLASSIC_LADDERS: [(Square, Square); 8] = [
    (6, 24), (9, 31), (20, 38), (28, 84),
    (40, 59), (51, 67), (63, 81), (71, 91),
];

const CLASSIC_SNAKES: [(Square, Square); 8] = [
    (17, 7), (54, 34), (62, 19), (64, 60),
    (87, 36), (93, 73), (95, 75), (98, 79),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jump {
    Snake(Square),
    Ladder(Square),
}

impl Jump {
    pub fn destination(&self) -> Square {
        match self {
            Jump::Snake(square) | Jump::Ladder(square) => *square,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("square {0} is both a snake and a ladder")]
    OverlappingSource(Square),
    #[error("jump source {0} must lie strictly between the first and last squares")]
    SourceOutOfRange(Square),
    #[error("jump {from} -> {to} leaves the board")]
    DestinationOutOfRange { from: Square, to: Square },
    #[error("snake {from} -> {to} does not go down")]
    SnakeClimbs { from: Square, to: Square },
    #[error("ladder {from} -> {to} does not go up")]
    LadderDescends { from: Square, to: Square },
}

/// The fixed 10x10 board with its snake and ladder tables.
///
/// Tables never change after construction. Landing resolution applies a
/// single jump: a destination that is itself a jump source is not followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    snakes: JumpTable,
    ladders: JumpTable,
}

impl Board {
    pub const SIZE: Square = 10;
    pub const LAST_SQUARE: Square = Self::SIZE * Self::SIZE;
    pub const FIRST_SQUARE: Square = 1;

    /// The classic layout shipped with the game.
    pub fn new() -> Self {
        Board {
            snakes: CLASSIC_SNAKES.into_iter().collect(),
            ladders: CLASSIC_LADDERS.into_iter().collect(),
        }
    }

    pub fn from_tables(snakes: JumpTable, ladders: JumpTable) -> Result<Self, LayoutError> {
        let board = Board { snakes, ladders };
        board.validate()?;
        Ok(board)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let check_range = |&from: &Square, &to: &Square| {
            if from <= Self::FIRST_SQUARE || from >= Self::LAST_SQUARE {
                return Err(LayoutError::SourceOutOfRange(from));
            }
            if to < Self::FIRST_SQUARE || to > Self::LAST_SQUARE {
                return Err(LayoutError::DestinationOutOfRange { from, to });
            }
            Ok(())
        };

        for (from, to) in self.snakes.iter() {
            check_range(from, to)?;
            if to >= from {
                return Err(LayoutError::SnakeClimbs { from: *from, to: *to });
            }
            if self.ladders.contains_key(from) {
                return Err(LayoutError::OverlappingSource(*from));
            }
        }

        for (from, to) in self.ladders.iter() {
            check_range(from, to)?;
            if to <= from {
                return Err(LayoutError::LadderDescends { from: *from, to: *to });
            }
        }

        Ok(())
    }

    pub fn snakes(&self) -> &JumpTable {
        &self.snakes
    }

    pub fn ladders(&self) -> &JumpTable {
        &self.ladders
    }

    pub fn jump_at(&self, square: Square) -> Option<Jump> {
        if let Some(&to) = self.snakes.get(&square) {
            return Some(Jump::Snake(to));
        }
        self.ladders.get(&square).map(|&to| Jump::Ladder(to))
    }

    /// Square a token ends on after landing on `square`.
    pub fn resolve_landing(&self, square: Square) -> Square {
        self.jump_at(square).map_or(square, |jump| jump.destination())
    }

    pub fn is_winning_square(&self, square: Square) -> bool {
        square >= Self::LAST_SQUARE
    }

    /// Grid placement of a square as `(row, col)`, row 0 at the bottom.
    /// Even rows run left to right, odd rows right to left.
    pub fn cell(square: Square) -> (u16, u16) {
        let index = square.clamp(Self::FIRST_SQUARE, Self::LAST_SQUARE) - 1;
        let row = index / Self::SIZE;
        let offset = index % Self::SIZE;
        let col = if row % 2 == 0 { offset } else { Self::SIZE - 1 - offset };
        (row, col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(entries: &[(Square, Square)]) -> JumpTable {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_classic_layout_is_valid() {
        let board = Board::new();
        assert_eq!(board.validate(), Ok(()));
        assert_eq!(board.snakes().len(), 8);
        assert_eq!(board.ladders().len(), 8);
    }

    #[test]
    fn test_classic_layout_has_no_chains() {
        let board = Board::new();
        for &to in board.snakes().values().chain(board.ladders().values()) {
            assert_eq!(board.jump_at(to), None, "destination {to} is a jump source");
        }
    }

    #[test]
    fn test_snakes_go_down_ladders_go_up() {
        let board = Board::new();
        for (&from, &to) in board.snakes() {
            assert_eq!(board.resolve_landing(from), to);
            assert!(to < from);
        }
        for (&from, &to) in board.ladders() {
            assert_eq!(board.resolve_landing(from), to);
            assert!(to > from);
        }
    }

    #[test]
    fn test_known_squares() {
        let board = Board::new();
        assert_eq!(board.resolve_landing(6), 24);
        assert_eq!(board.resolve_landing(8), 8);
        assert_eq!(board.resolve_landing(98), 79);
        assert_eq!(board.jump_at(6), Some(Jump::Ladder(24)));
        assert_eq!(board.jump_at(17), Some(Jump::Snake(7)));
        assert_eq!(board.jump_at(100), None);
    }

    #[test]
    fn test_ladder_onto_snake_is_not_chained() {
        let board = Board::from_tables(table(&[(17, 5)]), table(&[(3, 17)])).unwrap();
        assert_eq!(board.resolve_landing(3), 17);
        assert_eq!(board.resolve_landing(17), 5);
    }

    #[test]
    fn test_winning_square() {
        let board = Board::new();
        assert!(board.is_winning_square(100));
        assert!(board.is_winning_square(105));
        assert!(!board.is_winning_square(99));
        assert!(!board.is_winning_square(1));
    }

    #[test]
    fn test_rejects_overlapping_sources() {
        let result = Board::from_tables(table(&[(30, 10)]), table(&[(30, 50)]));
        assert_eq!(result, Err(LayoutError::OverlappingSource(30)));
    }

    #[test]
    fn test_rejects_bad_directions() {
        assert_eq!(
            Board::from_tables(table(&[(30, 40)]), JumpTable::new()),
            Err(LayoutError::SnakeClimbs { from: 30, to: 40 })
        );
        assert_eq!(
            Board::from_tables(JumpTable::new(), table(&[(30, 20)])),
            Err(LayoutError::LadderDescends { from: 30, to: 20 })
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            Board::from_tables(JumpTable::new(), table(&[(100, 100)])),
            Err(LayoutError::SourceOutOfRange(100))
        );
        assert_eq!(
            Board::from_tables(JumpTable::new(), table(&[(1, 20)])),
            Err(LayoutError::SourceOutOfRange(1))
        );
        assert_eq!(
            Board::from_tables(JumpTable::new(), table(&[(90, 101)])),
            Err(LayoutError::DestinationOutOfRange { from: 90, to: 101 })
        );
        assert_eq!(
            Board::from_tables(table(&[(50, 0)]), JumpTable::new()),
            Err(LayoutError::DestinationOutOfRange { from: 50, to: 0 })
        );
    }

    #[test]
    fn test_cells_snake_through_the_grid() {
        assert_eq!(Board::cell(1), (0, 0));
        assert_eq!(Board::cell(10), (0, 9));
        assert_eq!(Board::cell(11), (1, 9));
        assert_eq!(Board::cell(20), (1, 0));
        assert_eq!(Board::cell(21), (2, 0));
        assert_eq!(Board::cell(100), (9, 0));
        assert_eq!(Board::cell(91), (9, 9));
    }

    proptest! {
        #[test]
        fn prop_plain_squares_are_fixed_points(square in 1u16..=100) {
            let board = Board::new();
            prop_assume!(board.jump_at(square).is_none());
            prop_assert_eq!(board.resolve_landing(square), square);
        }

        #[test]
        fn prop_resolution_is_idempotent_on_classic_board(square in 1u16..=100) {
            let board = Board::new();
            let once = board.resolve_landing(square);
            prop_assert_eq!(board.resolve_landing(once), once);
        }

        #[test]
        fn prop_winning_iff_last_square_or_beyond(square in any::<u16>()) {
            prop_assert_eq!(Board::new().is_winning_square(square), square >= 100);
        }

        #[test]
        fn prop_cells_are_unique_and_on_grid(a in 1u16..=100, b in 1u16..=100) {
            let (row, col) = Board::cell(a);
            prop_assert!(row < 10 && col < 10);
            prop_assert_eq!(a == b, Board::cell(a) == Board::cell(b));
        }
    }
}
