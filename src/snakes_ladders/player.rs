use crate::snakes_ladders::{Board, Square};

pub const RED: [u8; 3] = [255, 0, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// A token on the board. The colour is only read by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: [u8; 3],
    position: Square,
}

impl Player {
    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Self {
        Player { name: name.into(), color, position: Board::FIRST_SQUARE }
    }

    /// The two player roster, red moving first.
    pub fn roster(first: impl Into<String>, second: impl Into<String>) -> Vec<Player> {
        vec![Player::new(first, RED), Player::new(second, BLUE)]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    pub fn position(&self) -> Square {
        self.position
    }

    /// Moves forward, stopping on the last square instead of overshooting.
    pub fn advance(&mut self, steps: Square) {
        self.position = self.position.saturating_add(steps).min(Board::LAST_SQUARE);
    }

    pub fn reset_to_start(&mut self) {
        self.position = Board::FIRST_SQUARE;
    }

    // Only the turn engine places a token after jump resolution.
    pub(crate) fn land_on(&mut self, square: Square) {
        self.position = square.clamp(Board::FIRST_SQUARE, Board::LAST_SQUARE);
    }
}
