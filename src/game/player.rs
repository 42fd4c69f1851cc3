use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The mover for a 0-based move index: player one takes every
    /// even-indexed move, player two every odd-indexed one.
    pub fn for_move(index: usize) -> Player {
        if index % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Convert player to cell type
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// The player's number as written in result codes and reasons.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}
