use serde::{Deserialize, Serialize};

use crate::Coord;

/// One square of the board.
///
/// `is_revealed` and `is_flagged` are never both set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Mines among the up-to-8 neighbors, 0 to 8.
    pub adjacent_mines: u8,
}

impl Cell {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self {
            x,
            y,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            adjacent_mines: 0,
        }
    }

    /// Whether the player can still open this cell.
    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// A safe cell with no adjacent mines, the only kind whose reveal cascades.
    pub const fn is_empty_region(&self) -> bool {
        !self.is_mine && self.adjacent_mines == 0
    }
}
