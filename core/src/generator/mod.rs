use crate::*;
pub use random::*;

mod random;

/// Strategy for laying mines onto an empty board.
///
/// Implementations return a new board and leave their input untouched.
pub trait MinePlacer {
    fn place_mines(self, board: &Board, config: BoardConfig) -> Board;
}

/// The clicked cell and its neighbors, clipped to the board.
pub fn safe_zone(board: &Board, safe: Coord2) -> impl Iterator<Item = Coord2> {
    block_around(safe, board.size())
}
