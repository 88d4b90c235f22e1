use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells, stored row-major and addressed by `(x, y)`.
///
/// Serialized as an array of rows, `[row][column]`. Both dimensions always fit in a `Coord`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Cell>>", try_from = "Vec<Vec<Cell>>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Builds an empty board: no mines, nothing revealed or flagged, all counts zero.
    pub fn new(config: BoardConfig) -> Self {
        let shape = (usize::from(config.rows), usize::from(config.columns));
        let cells = Array2::from_shape_fn(shape, |(row, column)| {
            // rows and columns come from `Coord` values so they fit back into one
            Cell::new(column as Coord, row as Coord)
        });
        Self { cells }
    }

    /// Builds a board with mines at exactly `mine_coords` and adjacency counts filled in.
    pub fn with_mines(config: BoardConfig, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(config);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            if !board[coords].is_mine {
                board.set_mine(coords);
            }
        }
        Ok(board)
    }

    /// Board bounds as `(columns, rows)`.
    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        // `new` takes `Coord` dimensions and `try_from` rejects anything wider
        (columns as Coord, rows as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn columns(&self) -> Coord {
        self.size().0
    }

    pub fn total_cells(&self) -> CellCount {
        let (columns, rows) = self.size();
        mult(columns, rows)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Rows from top to bottom, each from left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> {
        self.cells.rows().into_iter().map(|row| row.into_iter())
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged)
    }

    /// Coordinates of every mine, for front ends that uncover the field after a loss.
    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|cell| cell.is_mine)
            .map(|cell| (cell.x, cell.y))
    }

    /// Marks `coords` as a mine and bumps the count of every neighbor.
    pub(crate) fn set_mine(&mut self, coords: Coord2) {
        self[coords].is_mine = true;
        for pos in self.iter_neighbors(coords) {
            self[pos].adjacent_mines += 1;
        }
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> usize {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count()
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        // bounded by total_cells
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

/// Rebuilds a board from rows of cells, checking that it is a non-empty rectangle that fits in
/// `Coord` and that every cell agrees with its position and its neighbors.
impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if Coord::try_from(height).is_err()
            || Coord::try_from(width).is_err()
            || rows.iter().any(|row| row.len() != width)
        {
            return Err(GameError::InvalidBoardShape);
        }

        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        let board = Self { cells };

        for ((row, column), cell) in board.cells.indexed_iter() {
            let in_place = (usize::from(cell.x), usize::from(cell.y)) == (column, row);
            if !in_place
                || (cell.is_revealed && cell.is_flagged)
                || usize::from(cell.adjacent_mines) != board.count_adjacent_mines((cell.x, cell.y))
            {
                log::debug!("Inconsistent cell at row {row}, column {column}: {cell:?}");
                return Err(GameError::InconsistentCell);
            }
        }
        Ok(board)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_default_cells_at_their_positions() {
        let config = BoardConfig::new(4, 7, 5);
        let board = Board::new(config);

        assert_eq!(board.size(), (7, 4));
        assert_eq!(board.rows(), 4);
        assert_eq!(board.columns(), 7);
        assert_eq!(board.iter().count(), 28);
        assert_eq!(board.mine_count(), 0);

        for (row, cells) in board.iter_rows().enumerate() {
            for (column, cell) in cells.enumerate() {
                assert_eq!((usize::from(cell.x), usize::from(cell.y)), (column, row));
                assert!(!cell.is_mine);
                assert!(!cell.is_revealed);
                assert!(!cell.is_flagged);
                assert_eq!(cell.adjacent_mines, 0);
            }
        }
    }

    #[test]
    fn with_mines_computes_adjacency() {
        let board = Board::with_mines(BoardConfig::new(3, 3, 2), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert_eq!(board[(1, 1)].adjacent_mines, 2);
        assert_eq!(board[(1, 0)].adjacent_mines, 1);
        assert_eq!(board[(2, 0)].adjacent_mines, 0);
        assert_eq!(board[(0, 2)].adjacent_mines, 0);
    }

    #[test]
    fn with_mines_ignores_duplicates() {
        let board = Board::with_mines(BoardConfig::new(2, 2, 1), &[(0, 0), (0, 0)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(1, 1)].adjacent_mines, 1);
    }

    #[test]
    fn with_mines_rejects_out_of_bounds() {
        assert_eq!(
            Board::with_mines(BoardConfig::new(2, 2, 1), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    fn rows_of(board: &Board) -> Vec<Vec<Cell>> {
        board.clone().into()
    }

    #[test]
    fn rows_rebuild_the_same_board() {
        let board = Board::with_mines(BoardConfig::new(2, 3, 1), &[(2, 1)]).unwrap();
        let rows = rows_of(&board);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], board[(2, 1)]);
        assert_eq!(Board::try_from(rows), Ok(board));
    }

    #[test]
    fn rows_wider_than_a_coord_are_rejected() {
        let wide = vec![(0..300).map(|x| Cell::new(x as Coord, 0)).collect::<Vec<_>>()];

        assert_eq!(Board::try_from(wide), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn ragged_or_empty_rows_are_rejected() {
        let mut rows = rows_of(&Board::new(BoardConfig::new(3, 3, 1)));
        rows[1].pop();

        assert_eq!(Board::try_from(rows), Err(GameError::InvalidBoardShape));
        assert_eq!(Board::try_from(Vec::new()), Err(GameError::InvalidDimensions));
        assert_eq!(
            Board::try_from(vec![Vec::new()]),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn inconsistent_cells_are_rejected() {
        let board = Board::with_mines(BoardConfig::new(3, 3, 1), &[(0, 0)]).unwrap();

        let mut moved = rows_of(&board);
        moved[2][1].x = 0;
        assert_eq!(Board::try_from(moved), Err(GameError::InconsistentCell));

        let mut miscounted = rows_of(&board);
        miscounted[1][1].adjacent_mines = 3;
        assert_eq!(Board::try_from(miscounted), Err(GameError::InconsistentCell));

        let mut flagged_open = rows_of(&board);
        flagged_open[0][2].is_revealed = true;
        flagged_open[0][2].is_flagged = true;
        assert_eq!(
            Board::try_from(flagged_open),
            Err(GameError::InconsistentCell)
        );
    }

    #[test]
    fn serializes_as_nested_rows() {
        let board = Board::new(BoardConfig::new(2, 3, 1));

        let value = serde_json::to_value(&board).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_array().unwrap().len(), 3);
        assert_eq!(rows[1][2]["x"], 2);
        assert_eq!(rows[1][2]["y"], 1);
    }

    #[test]
    fn cell_at_is_bounds_checked() {
        let board = Board::new(BoardConfig::new(2, 3, 1));

        assert!(board.cell_at((2, 1)).is_some());
        assert!(board.cell_at((3, 0)).is_none());
        assert!(board.cell_at((0, 2)).is_none());
    }
}
