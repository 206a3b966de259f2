//! Board module - manages the grid of locked cells
//!
//! The board is a `width` x `height` grid where each cell is either empty (0)
//! or locked (1). Uses a flat row-major array allocated once at construction.
//! Coordinates: (row, column) where row 0 is the top visible row. Anything
//! outside `[0, height) x [0, width)` is wall and is never stored.

use crate::piece::Piece;
use crate::types::Direction;

/// Empty cell value
pub const EMPTY: u8 = 0;

/// Locked cell value
pub const LOCKED: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + column)
    cells: Vec<u8>,
}

impl Board {
    /// Create an empty board. Zero dimensions are raised to 1.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 || row >= self.height as i32 || column >= self.width as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + column as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at (row, column). Returns None if out of bounds.
    pub fn get(&self, row: i32, column: i32) -> Option<u8> {
        self.index(row, column).map(|i| self.cells[i])
    }

    /// Set cell at (row, column). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, column: i32, value: u8) -> bool {
        match self.index(row, column) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn is_in_bounds(&self, row: i32, column: i32) -> bool {
        self.index(row, column).is_some()
    }

    /// Check if position is within bounds and locked
    pub fn is_locked(&self, row: i32, column: i32) -> bool {
        matches!(self.get(row, column), Some(LOCKED))
    }

    /// Collision test of the piece at its current position.
    ///
    /// The wall for the probed direction is checked first and wins outright.
    /// Otherwise any filled piece cell that lands on a locked in-range cell
    /// collides; cells mapping outside the board are ignored here.
    pub fn collides(&self, piece: &Piece, direction: Direction) -> bool {
        let past_wall = match direction {
            Direction::Down => piece.lowest_row() >= self.height as i32,
            Direction::Left => piece.leftmost_column() < 0,
            Direction::Right => piece.rightmost_column() >= self.width as i32,
        };
        if past_wall {
            return true;
        }

        piece
            .cells()
            .iter()
            .any(|&(row, column)| self.is_locked(row, column))
    }

    /// Lock every in-range filled cell of the piece.
    pub fn write(&mut self, piece: &Piece) {
        self.fill(piece, LOCKED);
    }

    /// Empty every in-range filled cell of the piece.
    pub fn clear(&mut self, piece: &Piece) {
        self.fill(piece, EMPTY);
    }

    fn fill(&mut self, piece: &Piece, value: u8) {
        for (row, column) in piece.cells() {
            // Rows above the board are expected while a piece enters.
            self.set(row, column, value);
        }
    }

    /// One row of cells, or None past the bottom.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.height as usize {
            return None;
        }
        let w = self.width as usize;
        Some(&self.cells[row * w..(row + 1) * w])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of locked cells.
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == LOCKED).count()
    }

    /// Build a board from text rows, `#` or `*` meaning locked.
    ///
    /// Rows shorter than the widest one are padded with empty cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(1);
        let mut board = Self::new(width as u16, rows.len() as u16);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' || ch == '*' {
                    board.set(r as i32, c as i32, LOCKED);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn placed(kind: ShapeKind, orientation: usize, row: i32, column: i32) -> Piece {
        let mut p = Piece::new(kind, orientation);
        p.set_row(row);
        p.set_column(column);
        p
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(0, -1), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_zero_dimensions_are_raised() {
        let board = Board::new(0, 0);
        assert_eq!((board.width(), board.height()), (1, 1));
        assert_eq!(board.cells().len(), 1);
    }

    #[test]
    fn test_write_skips_rows_above_board() {
        let mut board = Board::new(4, 4);
        // I vertical: occupies local rows 0..=3 in column 1.
        let p = placed(ShapeKind::I, 1, -3, 0);
        board.write(&p);
        assert_eq!(board.locked_count(), 1);
        assert!(board.is_locked(0, 1));
    }

    #[test]
    fn test_clear_only_touches_piece_cells() {
        let mut board = Board::from_rows(&["....", "#..#", "...."]);
        // Z at orientation 0 fills (1,0),(1,1),(2,1),(2,2) locally.
        let p = placed(ShapeKind::Z, 0, -1, 0);
        board.write(&p);
        assert_eq!(board.locked_count(), 6);
        board.clear(&p);
        assert_eq!(board, Board::from_rows(&["....", "#..#", "...."]));
    }

    #[test]
    fn test_collides_down_at_floor() {
        let board = Board::new(4, 4);
        assert!(!board.collides(&placed(ShapeKind::O, 0, 2, 0), Direction::Down));
        assert!(board.collides(&placed(ShapeKind::O, 0, 3, 0), Direction::Down));
    }

    #[test]
    fn test_collides_side_walls() {
        let board = Board::new(4, 4);
        // L orientation 1 occupies local columns 0..=1.
        assert!(board.collides(&placed(ShapeKind::L, 1, 0, -1), Direction::Left));
        assert!(!board.collides(&placed(ShapeKind::L, 1, 0, 0), Direction::Left));
        assert!(board.collides(&placed(ShapeKind::L, 1, 0, 3), Direction::Right));
        assert!(!board.collides(&placed(ShapeKind::L, 1, 0, 2), Direction::Right));
    }

    #[test]
    fn test_collides_with_locked_cell() {
        let board = Board::from_rows(&["....", "....", ".#..", "...."]);
        assert!(board.collides(&placed(ShapeKind::O, 0, 1, 0), Direction::Down));
        assert!(board.collides(&placed(ShapeKind::O, 0, 1, 1), Direction::Left));
        assert!(!board.collides(&placed(ShapeKind::O, 0, 0, 2), Direction::Right));
    }

    #[test]
    fn test_overlap_above_board_is_ignored() {
        let board = Board::from_rows(&["#...", "....", "....", "...."]);
        // O at row -2 lies fully above the board.
        assert!(!board.collides(&placed(ShapeKind::O, 0, -2, 0), Direction::Down));
        // At row -1 its bottom row overlaps the locked cell.
        assert!(board.collides(&placed(ShapeKind::O, 0, -1, 0), Direction::Down));
    }

    #[test]
    fn test_rows_iterate_top_to_bottom() {
        let board = Board::from_rows(&["#.", ".#", ".."]);
        let rows: Vec<&[u8]> = board.rows().collect();
        assert_eq!(rows, vec![&[1, 0][..], &[0, 1][..], &[0, 0][..]]);
        assert_eq!(board.row(1), Some(&[0, 1][..]));
        assert_eq!(board.row(3), None);
    }
}
