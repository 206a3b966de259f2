//! Piece module - the active falling piece
//!
//! A piece is a kind, an orientation and the board position of its grid's
//! local origin. Every mutator here is an unconditional local change; wall
//! clamping and collision rollback are layered on top by the engine.

use arrayvec::ArrayVec;

use crate::rng::Randomizer;
use crate::shapes::{orientation_count, rotation_state, Bounds, RotationState, MAX_GRID};
use crate::types::ShapeKind;

/// Board coordinates `(row, column)` of a piece's filled cells.
pub type PieceCells = ArrayVec<(i32, i32), { MAX_GRID * MAX_GRID }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    orientation: usize,
    row: i32,
    column: i32,
}

impl Piece {
    /// Create a piece at the origin. The orientation wraps into range.
    pub fn new(kind: ShapeKind, orientation: usize) -> Self {
        Self {
            kind,
            orientation: orientation % orientation_count(kind),
            row: 0,
            column: 0,
        }
    }

    /// Pick a uniformly random kind, then a uniformly random orientation of it.
    ///
    /// The position is left at the origin until the engine places the piece.
    pub fn spawn_random(rng: &mut impl Randomizer) -> Self {
        let kinds = ShapeKind::ALL;
        let kind = kinds[rng.next_below(kinds.len() as u32) as usize];
        let orientation = rng.next_below(orientation_count(kind) as u32) as usize;
        Self::new(kind, orientation)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn orientation(&self) -> usize {
        self.orientation
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn set_row(&mut self, row: i32) {
        self.row = row;
    }

    pub fn set_column(&mut self, column: i32) {
        self.column = column;
    }

    /// Rotation state for the current orientation.
    #[inline(always)]
    pub fn state(&self) -> &'static RotationState {
        rotation_state(self.kind, self.orientation)
    }

    pub fn bounds(&self) -> Bounds {
        self.state().bounds()
    }

    /// Upper most occupied local row
    pub fn top_row(&self) -> i32 {
        self.bounds().top_row
    }

    /// Bottom most occupied local row
    pub fn bottom_row(&self) -> i32 {
        self.bounds().bottom_row
    }

    /// Left most occupied local column
    pub fn left_column(&self) -> i32 {
        self.bounds().left_column
    }

    /// Right most occupied local column
    pub fn right_column(&self) -> i32 {
        self.bounds().right_column
    }

    pub fn rotate_cw(&mut self) {
        self.orientation = (self.orientation + 1) % orientation_count(self.kind);
    }

    pub fn rotate_ccw(&mut self) {
        let count = orientation_count(self.kind);
        self.orientation = (self.orientation + count - 1) % count;
    }

    pub fn move_left(&mut self) {
        self.column -= 1;
    }

    pub fn move_right(&mut self) {
        self.column += 1;
    }

    pub fn move_down(&mut self) {
        self.row += 1;
    }

    pub fn move_up(&mut self) {
        self.row -= 1;
    }

    /// Whether the piece fills the given cell of its local grid.
    pub fn occupied_local(&self, local_row: i32, local_col: i32) -> bool {
        self.state().is_filled(local_row, local_col)
    }

    /// Board coordinates of every filled cell, scanned row by row within the
    /// bounding box. Cells may lie outside the board.
    pub fn cells(&self) -> PieceCells {
        let state = self.state();
        let b = state.bounds();
        let mut out = PieceCells::new();
        for r in b.top_row..=b.bottom_row {
            for c in b.left_column..=b.right_column {
                if state.is_filled(r, c) {
                    out.push((self.row + r, self.column + c));
                }
            }
        }
        out
    }

    /// Leftmost occupied board column.
    pub fn leftmost_column(&self) -> i32 {
        self.column + self.left_column()
    }

    /// Rightmost occupied board column.
    pub fn rightmost_column(&self) -> i32 {
        self.column + self.right_column()
    }

    /// Lowest occupied board row.
    pub fn lowest_row(&self) -> i32 {
        self.row + self.bottom_row()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} orientation:{} row:{} col:{}",
            self.kind.as_str(),
            self.orientation,
            self.row,
            self.column
        )
    }
}
