//! Shapes module - the catalog of piece kinds and their rotation states
//!
//! Each kind owns an ordered list of occupancy grids, one per orientation.
//! Orientation `n + 1` is one clockwise turn after orientation `n`, wrapping
//! at the end of the list.
//!
//! The tightest bounding box of each grid is computed by a `const fn`, so the
//! whole catalog is a set of `static` tables evaluated once by the compiler
//! and never touched again. A grid without any filled cell is rejected at
//! compile time.

use crate::types::ShapeKind;

/// Largest backing grid edge used by any kind (the I piece is 4x4).
pub const MAX_GRID: usize = 4;

/// Backing storage for one orientation. Only the top-left `size` x `size`
/// region is meaningful.
pub type Grid = [[u8; MAX_GRID]; MAX_GRID];

/// Tightest box around the filled cells of a grid, in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub top_row: i32,
    pub bottom_row: i32,
    pub left_column: i32,
    pub right_column: i32,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.right_column - self.left_column + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom_row - self.top_row + 1
    }
}

/// One orientation of a kind: occupancy grid plus precomputed bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    size: usize,
    cells: Grid,
    bounds: Bounds,
}

impl RotationState {
    /// Build a rotation state and compute its bounds.
    ///
    /// Panics (at compile time when used in a `static`) if the grid is empty
    /// or `size` exceeds [`MAX_GRID`].
    pub const fn new(size: usize, cells: Grid) -> Self {
        if size == 0 || size > MAX_GRID {
            panic!("rotation grid size out of range");
        }
        let bounds = compute_bounds(size, &cells);
        Self {
            size,
            cells,
            bounds,
        }
    }

    /// Edge length of the square backing grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether the local cell is filled. Anything outside the grid is empty.
    #[inline(always)]
    pub fn is_filled(&self, local_row: i32, local_col: i32) -> bool {
        if local_row < 0 || local_col < 0 {
            return false;
        }
        let (r, c) = (local_row as usize, local_col as usize);
        r < self.size && c < self.size && self.cells[r][c] != 0
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        let mut n = 0;
        for row in &self.cells[..self.size] {
            n += row[..self.size].iter().filter(|&&v| v != 0).count();
        }
        n
    }
}

const fn compute_bounds(size: usize, cells: &Grid) -> Bounds {
    let mut found = false;
    let mut top = 0;
    let mut bottom = 0;
    let mut left = MAX_GRID;
    let mut right = 0;

    let mut row = 0;
    while row < size {
        let mut col = 0;
        while col < size {
            if cells[row][col] != 0 {
                if !found {
                    top = row;
                    found = true;
                }
                bottom = row;
                if col < left {
                    left = col;
                }
                if col > right {
                    right = col;
                }
            }
            col += 1;
        }
        row += 1;
    }

    if !found {
        panic!("rotation state has no filled cell");
    }

    Bounds {
        top_row: top as i32,
        bottom_row: bottom as i32,
        left_column: left as i32,
        right_column: right as i32,
    }
}

const fn grid2(rows: [[u8; 2]; 2]) -> Grid {
    let mut g = [[0; MAX_GRID]; MAX_GRID];
    let mut r = 0;
    while r < 2 {
        let mut c = 0;
        while c < 2 {
            g[r][c] = rows[r][c];
            c += 1;
        }
        r += 1;
    }
    g
}

const fn grid3(rows: [[u8; 3]; 3]) -> Grid {
    let mut g = [[0; MAX_GRID]; MAX_GRID];
    let mut r = 0;
    while r < 3 {
        let mut c = 0;
        while c < 3 {
            g[r][c] = rows[r][c];
            c += 1;
        }
        r += 1;
    }
    g
}

static I_STATES: [RotationState; 4] = [
    RotationState::new(4, [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]]),
    RotationState::new(4, [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
    RotationState::new(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    RotationState::new(4, [[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]),
];

static O_STATES: [RotationState; 1] = [RotationState::new(2, grid2([[1, 1], [1, 1]]))];

static Z_STATES: [RotationState; 4] = [
    RotationState::new(3, grid3([[0, 0, 0], [1, 1, 0], [0, 1, 1]])),
    RotationState::new(3, grid3([[0, 1, 0], [1, 1, 0], [1, 0, 0]])),
    RotationState::new(3, grid3([[1, 1, 0], [0, 1, 1], [0, 0, 0]])),
    RotationState::new(3, grid3([[0, 0, 1], [0, 1, 1], [0, 1, 0]])),
];

static L_STATES: [RotationState; 4] = [
    RotationState::new(3, grid3([[0, 0, 0], [1, 1, 1], [1, 0, 0]])),
    RotationState::new(3, grid3([[1, 1, 0], [0, 1, 0], [0, 1, 0]])),
    RotationState::new(3, grid3([[0, 0, 1], [1, 1, 1], [0, 0, 0]])),
    RotationState::new(3, grid3([[0, 1, 0], [0, 1, 0], [0, 1, 1]])),
];

static J_STATES: [RotationState; 4] = [
    RotationState::new(3, grid3([[0, 0, 0], [1, 1, 1], [0, 0, 1]])),
    RotationState::new(3, grid3([[0, 1, 0], [0, 1, 0], [1, 1, 0]])),
    RotationState::new(3, grid3([[1, 0, 0], [1, 1, 1], [0, 0, 0]])),
    RotationState::new(3, grid3([[0, 1, 1], [0, 1, 0], [0, 1, 0]])),
];

/// All rotation states of a kind, in clockwise order.
pub fn rotation_states(kind: ShapeKind) -> &'static [RotationState] {
    match kind {
        ShapeKind::I => &I_STATES,
        ShapeKind::O => &O_STATES,
        ShapeKind::Z => &Z_STATES,
        ShapeKind::L => &L_STATES,
        ShapeKind::J => &J_STATES,
    }
}

/// Number of distinct orientations of a kind.
pub fn orientation_count(kind: ShapeKind) -> usize {
    rotation_states(kind).len()
}

/// Rotation state for a kind and orientation.
///
/// The orientation wraps, so any index is accepted.
pub fn rotation_state(kind: ShapeKind, orientation: usize) -> &'static RotationState {
    let states = rotation_states(kind);
    &states[orientation % states.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_counts() {
        assert_eq!(orientation_count(ShapeKind::I), 4);
        assert_eq!(orientation_count(ShapeKind::O), 1);
        assert_eq!(orientation_count(ShapeKind::Z), 4);
        assert_eq!(orientation_count(ShapeKind::L), 4);
        assert_eq!(orientation_count(ShapeKind::J), 4);
    }

    #[test]
    fn test_i_bounds_per_orientation() {
        let b = rotation_state(ShapeKind::I, 0).bounds();
        assert_eq!((b.top_row, b.bottom_row, b.left_column, b.right_column), (2, 2, 0, 3));

        let b = rotation_state(ShapeKind::I, 1).bounds();
        assert_eq!((b.top_row, b.bottom_row, b.left_column, b.right_column), (0, 3, 1, 1));

        let b = rotation_state(ShapeKind::I, 2).bounds();
        assert_eq!((b.top_row, b.bottom_row, b.left_column, b.right_column), (1, 1, 0, 3));

        let b = rotation_state(ShapeKind::I, 3).bounds();
        assert_eq!((b.top_row, b.bottom_row, b.left_column, b.right_column), (0, 3, 2, 2));
    }

    #[test]
    fn test_o_bounds_fill_whole_grid() {
        let state = rotation_state(ShapeKind::O, 0);
        assert_eq!(state.size(), 2);
        let b = state.bounds();
        assert_eq!((b.top_row, b.bottom_row, b.left_column, b.right_column), (0, 1, 0, 1));
    }

    #[test]
    fn test_l_bounds_skip_empty_edges() {
        // Top row empty.
        let b = rotation_state(ShapeKind::L, 0).bounds();
        assert_eq!((b.top_row, b.bottom_row, b.left_column, b.right_column), (1, 2, 0, 2));
        // Right column empty.
        let b = rotation_state(ShapeKind::L, 1).bounds();
        assert_eq!((b.top_row, b.bottom_row, b.left_column, b.right_column), (0, 2, 0, 1));
    }

    #[test]
    fn test_every_state_has_four_cells() {
        for kind in ShapeKind::ALL {
            for state in rotation_states(kind) {
                assert_eq!(state.filled_count(), 4, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_bounds_enclose_a_filled_cell_within_grid() {
        for kind in ShapeKind::ALL {
            for (o, state) in rotation_states(kind).iter().enumerate() {
                let b = state.bounds();
                let size = state.size() as i32;
                assert!(0 <= b.top_row && b.top_row <= b.bottom_row && b.bottom_row < size);
                assert!(0 <= b.left_column && b.left_column <= b.right_column && b.right_column < size);

                let mut any = false;
                for r in b.top_row..=b.bottom_row {
                    for c in b.left_column..=b.right_column {
                        any |= state.is_filled(r, c);
                    }
                }
                assert!(any, "{:?} orientation {} has an empty box", kind, o);

                // Every edge of the box touches a filled cell.
                assert!((b.left_column..=b.right_column).any(|c| state.is_filled(b.top_row, c)));
                assert!((b.left_column..=b.right_column).any(|c| state.is_filled(b.bottom_row, c)));
                assert!((b.top_row..=b.bottom_row).any(|r| state.is_filled(r, b.left_column)));
                assert!((b.top_row..=b.bottom_row).any(|r| state.is_filled(r, b.right_column)));
            }
        }
    }

    #[test]
    fn test_is_filled_outside_grid_is_empty() {
        let state = rotation_state(ShapeKind::O, 0);
        assert!(!state.is_filled(-1, 0));
        assert!(!state.is_filled(0, 2));
        assert!(!state.is_filled(2, 0));
    }

    #[test]
    fn test_rotation_state_wraps_orientation() {
        assert_eq!(rotation_state(ShapeKind::Z, 5), rotation_state(ShapeKind::Z, 1));
        assert_eq!(rotation_state(ShapeKind::O, 3), rotation_state(ShapeKind::O, 0));
    }
}
