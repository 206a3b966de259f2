//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the piece/board interaction rules. It has **zero
//! dependencies** on terminals, input or I/O, making it:
//!
//! - **Deterministic**: randomness is injected, so a seed replays a game
//! - **Testable**: every collision and placement rule is a plain function
//! - **Cheap**: shape tables are `static`, piece footprints are stack-only
//!
//! # Module Structure
//!
//! - [`shapes`]: the catalog of kinds, rotation grids and precomputed bounds
//! - [`piece`]: the active piece and its unconditional mutators
//! - [`board`]: the locked-cell grid with collision, write and clear
//! - [`rng`]: the [`Randomizer`] seam plus a seeded LCG and a scripted source
//!
//! # Rules
//!
//! - Five kinds (I, O, Z, L, J) with the reference game's rotation grids
//! - No wall kicks: rotation only clamps against the side walls
//! - No line clears: locked cells stay for the whole game
//!
//! # Example
//!
//! ```
//! use line_tetris_core::{Board, Piece};
//! use line_tetris_core::types::{Direction, ShapeKind};
//!
//! let mut board = Board::new(4, 4);
//! let mut piece = Piece::new(ShapeKind::O, 0);
//! piece.set_row(2);
//!
//! assert!(!board.collides(&piece, Direction::Down));
//! piece.move_down();
//! assert!(board.collides(&piece, Direction::Down));
//!
//! piece.move_up();
//! board.write(&piece);
//! assert_eq!(board.locked_count(), 4);
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use line_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::{Piece, PieceCells};
pub use rng::{Randomizer, ScriptedRng, SimpleRng};
pub use shapes::{orientation_count, rotation_state, rotation_states, Bounds, RotationState};
