//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the command sources and the renderer alike.
//!
//! # Board Dimensions
//!
//! The board is sized at runtime. These are only the defaults used when no
//! configuration is given:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Rows grow downward: row 0 is the top of the visible area, and pieces enter
//! from negative rows above it.
//!
//! # Examples
//!
//! ```
//! use line_tetris_types::{Command, ShapeKind};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeKind::from_str("z"), Some(ShapeKind::Z));
//!
//! // Five kinds, in catalog order
//! assert_eq!(ShapeKind::ALL.len(), 5);
//!
//! // Commands carry a stable name for logs
//! assert_eq!(Command::RotateCw.as_str(), "rotateCw");
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Smallest board edge that fits every shape kind in every orientation.
pub const MIN_BOARD_EDGE: u16 = 4;

/// Largest board edge accepted from configuration.
pub const MAX_BOARD_EDGE: u16 = 1024;

/// The five piece kinds of the reference game
///
/// - **I**: 4-long bar
/// - **O**: 2x2 square (single orientation)
/// - **Z**: Z-shaped
/// - **L**: L-shaped
/// - **J**: J-shaped (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    Z,
    L,
    J,
}

impl ShapeKind {
    /// Every kind, in catalog order. Random selection indexes into this.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use line_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("t"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "z" => Some(ShapeKind::Z),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::Z => "z",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }
}

/// Abstract commands fed to the engine, one per tick
///
/// Raw input is mapped to these by a command source. Anything unrecognized
/// becomes [`Command::None`], which still lets gravity advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece to the next orientation
    RotateCw,
    /// Rotate piece to the previous orientation
    RotateCcw,
    /// No positional change
    #[default]
    None,
}

impl Command {
    /// Parse command from its log name (case-insensitive)
    ///
    /// ```
    /// use line_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATECCW"), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "none" => Some(Command::None),
            _ => None,
        }
    }

    /// Convert to camelCase string for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::None => "none",
        }
    }
}

/// Direction probed by a collision test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Left,
    Right,
}

/// Engine lifecycle
///
/// `GameOver` is terminal: once reached, the engine never mutates the board
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NoActivePiece,
    ActivePiece,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NoActivePiece => "noActivePiece",
            Phase::ActivePiece => "activePiece",
            Phase::GameOver => "gameOver",
        }
    }
}

/// What a single tick did to the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The first piece entered the board
    Spawned,
    /// The active piece fell one row
    Fell,
    /// The active piece came to rest and a new piece spawned
    Locked,
    /// A spawn collided immediately; the game has ended
    GameOver,
}

impl TickOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickOutcome::Spawned => "spawned",
            TickOutcome::Fell => "fell",
            TickOutcome::Locked => "locked",
            TickOutcome::GameOver => "gameOver",
        }
    }
}
