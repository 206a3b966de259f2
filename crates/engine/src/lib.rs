//! Game engine: the state machine driving spawn, ticks, locking and game over.
//!
//! The engine is the only stateful component. Collaborators feed it one
//! [`Command`](crate::types::Command) per tick and read the
//! [`Board`](crate::core::Board) back for rendering.
//!
//! ```
//! use line_tetris_engine::Engine;
//! use line_tetris_engine::types::{Command, Phase, TickOutcome};
//!
//! let mut engine = Engine::from_seed(10, 20, 42);
//! assert_eq!(engine.tick(Command::None).outcome, TickOutcome::Spawned);
//! assert_eq!(engine.phase(), Phase::ActivePiece);
//!
//! let report = engine.tick(Command::MoveLeft);
//! assert_eq!(report.outcome, TickOutcome::Fell);
//! ```

pub mod engine;

pub use line_tetris_core as core;
pub use line_tetris_types as types;

pub use engine::{clamp_column, Engine, TickReport};
