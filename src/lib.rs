//! Line Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `line_tetris::{core,engine,input,term,types}`
//! and adds the pieces only the binary needs: environment configuration and
//! the optional tick log.

pub mod config;
pub mod tick_log;

pub use line_tetris_core as core;
pub use line_tetris_engine as engine;
pub use line_tetris_input as input;
pub use line_tetris_term as term;
pub use line_tetris_types as types;
