//! Command-source module (engine-facing).
//!
//! Maps raw input into [`crate::types::Command`] values and exposes the
//! blocking [`CommandSource`] the input loop pulls from. Text lines are the
//! primary input; `crossterm` key events are offered for single-key play.

pub mod map;
pub mod source;

pub use line_tetris_types as types;

pub use map::{handle_key_event, parse_command, should_quit};
pub use source::{CommandSource, KeySource, LineSource, ScriptSource};
