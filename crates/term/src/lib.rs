//! Terminal renderer module.
//!
//! Draws the board into a small framebuffer and flushes it to a terminal,
//! either as plain lines or as an in-place redraw on the alternate screen.
//!
//! Goals:
//! - Keep `core` free of any I/O
//! - Reproduce the classic `*`-walled text frame exactly in plain mode
//! - Allow wider cells for terminals with tall glyphs

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use line_tetris_core as core;
pub use line_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, StatusView, GAME_OVER_MESSAGE};
pub use renderer::{encode_full_into, encode_plain_into, ScreenMode, TerminalRenderer};
