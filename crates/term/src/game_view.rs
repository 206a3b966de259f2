//! GameView: maps the engine's board into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The frame is the classic text layout: every board row is drawn between two
//! `*` walls, locked cells are `*` and empty cells are blank, and a solid row
//! of `*` closes the bottom.

use crate::core::Board;
use crate::fb::{CellStyle, FrameBuffer};

/// Printed once the engine reaches game over.
pub const GAME_OVER_MESSAGE: &str = "Reached the top! Game Over";

const WALL: char = '*';
const LOCKED: char = '*';

/// Counters shown under the board when status is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub ticks: u64,
    pub pieces: u64,
    pub game_over: bool,
}

/// A lightweight text renderer for the board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_status: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 1,
            show_status: false,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }

    /// Render the board into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, board: &Board, status: &StatusView, fb: &mut FrameBuffer) {
        let board_px_w = board.width().saturating_mul(self.cell_w);
        let frame_w = board_px_w.saturating_add(2);
        let floor_y = board.height();

        let counters = self
            .show_status
            .then(|| format!("ticks:{} pieces:{}", status.ticks, status.pieces));
        let mut text_lines: Vec<&str> = Vec::with_capacity(2);
        if let Some(c) = counters.as_deref() {
            text_lines.push(c);
        }
        if status.game_over {
            text_lines.push(GAME_OVER_MESSAGE);
        }

        let text_w = text_lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        fb.resize(
            frame_w.max(text_w),
            floor_y.saturating_add(1 + text_lines.len() as u16),
        );
        fb.clear(CellStyle::PLAIN.into_cell(' '));

        let wall = CellStyle::PLAIN;
        let locked = CellStyle {
            bold: true,
            dim: false,
        };

        for (y, row) in board.rows().enumerate() {
            let y = y as u16;
            fb.put_char(0, y, WALL, wall);
            for (x, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    let px = (x as u16).saturating_mul(self.cell_w).saturating_add(1);
                    for dx in 0..self.cell_w {
                        fb.put_char(px.saturating_add(dx), y, LOCKED, locked);
                    }
                }
            }
            fb.put_char(frame_w - 1, y, WALL, wall);
        }

        for x in 0..frame_w {
            fb.put_char(x, floor_y, WALL, wall);
        }

        for (i, line) in text_lines.iter().enumerate() {
            fb.put_str(0, floor_y.saturating_add(1 + i as u16), line, CellStyle::PLAIN);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, status: &StatusView) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(board, status, &mut fb);
        fb
    }
}
