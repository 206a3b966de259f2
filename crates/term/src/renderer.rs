//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Two output modes are supported. `Plain` prints each frame as ordinary
//! lines, one frame after another, which works over pipes and in scrollback.
//! `Screen` takes over the alternate screen and redraws in place.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};

/// How frames reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    #[default]
    Plain,
    Screen,
}

impl ScreenMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Some(ScreenMode::Plain),
            "screen" => Some(ScreenMode::Screen),
            _ => None,
        }
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    mode: ScreenMode,
    raw: bool,
    entered: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new(mode: ScreenMode) -> Self {
        Self::with_writer(io::stdout(), mode)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, mode: ScreenMode) -> Self {
        Self {
            out,
            mode,
            raw: false,
            entered: false,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Request raw mode on [`enter`](Self::enter), needed for single-key input.
    pub fn with_raw_mode(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    pub fn enter(&mut self) -> Result<()> {
        if self.raw {
            terminal::enable_raw_mode()?;
        }
        self.buf.clear();
        if self.mode == ScreenMode::Screen {
            self.buf.queue(terminal::EnterAlternateScreen)?;
            self.buf.queue(cursor::Hide)?;
        }
        self.flush_buf()?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        if self.mode == ScreenMode::Screen {
            self.buf.queue(SetAttribute(Attribute::Reset))?;
            self.buf.queue(cursor::Show)?;
            self.buf.queue(terminal::LeaveAlternateScreen)?;
        }
        self.flush_buf()?;
        if self.raw {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    /// Draw one frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.mode {
            ScreenMode::Plain => encode_plain_into(fb, self.raw, &mut self.buf)?,
            ScreenMode::Screen => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()
    }

    /// Print a single message line outside of a frame.
    pub fn message(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print(line_end(self.raw)))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the renderer and return the writer (for tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn line_end(raw: bool) -> &'static str {
    // Raw mode disables the terminal's newline translation.
    if raw {
        "\r\n"
    } else {
        "\n"
    }
}

/// Encode a frame as plain text lines into `out`.
pub fn encode_plain_into(fb: &FrameBuffer, raw: bool, out: &mut Vec<u8>) -> Result<()> {
    let mut line = String::with_capacity(fb.width() as usize);
    for y in 0..fb.height() {
        line.clear();
        fb.line_into(y, &mut line);
        out.extend_from_slice(line.as_bytes());
        out.extend_from_slice(line_end(raw).as_bytes());
    }
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}
