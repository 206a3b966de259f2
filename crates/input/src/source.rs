//! Command sources: where the input loop pulls its next command from.
//!
//! Every source blocks until it has one command or knows input has ended.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, parse_command, should_quit};
use crate::types::Command;

/// Supplies one command per call.
pub trait CommandSource {
    /// Next command, or `Ok(None)` once input has ended.
    fn next_command(&mut self) -> Result<Option<Command>>;
}

impl<S: CommandSource + ?Sized> CommandSource for Box<S> {
    fn next_command(&mut self) -> Result<Option<Command>> {
        (**self).next_command()
    }
}

/// Reads one command per text line.
///
/// By default unrecognized lines are skipped and reading continues until a
/// real command arrives. With idle ticks enabled they are delivered as
/// [`Command::None`] instead, so a bare Enter lets the piece fall.
pub struct LineSource<R> {
    reader: R,
    idle_ticks: bool,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            idle_ticks: false,
            line: String::with_capacity(64),
        }
    }

    pub fn with_idle_ticks(mut self, idle_ticks: bool) -> Self {
        self.idle_ticks = idle_ticks;
        self
    }
}

impl LineSource<StdinLock<'static>> {
    /// Line source over the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CommandSource for LineSource<R> {
    fn next_command(&mut self) -> Result<Option<Command>> {
        loop {
            self.line.clear();
            let n = self
                .reader
                .read_line(&mut self.line)
                .context("failed to read command line")?;
            if n == 0 {
                return Ok(None);
            }

            let command = parse_command(&self.line);
            if command != Command::None || self.idle_ticks {
                return Ok(Some(command));
            }
        }
    }
}

/// Reads single key presses from the terminal.
///
/// The terminal must already be in raw mode. Quit keys end input.
#[derive(Debug, Default)]
pub struct KeySource;

impl KeySource {
    pub fn new() -> Self {
        Self
    }
}

impl CommandSource for KeySource {
    fn next_command(&mut self) -> Result<Option<Command>> {
        loop {
            let Event::Key(key) = event::read().context("failed to read terminal event")? else {
                continue;
            };
            // Terminal auto-repeat arrives as Repeat; each one is a real tick.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if should_quit(key) {
                return Ok(None);
            }
            if let Some(command) = handle_key_event(key) {
                return Ok(Some(command));
            }
        }
    }
}

/// Replays a fixed list of commands, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptSource {
    commands: VecDeque<Command>,
}

impl ScriptSource {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl CommandSource for ScriptSource {
    fn next_command(&mut self) -> Result<Option<Command>> {
        Ok(self.commands.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drain(source: &mut impl CommandSource) -> Vec<Command> {
        let mut out = Vec::new();
        while let Some(c) = source.next_command().unwrap() {
            out.push(c);
        }
        out
    }

    #[test]
    fn test_line_source_skips_unrecognized_lines() {
        let mut source = LineSource::new(Cursor::new("a\n\nxyz\n D \ns"));
        assert_eq!(
            drain(&mut source),
            vec![Command::MoveLeft, Command::MoveRight, Command::RotateCw]
        );
    }

    #[test]
    fn test_line_source_idle_ticks_yield_none() {
        let mut source = LineSource::new(Cursor::new("a\n\nxyz\n")).with_idle_ticks(true);
        assert_eq!(
            drain(&mut source),
            vec![Command::MoveLeft, Command::None, Command::None]
        );
    }

    #[test]
    fn test_line_source_end_of_input() {
        let mut source = LineSource::new(Cursor::new("junk\nmore junk\n"));
        assert_eq!(source.next_command().unwrap(), None);
        assert_eq!(source.next_command().unwrap(), None);
    }

    #[test]
    fn test_script_source_replays_in_order() {
        let mut source = ScriptSource::new([Command::RotateCcw, Command::None]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(drain(&mut source), vec![Command::RotateCcw, Command::None]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut source: Box<dyn CommandSource> =
            Box::new(ScriptSource::new([Command::MoveRight]));
        assert_eq!(source.next_command().unwrap(), Some(Command::MoveRight));
        assert_eq!(source.next_command().unwrap(), None);
    }
}
