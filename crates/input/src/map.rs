//! Mapping from raw input (text lines or terminal keys) to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map one line of text input to a command.
///
/// Surrounding whitespace is ignored and letters match case-insensitively.
/// Anything unrecognized becomes [`Command::None`].
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("a") {
        Command::MoveLeft
    } else if trimmed.eq_ignore_ascii_case("d") {
        Command::MoveRight
    } else if trimmed.eq_ignore_ascii_case("w") {
        Command::RotateCcw
    } else if trimmed.eq_ignore_ascii_case("s") {
        Command::RotateCw
    } else {
        Command::None
    }
}

/// Map a terminal key press to a command.
///
/// Letters follow the line mapping; arrow keys are offered as aliases.
/// Keys with no meaning return `None` so the caller can skip them.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::RotateCcw),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::RotateCw),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::None),
        _ => None,
    }
}

/// Check if key should end the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || (key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL))
}
