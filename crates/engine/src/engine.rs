//! Engine module - spawn, per-tick update, locking and game over
//!
//! The engine owns the board and the single active piece. The active piece is
//! always written into the board between ticks, so a renderer reading the
//! board sees the falling piece too. Each tick erases it, applies the command,
//! lets gravity act once, and writes it back (locked or not).

use crate::core::{Board, Piece, Randomizer, SimpleRng};
use crate::types::{Command, Direction, Phase, TickOutcome};

/// Everything one tick did, for callers that log or render status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub command: Command,
    pub outcome: TickOutcome,
    /// A rotation was rolled back because the rotated piece collided.
    pub rotation_blocked: bool,
    /// A lateral move was undone because it hit a wall or locked cell.
    pub move_blocked: bool,
    /// The piece as it stands after the tick (the new piece after a lock).
    pub piece: Option<Piece>,
}

/// Clamp the piece's column so its occupied span lies inside `[0, width)`.
///
/// The right wall is checked first; the left wall only when the right one
/// did not apply. Returns whether the column changed.
pub fn clamp_column(piece: &mut Piece, width: u16) -> bool {
    let width = width as i32;
    if piece.rightmost_column() >= width {
        piece.set_column(width - piece.right_column() - 1);
        true
    } else if piece.leftmost_column() < 0 {
        piece.set_column(-piece.left_column());
        true
    } else {
        false
    }
}

/// Falling-block game engine
#[derive(Debug, Clone)]
pub struct Engine<R: Randomizer = SimpleRng> {
    board: Board,
    active: Option<Piece>,
    rng: R,
    phase: Phase,
    /// Ticks that advanced the game (terminal ticks are not counted).
    ticks: u64,
    /// Pieces drawn, including one whose spawn ended the game.
    pieces_spawned: u64,
    /// The piece whose spawn collided, kept for the final report.
    blocked_spawn: Option<Piece>,
}

impl Engine<SimpleRng> {
    /// Create an engine driven by the seeded LCG.
    pub fn from_seed(width: u16, height: u16, seed: u32) -> Self {
        Self::new(width, height, SimpleRng::new(seed))
    }
}

impl<R: Randomizer> Engine<R> {
    /// Create an engine with an empty board. No piece is active until the
    /// first [`spawn`](Self::spawn) or [`tick`](Self::tick).
    pub fn new(width: u16, height: u16, rng: R) -> Self {
        Self::with_board(Board::new(width, height), rng)
    }

    /// Create an engine over an existing board.
    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            board,
            active: None,
            rng,
            phase: Phase::NoActivePiece,
            ticks: 0,
            pieces_spawned: 0,
            blocked_spawn: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pieces_spawned(&self) -> u64 {
        self.pieces_spawned
    }

    /// The piece that could not enter the board, once the game is over.
    pub fn blocked_spawn(&self) -> Option<Piece> {
        self.blocked_spawn
    }

    /// Spawn a new random piece above the visible area.
    ///
    /// The piece's bottom occupied row lands on board row 0 and its column is
    /// random, clamped inside the walls. If that position already collides
    /// downward the game is over and the piece is not written.
    pub fn spawn(&mut self) -> Phase {
        if self.phase == Phase::GameOver {
            return self.phase;
        }

        let mut piece = Piece::spawn_random(&mut self.rng);
        piece.set_row(-piece.bottom_row());
        let column = self.rng.next_below(self.board.width() as u32) as i32;
        piece.set_column(column);
        clamp_column(&mut piece, self.board.width());
        self.pieces_spawned += 1;

        if self.board.collides(&piece, Direction::Down) {
            self.active = None;
            self.blocked_spawn = Some(piece);
            self.phase = Phase::GameOver;
            return self.phase;
        }

        self.board.write(&piece);
        self.active = Some(piece);
        self.phase = Phase::ActivePiece;
        self.phase
    }

    /// Advance the game by one command plus one gravity step.
    ///
    /// With no active piece this only spawns. After game over it is a no-op
    /// that keeps reporting [`TickOutcome::GameOver`].
    pub fn tick(&mut self, command: Command) -> TickReport {
        let mut report = TickReport {
            command,
            outcome: TickOutcome::GameOver,
            rotation_blocked: false,
            move_blocked: false,
            piece: None,
        };

        let mut piece = match (self.phase, self.active) {
            (Phase::GameOver, _) => return report,
            (Phase::ActivePiece, Some(piece)) => piece,
            _ => {
                self.ticks += 1;
                report.outcome = match self.spawn() {
                    Phase::GameOver => TickOutcome::GameOver,
                    _ => TickOutcome::Spawned,
                };
                report.piece = self.active;
                return report;
            }
        };
        self.ticks += 1;

        self.board.clear(&piece);

        match command {
            Command::RotateCw => report.rotation_blocked = self.rotate(&mut piece, true),
            Command::RotateCcw => report.rotation_blocked = self.rotate(&mut piece, false),
            Command::MoveLeft => {
                piece.move_left();
                if self.board.collides(&piece, Direction::Left) {
                    piece.move_right();
                    report.move_blocked = true;
                }
            }
            Command::MoveRight => {
                piece.move_right();
                if self.board.collides(&piece, Direction::Right) {
                    piece.move_left();
                    report.move_blocked = true;
                }
            }
            Command::None => {}
        }

        piece.move_down();

        if self.board.collides(&piece, Direction::Down) {
            piece.move_up();
            self.board.write(&piece);
            self.active = None;
            self.phase = Phase::NoActivePiece;

            report.outcome = match self.spawn() {
                Phase::GameOver => TickOutcome::GameOver,
                _ => TickOutcome::Locked,
            };
        } else {
            self.board.write(&piece);
            self.active = Some(piece);
            report.outcome = TickOutcome::Fell;
        }

        report.piece = self.active;
        report
    }

    /// Rotate, re-clamp against the walls, and roll back if the result
    /// collides downward. Returns whether the rotation was rolled back.
    ///
    /// Only the downward probe guards rotation: it catches the floor and any
    /// locked-cell overlap in the rotated footprint, while the side walls rely
    /// on the clamp alone.
    fn rotate(&self, piece: &mut Piece, clockwise: bool) -> bool {
        let prior_column = piece.column();
        if clockwise {
            piece.rotate_cw();
        } else {
            piece.rotate_ccw();
        }
        clamp_column(piece, self.board.width());

        if self.board.collides(piece, Direction::Down) {
            if clockwise {
                piece.rotate_ccw();
            } else {
                piece.rotate_cw();
            }
            piece.set_column(prior_column);
            return true;
        }
        false
    }
}
