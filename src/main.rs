//! Text-mode falling-block runner (default binary).
//!
//! Every command read advances the game by exactly one tick: there is no
//! timer, so the piece only falls when input arrives.

use anyhow::Result;

use line_tetris::config::{GameConfig, InputMode};
use line_tetris::engine::Engine;
use line_tetris::input::{CommandSource, KeySource, LineSource};
use line_tetris::term::{
    FrameBuffer, GameView, ScreenMode, StatusView, TerminalRenderer, GAME_OVER_MESSAGE,
};
use line_tetris::tick_log::TickLog;
use line_tetris::types::{Command, TickOutcome};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;

    eprintln!(
        "[Game] board {}x{} seed {} input {:?} screen {:?}",
        config.width, config.height, config.seed, config.input, config.screen
    );

    let mut term =
        TerminalRenderer::new(config.screen).with_raw_mode(config.input == InputMode::Keys);
    term.enter()?;

    let result = run(&config, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    let game_over = result?;
    if game_over && config.screen == ScreenMode::Screen {
        // The alternate screen is gone; repeat the verdict on the main one.
        println!("{GAME_OVER_MESSAGE}");
    }
    Ok(())
}

/// Play until game over or end of input. Returns whether the game ended.
fn run(config: &GameConfig, term: &mut TerminalRenderer) -> Result<bool> {
    let mut engine = Engine::from_seed(config.width, config.height, config.seed);
    let view = GameView::default().with_status(config.screen == ScreenMode::Screen);
    let mut fb = FrameBuffer::new(0, 0);

    let mut source: Box<dyn CommandSource> = match config.input {
        InputMode::Line => Box::new(LineSource::stdin().with_idle_ticks(config.idle_ticks)),
        InputMode::Keys => Box::new(KeySource::new()),
    };

    let mut log = match config.log_path.as_deref() {
        Some(path) => match TickLog::open(path) {
            Ok(log) => Some(log),
            Err(e) => {
                eprintln!("[Game] tick log disabled: {e:#}");
                None
            }
        },
        None => None,
    };

    // The first tick only brings a piece in, so it does not consume input.
    let mut command = Command::None;
    loop {
        let report = engine.tick(command);
        if let Some(log) = log.as_mut() {
            log.record(engine.ticks(), &report)?;
        }

        let status = StatusView {
            ticks: engine.ticks(),
            pieces: engine.pieces_spawned(),
            game_over: report.outcome == TickOutcome::GameOver,
        };
        view.render_into(engine.board(), &status, &mut fb);
        term.draw(&fb)?;

        if status.game_over {
            eprintln!(
                "[Game] over after {} ticks, {} pieces",
                engine.ticks(),
                engine.pieces_spawned()
            );
            break;
        }

        command = match source.next_command()? {
            Some(command) => command,
            None => {
                eprintln!("[Game] input ended");
                break;
            }
        };
    }

    if let Some(log) = log.as_mut() {
        log.flush()?;
    }
    Ok(engine.is_game_over())
}
