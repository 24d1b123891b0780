//! Terminal 2048 runner (default binary).
//!
//! Full-screen mode uses crossterm for input and the framebuffer renderer.
//! With `TWENTY48_PLAIN=1` the game runs line by line on stdin/stdout instead.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::config::GameConfig;
use tui_2048::core::{Engine, EngineError};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging;
use tui_2048::plain::run_plain;
use tui_2048::term::{FrameBuffer, GameStatus, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let logger = logging::init(&config)?;
    if logger.is_none() {
        for warning in &config.warnings {
            eprintln!("warning: {warning}");
        }
    }

    let mut engine = config.build_engine()?;
    info!(
        "starting {}x{} game (seed {:?}, spawn {})",
        config.size,
        config.size,
        config.seed,
        config.spawn_policy.as_str()
    );

    if config.plain {
        let exit = run_plain(&mut engine, io::stdin().lock(), io::stdout().lock())?;
        info!("plain mode finished: {exit:?}");
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status = GameStatus::Playing;
    let mut moves = 0u32;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(engine.grid(), status, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("player quit after {moves} moves");
                    return Ok(());
                }

                // Any key leaves the final board.
                if status == GameStatus::Lost {
                    return Ok(());
                }

                if let Some(direction) = handle_key_event(key) {
                    match engine.next(direction) {
                        Ok(_) => moves += 1,
                        Err(EngineError::Lost) => {
                            info!(
                                "game lost after {moves} moves, best tile {}",
                                engine.grid().max_tile()
                            );
                            status = GameStatus::Lost;
                        }
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
