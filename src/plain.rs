//! Line-based game loop for terminals without raw mode (or piped input).
//!
//! Prints the grid as text, asks for an arrow key followed by Enter, applies
//! the move and repeats until the game is lost or the input ends.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::info;
use rand::Rng;

use crate::core::{Engine, EngineError};
use crate::input::{parse_line, LineInput};
use crate::term::format_grid;

/// Why the plain loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlainExit {
    Lost,
    Quit,
    EndOfInput,
}

pub fn run_plain<G: Rng>(
    engine: &mut Engine<G>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<PlainExit> {
    let mut line = Vec::with_capacity(16);
    let mut moves = 0u32;

    loop {
        writeln!(out, "Current grid.")?;
        writeln!(out, "{}", format_grid(engine.grid()))?;

        let direction = loop {
            writeln!(out, "Press any arrow, then Enter.")?;
            out.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                info!("input closed after {moves} moves");
                return Ok(PlainExit::EndOfInput);
            }

            match parse_line(&line) {
                LineInput::Move(direction) => break direction,
                LineInput::Quit => {
                    info!("player quit after {moves} moves");
                    return Ok(PlainExit::Quit);
                }
                LineInput::Unknown => writeln!(out, "unknown input {:?}, try again.", line)?,
            }
        };

        writeln!(out)?;
        match engine.next(direction) {
            Ok(_) => moves += 1,
            Err(EngineError::Lost) => {
                info!(
                    "game lost after {moves} moves, best tile {}",
                    engine.grid().max_tile()
                );
                writeln!(out, "{}", format_grid(engine.grid()))?;
                writeln!(out, "******You lost the game!********")?;
                out.flush()?;
                return Ok(PlainExit::Lost);
            }
        }
    }
}
