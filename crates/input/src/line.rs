//! Line-based input for terminals that are not in raw mode.
//!
//! In cooked mode an arrow key arrives as its ANSI escape sequence and is only
//! delivered once the player presses Enter, e.g. `ESC [ C \n` for Right.
//! Words and single letters are accepted too, so the game can be driven from
//! a pipe.

use crate::types::Direction;

const ESC: u8 = 0x1b;

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineInput {
    Move(Direction),
    Quit,
    Unknown,
}

/// Parse one line of raw stdin bytes.
///
/// ```
/// use tui_2048_input::{parse_line, LineInput};
/// use tui_2048_input::types::Direction;
///
/// assert_eq!(parse_line(b"\x1b[C\n"), LineInput::Move(Direction::Right));
/// assert_eq!(parse_line(b"up\n"), LineInput::Move(Direction::Up));
/// assert_eq!(parse_line(b"q\n"), LineInput::Quit);
/// ```
pub fn parse_line(bytes: &[u8]) -> LineInput {
    let trimmed = trim_line_end(bytes);

    if let [ESC, b'[', code] = trimmed {
        return match *code {
            b'A' => LineInput::Move(Direction::Up),
            b'B' => LineInput::Move(Direction::Down),
            b'C' => LineInput::Move(Direction::Right),
            b'D' => LineInput::Move(Direction::Left),
            _ => LineInput::Unknown,
        };
    }

    let Ok(text) = std::str::from_utf8(trimmed) else {
        return LineInput::Unknown;
    };
    let text = text.trim().to_lowercase();

    if let Some(direction) = Direction::from_str(&text) {
        return LineInput::Move(direction);
    }

    match text.as_str() {
        "w" | "k" => LineInput::Move(Direction::Up),
        "s" | "j" => LineInput::Move(Direction::Down),
        "a" | "h" => LineInput::Move(Direction::Left),
        "d" | "l" => LineInput::Move(Direction::Right),
        "q" | "quit" | "exit" => LineInput::Quit,
        _ => LineInput::Unknown,
    }
}

fn trim_line_end(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 && matches!(bytes[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    &bytes[..end]
}
