//! Screen capability injected into the driver loop
//!
//! The driver never touches stdout directly. A real run uses
//! [`CrosstermTerminal`]; tests use [`RecordingTerminal`] to observe frames
//! without a terminal attached.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::errors::LifeError;
use crate::render::Frame;

pub trait TerminalController {
    /// Clears any previous output. Calling it twice in a row is harmless.
    fn clear(&mut self) -> Result<(), LifeError>;

    fn draw(&mut self, frame: &Frame) -> Result<(), LifeError>;
}

/// Terminal backed by crossterm, writing to any `Write` sink (stdout by default).
///
/// The cursor is hidden for the lifetime of the value and shown again on drop.
pub struct CrosstermTerminal<W: Write = io::Stdout> {
    out: W,
}

impl CrosstermTerminal<io::Stdout> {
    pub fn stdout() -> Result<Self, LifeError> {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(mut out: W) -> Result<Self, LifeError> {
        out.queue(cursor::Hide).map_err(terminal_error)?;
        out.flush().map_err(terminal_error)?;
        Ok(Self { out })
    }
}

impl<W: Write> TerminalController for CrosstermTerminal<W> {
    fn clear(&mut self) -> Result<(), LifeError> {
        self.out
            .queue(Clear(ClearType::All))
            .and_then(|out| out.queue(cursor::MoveTo(0, 0)))
            .map_err(terminal_error)?;
        self.out.flush().map_err(terminal_error)
    }

    fn draw(&mut self, frame: &Frame) -> Result<(), LifeError> {
        for line in frame.lines() {
            self.out
                .queue(Print(line))
                .and_then(|out| out.queue(Print("\n")))
                .map_err(terminal_error)?;
        }
        self.out.flush().map_err(terminal_error)
    }
}

impl<W: Write> Drop for CrosstermTerminal<W> {
    fn drop(&mut self) {
        let _ = self.out.queue(cursor::Show);
        let _ = self.out.flush();
    }
}

fn terminal_error(err: io::Error) -> LifeError {
    LifeError::TerminalError(err.to_string())
}

/// In-memory terminal that keeps every drawn frame.
#[derive(Debug, Default)]
pub struct RecordingTerminal {
    pub clears: usize,
    pub frames: Vec<Frame>,
}

impl TerminalController for RecordingTerminal {
    fn clear(&mut self) -> Result<(), LifeError> {
        self.clears += 1;
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) -> Result<(), LifeError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
