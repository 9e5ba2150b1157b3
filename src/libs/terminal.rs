use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute, queue,
    terminal::{Clear, ClearType, SetTitle},
};
use std::fmt::Display;
use std::io::{self, Write};

/// Sets the terminal window title.
pub fn set_title(title: &str) -> Result<()> {
    execute!(io::stdout(), SetTitle(title))?;
    Ok(())
}

/// A redrawable text screen.
///
/// The tracking display repaints the whole screen on every tick, so the
/// writer is owned by whoever is drawing.
pub struct Screen {
    out: Box<dyn Write + Send>,
}

impl Screen {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Clears the screen and draws `lines` from the top-left corner.
    pub fn redraw<T: Display>(&mut self, lines: &[T]) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in lines {
            write!(self.out, "{}\r\n", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
