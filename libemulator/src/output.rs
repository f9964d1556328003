use std::io::{self, Write};

use libisa::Word;

/// Destination of the values printed by `PRN`.
pub trait Output {
    fn emit(&mut self, value: Word) -> io::Result<()>;
}

impl Output for Vec<Word> {
    fn emit(&mut self, value: Word) -> io::Result<()> {
        self.push(value);
        Ok(())
    }
}

/// Writes every value in decimal on its own line.
pub struct WriteOutput<W>(W)
where
    W: Write;

impl<W> WriteOutput<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W> Output for WriteOutput<W>
where
    W: Write,
{
    fn emit(&mut self, value: Word) -> io::Result<()> {
        writeln!(self.0, "{}", value)?;
        self.0.flush()
    }
}
