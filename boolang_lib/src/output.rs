use anyhow::{Context, Result};
use std::io::Write;

/// Side channel receiving the value of every `print` statement, in
/// program order.
pub trait Output {
    fn emit(&mut self, value: bool) -> Result<()>;
}

impl Output for Vec<bool> {
    fn emit(&mut self, value: bool) -> Result<()> {
        self.push(value);
        Ok(())
    }
}

/// Writes one `true`/`false` line per printed value.
pub struct WriteOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriteOutput<W> {
    pub fn new(writer: W) -> Self {
        WriteOutput { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for WriteOutput<W> {
    fn emit(&mut self, value: bool) -> Result<()> {
        writeln!(self.writer, "{}", value)
            .and_then(|_| self.writer.flush())
            .context("Error writing output")
    }
}
