//! I/O handling

use std::fmt;
use std::io::{self, Write};

/// Output sink for PRN
///
/// Without a writer, values are recorded in memory. With a writer, each value
/// is written as a decimal line and flushed before the next instruction runs,
/// and nothing is retained.
pub struct IOHandler {
    outputs: Vec<u8>,
    writer: Option<Box<dyn Write + Send>>,
}

impl IOHandler {
    pub fn new() -> Self {
        IOHandler {
            outputs: Vec::new(),
            writer: None,
        }
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        IOHandler {
            outputs: Vec::new(),
            writer: Some(writer),
        }
    }

    /// Echo every value to stdout
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn write(&mut self, value: u8) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => {
                writeln!(writer, "{}", value)?;
                writer.flush()
            }
            None => {
                self.outputs.push(value);
                Ok(())
            }
        }
    }

    pub fn outputs(&self) -> &[u8] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.outputs)
    }
}

impl Default for IOHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IOHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IOHandler")
            .field("outputs", &self.outputs)
            .field("writer", &self.writer.is_some())
            .finish()
    }
}
