//! Serial line log
//!
//! Writes each notice as one CRLF-terminated text line to any
//! `embedded-io` writer (typically a UART).

use core::fmt::Write as _;

use embedded_io::Write;
use heapless::String;
use ratchet_core::traits::EventSink;
use ratchet_core::Notice;

/// Longest line the sink formats, terminator included
pub const MAX_LINE_LEN: usize = 40;

/// Line sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// Formatted line did not fit the line buffer
    Overflow,
    /// Underlying writer failed
    Io,
}

/// Event sink writing text lines
pub struct LineSink<W> {
    writer: W,
    /// Lines written successfully
    lines: u32,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines written
    pub fn line_count(&self) -> u32 {
        self.lines
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Write an arbitrary line
    pub fn write_line(&mut self, text: &str) -> Result<(), SinkError> {
        self.writer.write_all(text.as_bytes()).map_err(|_| SinkError::Io)?;
        self.writer.write_all(b"\r\n").map_err(|_| SinkError::Io)?;
        self.writer.flush().map_err(|_| SinkError::Io)?;
        self.lines = self.lines.saturating_add(1);
        Ok(())
    }
}

impl<W: Write> EventSink for LineSink<W> {
    type Error = SinkError;

    fn record(&mut self, notice: Notice) -> Result<(), Self::Error> {
        let mut line: String<MAX_LINE_LEN> = String::new();
        write!(line, "{}", notice).map_err(|_| SinkError::Overflow)?;
        self.write_line(&line)
    }
}
