//! Message writer implementation

use crate::engine::{LogLevel, Message};
use crate::error::Result;
use crate::types::JsonValue;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output rendering for messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One JSON message per line
    #[default]
    Json,
    /// Human-readable output
    Pretty,
}

/// Convert a message to its wire JSON form
pub fn message_to_json(message: &Message) -> JsonValue {
    match message {
        Message::Record { stream, record } => serde_json::json!({
            "type": "RECORD",
            "stream": stream,
            "record": record,
        }),
        Message::State { stream, data } => serde_json::json!({
            "type": "STATE",
            "stream": stream,
            "value": data,
        }),
        Message::Log { level, message } => serde_json::json!({
            "type": "LOG",
            "log": {
                "level": level_name(*level),
                "message": message,
            }
        }),
    }
}

fn level_name(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "DEBUG",
        LogLevel::Info => "INFO",
        LogLevel::Warn => "WARN",
        LogLevel::Error => "ERROR",
    }
}

/// Writes engine messages to an output sink
pub struct MessageWriter<W: Write> {
    writer: W,
    format: Format,
}

impl MessageWriter<io::Stdout> {
    /// Writer targeting stdout
    pub fn stdout(format: Format) -> Self {
        Self {
            writer: io::stdout(),
            format,
        }
    }
}

impl MessageWriter<BufWriter<File>> {
    /// Writer targeting a file (created or truncated)
    pub fn to_file(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self {
            writer: BufWriter::new(file),
            format,
        })
    }
}

impl<W: Write> MessageWriter<W> {
    /// Create a writer over any sink
    pub fn new(writer: W, format: Format) -> Self {
        Self { writer, format }
    }

    /// Write a single message
    pub fn write(&mut self, message: &Message) -> Result<()> {
        match self.format {
            Format::Json => {
                let line = serde_json::to_string(&message_to_json(message))?;
                writeln!(self.writer, "{line}")?;
            }
            Format::Pretty => match message {
                Message::Record { stream, record } => {
                    writeln!(self.writer, "[{stream}] {record}")?;
                }
                Message::State { stream, data } => {
                    writeln!(self.writer, "--- state[{stream}]: {data}")?;
                }
                Message::Log { level, message } => {
                    writeln!(self.writer, "{}: {message}", level_name(*level))?;
                }
            },
        }
        Ok(())
    }

    /// Write a batch of messages
    pub fn write_all(&mut self, messages: &[Message]) -> Result<()> {
        for message in messages {
            self.write(message)?;
        }
        self.flush()
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
