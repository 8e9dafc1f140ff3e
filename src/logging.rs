//! Browser Console Logging
//!
//! Routes `tracing` output through a `fmt` subscriber whose writer emits
//! one console call per formatted event.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and sends it to the console on drop
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// Drain the buffered line, without the trailing newline
    fn take_line(&mut self) -> Option<String> {
        let bytes = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&bytes);
        let line = line.trim_end();
        (!line.is_empty()).then(|| line.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = self.take_line() else { return };
        let line = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::debug_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Install the console subscriber. Timestamps are off: wasm has no clock
/// behind `SystemTime`.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .try_init();

    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[LOG] subscriber already installed: {}", err).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_take_line_trims_newline() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writeln!(writer, " INFO kanban_board: board loaded tickets=3").unwrap();
        assert_eq!(
            writer.take_line().as_deref(),
            Some(" INFO kanban_board: board loaded tickets=3")
        );
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_partial_writes_accumulate() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"first ").unwrap();
        writer.write_all(b"second\n").unwrap();
        assert_eq!(writer.take_line().as_deref(), Some("first second"));
    }

    #[test]
    fn test_blank_output_is_skipped() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        writer.write_all(b"\n").unwrap();
        assert_eq!(writer.take_line(), None);
    }
}
