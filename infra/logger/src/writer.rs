use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// [`MakeWriter`] that routes each formatted event to the console method matching its level.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

/// Buffers one formatted event and emits it as a single console entry when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level, buffer: Vec::new() }
    }

    pub const fn level(&self) -> Level {
        self.level
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
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        emit(self.level, line.trim_end());
    }
}

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        _ => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    use std::io::Write;

    let _ = writeln!(io::stderr().lock(), "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn writer_buffers_until_dropped() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"first half, ").expect("write");
        writer.write_all(b"second half\n").expect("write");

        assert_eq!(writer.level(), Level::WARN);
        assert_eq!(writer.buffer, b"first half, second half\n");
    }

    #[test]
    fn default_writer_is_info() {
        assert_eq!(MakeConsoleWriter.make_writer().level(), Level::INFO);
    }
}
