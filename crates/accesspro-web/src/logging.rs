#![forbid(unsafe_code)]

//! Route `tracing` output to the browser console.

use std::io;

use accesspro_core::config::LogLevel;
use tracing::level_filters::LevelFilter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and logs it on drop.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    }
}

/// Install the console subscriber. A second call (or a host that already
/// installed its own subscriber) leaves the existing one in place.
pub(crate) fn init(level: &LogLevel) {
    let filter = level.filter().unwrap_or(LevelFilter::INFO);
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_target(false)
        .with_max_level(filter)
        .try_init();
}
