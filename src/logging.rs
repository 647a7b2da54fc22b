//! Console Logging
//!
//! Backs the `log` facade with the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_line(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[art_quiz_ui::api] GET /api/western/artworks -> 200`
pub fn format_line(record: &Record) -> String {
    format!("[{}] {}", record.target(), record.args())
}

/// Install the console logger. Calling it twice keeps the first logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_tags_target() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("loaded {} artworks", 3))
                .level(Level::Info)
                .target("art_quiz_ui::catalog")
                .build(),
        );
        assert_eq!(line, "[art_quiz_ui::catalog] loaded 3 artworks");
    }
}
