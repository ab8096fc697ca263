//! Timestamped log reporter
//!
//! An explicitly constructed logging handle owned by the verifier. There is
//! no global logger: tests inject their own sink and read the transcript
//! back.

use chrono::Local;
use colored::Colorize;
use std::io::{self, Write};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes `<timestamp> - <level> - <message>` lines to a sink
pub struct Reporter {
    sink: Box<dyn Write + Send>,
}

impl Reporter {
    /// Reporter writing to the given sink
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self { sink }
    }

    /// Reporter writing to standard error (the default for the CLI)
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    /// Log an informational line
    pub fn info(&mut self, message: &str) {
        self.log(&"INFO".green().to_string(), message);
    }

    /// Log an error line
    pub fn error(&mut self, message: &str) {
        self.log(&"ERROR".red().to_string(), message);
    }

    /// Emit a raw line without the timestamp/level prefix (summary blocks)
    pub fn plain(&mut self, message: &str) {
        // Logging is best effort, a broken sink must not fail a check
        let _ = writeln!(self.sink, "{message}");
        let _ = self.sink.flush();
    }

    fn log(&mut self, level: &str, message: &str) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let _ = writeln!(self.sink, "{timestamp} - {level} - {message}");
        let _ = self.sink.flush();
    }
}
