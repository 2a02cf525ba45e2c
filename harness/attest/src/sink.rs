//! Report output channels.

use parking_lot::Mutex;

/// Where report lines go.
///
/// `Stdout` writes through for command-line runs. `Buffer` captures into a
/// shared string for embedding and tests, and `Silent` drops everything.
#[derive(Debug)]
pub enum ReportSink {
    /// Write lines to standard output.
    Stdout,
    /// Capture lines into a buffer.
    Buffer(Mutex<String>),
    /// Discard lines.
    Silent,
}

impl ReportSink {
    /// Sink that writes to standard output.
    pub fn stdout() -> Self {
        ReportSink::Stdout
    }

    /// Sink that captures lines into a buffer.
    pub fn buffer() -> Self {
        ReportSink::Buffer(Mutex::new(String::new()))
    }

    /// Sink that discards all lines.
    pub fn silent() -> Self {
        ReportSink::Silent
    }

    /// Write one line, with a trailing newline.
    pub fn line(&self, text: &str) {
        match self {
            ReportSink::Stdout => println!("{text}"),
            ReportSink::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(text);
                buffer.push('\n');
            }
            ReportSink::Silent => {}
        }
    }

    /// Captured text, empty unless this is a `Buffer` sink.
    pub fn captured(&self) -> String {
        match self {
            ReportSink::Buffer(buffer) => buffer.lock().clone(),
            ReportSink::Stdout | ReportSink::Silent => String::new(),
        }
    }

    /// Discard any captured text.
    pub fn clear(&self) {
        if let ReportSink::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}
