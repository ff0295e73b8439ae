//! Output sink for `print`.
//!
//! Output can go to stdout (the default), to an in-memory buffer (tests,
//! embedders) or nowhere. Enum dispatch keeps the set closed.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for program output.
pub enum PrintHandler {
    /// Writes to stdout.
    Stdout,
    /// Captures output in memory.
    Buffer(Mutex<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandler {
    /// Write `msg` with no line terminator.
    pub fn print(&self, msg: &str) {
        match self {
            // A closed stdout is not the program's concern.
            Self::Stdout => {
                let _ = std::io::stdout().lock().write_all(msg.as_bytes());
            }
            Self::Buffer(buf) => buf.lock().push_str(msg),
            Self::Silent => {}
        }
    }

    /// Write `msg` followed by a line terminator.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let _ = writeln!(std::io::stdout().lock(), "{msg}");
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Clear captured output. No-op for handlers that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Print handler shared between the interpreter and its embedder.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
