//! Log writer module
//!
//! Thread-safe log writing to stdout/stderr or configured files.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to file
    File(File),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Access/info log target
    access: Mutex<LogTarget>,
    /// Error log target
    error: Mutex<LogTarget>,
}

impl LogWriter {
    /// Create a new log writer with optional file paths
    fn new(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        let access = match access_log_file {
            Some(path) => LogTarget::File(open_log_file(path)?),
            None => LogTarget::Stdout,
        };

        let error = match error_log_file {
            Some(path) => LogTarget::File(open_log_file(path)?),
            None => LogTarget::Stderr,
        };

        Ok(Self {
            access: Mutex::new(access),
            error: Mutex::new(error),
        })
    }

    /// Write to access log
    pub fn write_access(&self, message: &str) {
        if let Ok(mut target) = self.access.lock() {
            write_to_target(&mut target, message);
        }
    }

    /// Write info message (to access log target)
    pub fn write_info(&self, message: &str) {
        self.write_access(message);
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        if let Ok(mut target) = self.error.lock() {
            write_to_target(&mut target, message);
        }
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write message to log target
fn write_to_target(target: &mut LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => println!("{message}"),
        LogTarget::Stderr => eprintln!("{message}"),
        LogTarget::File(file) => {
            let _ = writeln!(file, "{message}");
        }
    }
}

/// Initialize the global log writer
///
/// Should be called once at application startup. Returns an error if a
/// configured log file cannot be opened.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(access_log_file, error_log_file)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer
///
/// Panics if `init()` has not been called.
pub fn get() -> &'static LogWriter {
    LOG_WRITER
        .get()
        .expect("Log writer not initialized. Call logger::init() first.")
}

/// Check if the log writer has been initialized
pub fn is_initialized() -> bool {
    LOG_WRITER.get().is_some()
}
