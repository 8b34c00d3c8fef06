//! Log writer module
//!
//! Thread-safe line writing to stdout/stderr or to append-only files.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to file
    File(Mutex<File>),
}

/// Thread-safe log writer with separate output and error targets.
pub struct LogWriter {
    /// Info and access lines
    out: LogTarget,
    /// Warning and error lines
    err: LogTarget,
}

impl LogWriter {
    /// Create a new log writer with optional file paths.
    /// Without paths, output goes to stdout and errors to stderr.
    pub fn new(out_file: Option<&str>, err_file: Option<&str>) -> io::Result<Self> {
        let out = match out_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stdout,
        };
        let err = match err_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stderr,
        };
        Ok(Self { out, err })
    }

    /// Write a line to the output target.
    pub fn write_out(&self, line: &str) {
        write_to_target(&self.out, line);
    }

    /// Write a line to the error target.
    pub fn write_err(&self, line: &str) {
        write_to_target(&self.err, line);
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write a line to a log target
fn write_to_target(target: &LogTarget, line: &str) {
    match target {
        LogTarget::Stdout => {
            println!("{line}");
        }
        LogTarget::Stderr => {
            eprintln!("{line}");
        }
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{line}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_appends_lines() {
        let path = std::env::temp_dir().join(format!(
            "snippetd-writer-test-{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let writer = LogWriter::new(Some(path.to_str().unwrap()), None).unwrap();
        writer.write_out("first line");
        writer.write_out("second line");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("snippetd-writer-dirs-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested/server.log");

        let writer = LogWriter::new(None, Some(path.to_str().unwrap())).unwrap();
        writer.write_err("boom");

        assert!(path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
