//! Global file logger for stardeck
//!
//! Appends timestamped lines to `~/.stardeck/stardeck.log`. Logging failures
//! never surface to the presentation: if the logger was never initialized or
//! the write fails, the call is a silent no-op.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

use super::error::{StardeckError, StardeckResult};

static LOGGER: OnceLock<Mutex<File>> = OnceLock::new();

/// Resolve the log file location under the user's home directory.
fn log_path() -> StardeckResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| StardeckError::Logger("home directory not found".to_string()))?;
    Ok(home.join(".stardeck").join("stardeck.log"))
}

/// Initialize the global logger.
///
/// Creates `~/.stardeck/` if needed and opens the log file in append mode.
/// Calling this more than once is harmless; the first initialization wins.
pub fn init_global_logger() -> StardeckResult<()> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let _ = LOGGER.set(Mutex::new(file));
    Ok(())
}

fn write_line(level: &str, msg: &str) {
    if let Some(lock) = LOGGER.get() {
        if let Ok(mut file) = lock.lock() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let _ = writeln!(file, "[{}] {} {}", timestamp, level, msg);
        }
    }
}

/// Log an informational message.
pub fn info(msg: &str) {
    write_line("INFO ", msg);
}

/// Log a debug message. Gating on `STARDECK_DEBUG` is the caller's job
/// (see `utils::debug`); this writes unconditionally once initialized.
pub fn debug(msg: &str) {
    write_line("DEBUG", msg);
}

/// Log a warning.
pub fn warn(msg: &str) {
    write_line("WARN ", msg);
}

/// Log an error.
pub fn error(msg: &str) {
    write_line("ERROR", msg);
}
