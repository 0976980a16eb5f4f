use std::io::Write;
use std::path::PathBuf;

const LOG_PATH_VAR: &str = "YGREP_WATCH_LOG";
const DEFAULT_LOG_PATH: &str = "/tmp/ygrep-watch.log";

/// Log file for debugging the session-start hook.
pub fn log_path() -> PathBuf {
    std::env::var(LOG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH))
}

/// Append a timestamped error line. Best-effort: if the log itself cannot be
/// written there is nowhere left to report, so the failure is swallowed.
pub fn append_error(message: &str) {
    if let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] Error: {}", timestamp, message);
    }
}
