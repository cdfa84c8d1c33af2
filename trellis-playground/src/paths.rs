//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "trellis";
const APPLICATION: &str = "trellis";

/// Name of the log file written by the running process.
const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/trellis` or `~/.cache/trellis`
/// - macOS: `~/Library/Caches/dev.trellis.trellis`
/// - Windows: `C:\Users\<User>\AppData\Local\trellis\trellis\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory for the settings file.
///
/// - Linux: `$XDG_CONFIG_HOME/trellis` or `~/.config/trellis`
/// - macOS: `~/Library/Application Support/dev.trellis.trellis`
/// - Windows: `C:\Users\<User>\AppData\Roaming\trellis\trellis\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the settings file.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rotate logs: rename latest.log to a timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache);
}

/// Rotate logs inside an explicit directory.
pub fn rotate_logs_in(dir: &Path) {
    let latest = dir.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = dir.join(format!("{}.log", timestamp));
        if let Err(e) = fs::rename(&latest, &archived) {
            eprintln!("could not archive {}: {}", latest.display(), e);
        }
    }

    cleanup_old_logs(dir);
}

/// Remove old log files, keeping only the most recent MAX_OLD_LOGS.
fn cleanup_old_logs(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("trellis-paths-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = scratch_dir("archive");
        fs::write(dir.join(LATEST_LOG), "old run").unwrap();

        rotate_logs_in(&dir);

        assert!(!dir.join(LATEST_LOG).exists());
        let archived: Vec<_> = fs::read_dir(&dir).unwrap().filter_map(|e| e.ok()).collect();
        assert_eq!(archived.len(), 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_cleanup_keeps_most_recent() {
        let dir = scratch_dir("cleanup");
        for i in 0..(MAX_OLD_LOGS + 3) {
            fs::write(dir.join(format!("2026010{}_{:06}.log", i % 10, i)), "x").unwrap();
        }
        fs::write(dir.join("notes.txt"), "keep").unwrap();

        cleanup_old_logs(&dir);

        let logs = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".log"))
            .count();
        assert_eq!(logs, MAX_OLD_LOGS);
        assert!(dir.join("notes.txt").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
