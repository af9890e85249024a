//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/shrine/logs`
/// - Linux: `~/.cache/shrine/logs` (or `$XDG_CACHE_HOME/shrine/logs`)
/// - Windows: `%LOCALAPPDATA%\shrine\logs`
/// - Fallback: `/tmp/shrine/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "shrine")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/shrine"))
        .join("logs")
}
