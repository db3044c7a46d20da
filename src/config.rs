//! Startup settings. Everything is derived from where the binary lives;
//! there are no flags, environment variables or config files.

use simplelog::LevelFilter;
use std::path::{Path, PathBuf};

pub const SAVE_FILE_NAME: &str = "save.json";
pub const LOG_FILE_NAME: &str = "todo.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub save_path: PathBuf,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    /// Resolve paths next to the running executable, or the current
    /// directory if the executable path is unavailable.
    pub fn resolve() -> Self {
        let exe = std::env::current_exe().ok();
        let dir = exe
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(&dir)
    }

    pub fn in_dir(dir: &Path) -> Self {
        let log_level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self {
            save_path: dir.join(SAVE_FILE_NAME),
            log_path: dir.join(LOG_FILE_NAME),
            log_level,
        }
    }
}
