use crate::config::SourceConfig;
use directories::BaseDirs;
use std::env;
use std::path::PathBuf;

pub mod command;
pub mod desktop;
pub mod entry;
pub mod icon;

const DEFAULT_XDG_DATA_DIRS: &str = "/usr/local/share/:/usr/share/";

/// XDG data directories: the user data home first, then `$XDG_DATA_DIRS`.
pub fn data_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(base_dirs) = BaseDirs::new() {
        dirs.push(base_dirs.data_dir().to_path_buf());
    }
    dirs.extend(split_data_dirs(env::var("XDG_DATA_DIRS").ok().as_deref()));
    dirs
}

fn split_data_dirs(value: Option<&str>) -> Vec<PathBuf> {
    let value = value.filter(|v| !v.is_empty()).unwrap_or(DEFAULT_XDG_DATA_DIRS);
    value
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Directories searched for desktop files, duplicates removed.
pub fn application_dirs(config: &SourceConfig, data_dirs: Vec<PathBuf>) -> Vec<PathBuf> {
    let candidates = data_dirs
        .into_iter()
        .map(|dir| dir.join(&config.applications_subdir))
        .chain(config.extra_dirs.iter().cloned());

    let mut dirs: Vec<PathBuf> = Vec::new();
    for dir in candidates {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}
