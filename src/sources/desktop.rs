use crate::config::SourceConfig;
use crate::error::{LauncherError, Result};
use crate::model::ApplicationRecord;
use crate::sources::command::{SearchPath, resolve_command};
use crate::sources::entry::{DesktopEntry, parse_desktop_entry};
use crate::sources::icon::resolve_icon;
use futures_util::future::join_all;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Scans desktop files across a set of application directories.
#[derive(Debug, Clone)]
pub struct DesktopSource {
    dirs: Vec<PathBuf>,
    extension: String,
    exclude_terminal_apps: bool,
    resolve_icons: bool,
    search_path: SearchPath,
}

impl DesktopSource {
    pub fn new(dirs: Vec<PathBuf>, config: &SourceConfig, search_path: SearchPath) -> Self {
        Self {
            dirs,
            extension: config.extension.clone(),
            exclude_terminal_apps: config.exclude_terminal_apps,
            resolve_icons: config.resolve_icons,
            search_path,
        }
    }

    /// Scans every directory concurrently and returns the searchable
    /// applications, unique by name and sorted by name.
    ///
    /// Unreadable directories contribute nothing.
    pub async fn scan(&self) -> Vec<ApplicationRecord> {
        let scans = join_all(self.dirs.iter().map(|dir| self.scan_directory(dir))).await;

        let mut discovered = 0usize;
        let mut seen = HashSet::new();
        let mut apps: Vec<ApplicationRecord> = scans
            .into_iter()
            .flat_map(|scan| match scan {
                Ok(records) => records,
                Err(err) => {
                    debug!("Skipping directory: {}", err);
                    Vec::new()
                }
            })
            .inspect(|_| discovered += 1)
            .filter(|record| record.is_searchable(self.exclude_terminal_apps))
            .filter(|record| seen.insert(record.name.clone()))
            .collect();

        apps.sort_by(|a, b| a.name.cmp(&b.name));
        info!("DesktopSource: {} entries parsed, {} searchable", discovered, apps.len());
        apps
    }

    /// Reads all desktop files of one directory concurrently.
    ///
    /// Fails only when the directory itself cannot be listed. A file that
    /// cannot be read is logged and left out.
    pub async fn scan_directory(&self, dir: &Path) -> Result<Vec<ApplicationRecord>> {
        debug!("Scanning desktop files in {:?}", dir);
        let read_dir_err = |source: std::io::Error| LauncherError::ReadDir { path: dir.to_path_buf(), source };

        let mut read_dir = fs::read_dir(dir).await.map_err(read_dir_err)?;
        let mut files = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(read_dir_err)? {
            let path = entry.path();
            if self.has_desktop_extension(&path) {
                files.push(path);
            }
        }
        files.sort();

        let reads = join_all(files.into_iter().map(|path| self.read_entry(path))).await;

        let mut records = Vec::new();
        for read in reads {
            match read {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(err) => warn!("{}", err),
            }
        }
        Ok(records)
    }

    /// Reads one desktop file. `Ok(None)` means the file has no
    /// `[Desktop Entry]` section.
    pub async fn read_entry(&self, path: PathBuf) -> Result<Option<ApplicationRecord>> {
        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| LauncherError::ReadEntry { path: path.clone(), source })?;

        match parse_desktop_entry(&content) {
            Some(entry) => Ok(Some(self.build_record(entry))),
            None => {
                debug!("{:?} is not an application entry", path);
                Ok(None)
            }
        }
    }

    fn build_record(&self, entry: DesktopEntry) -> ApplicationRecord {
        let exec_command = entry.exec.unwrap_or_default();
        let resolved_command = resolve_command(&exec_command, &self.search_path);
        let icon_path = match (&entry.icon, self.resolve_icons) {
            (Some(icon), true) => resolve_icon(icon),
            _ => String::new(),
        };

        ApplicationRecord {
            name: entry.name.unwrap_or_default(),
            description: entry.comment.unwrap_or_default(),
            exec_command,
            resolved_command,
            entry_type: entry.entry_type.unwrap_or_default(),
            is_terminal_app: entry.terminal,
            icon_path,
        }
    }

    fn has_desktop_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}
