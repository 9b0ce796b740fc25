use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Platform not yet supported")]
    UnsupportedPlatform,

    #[error("cannot read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read desktop entry {path:?}: {source}")]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("application scan failed: {0}")]
    Pipeline(String),
}

pub type Result<T> = std::result::Result<T, LauncherError>;
