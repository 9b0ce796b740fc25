use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use anyhow::{Context, Result};
use std::fs;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sources: SourceConfig,
    #[serde(default)]
    pub plugin: PluginConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    /// OS identifiers (as in `std::env::consts::OS`) the scan may run on.
    #[serde(default = "default_supported_platforms")]
    pub supported_platforms: Vec<String>,
}

fn default_supported_platforms() -> Vec<String> { vec!["linux".to_string()] }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            supported_platforms: default_supported_platforms(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_applications_subdir")]
    pub applications_subdir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Scanned after the XDG data directories.
    #[serde(default)]
    pub extra_dirs: Vec<PathBuf>,
    #[serde(default = "default_true")]
    pub exclude_terminal_apps: bool,
    #[serde(default = "default_true")]
    pub resolve_icons: bool,
}

fn default_applications_subdir() -> String { "applications".to_string() }
fn default_extension() -> String { "desktop".to_string() }
fn default_true() -> bool { true }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            applications_subdir: default_applications_subdir(),
            extension: default_extension(),
            extra_dirs: Vec::new(),
            exclude_terminal_apps: true,
            resolve_icons: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PluginAction {
    #[default]
    OpenLocal,
    OpenUrl,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PluginConfig {
    #[serde(default)]
    pub action: PluginAction,
}

pub fn default_config_path() -> PathBuf {
    match ProjectDirs::from("org", "app-launcher", "app-launcher") {
        Some(dirs) => dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    if !config_path.exists() {
        log::debug!("No config at {:?}, using defaults", config_path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config {:?}", config_path))?;
    parse_config(&content).with_context(|| format!("invalid config {:?}", config_path))
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}
