use crate::config::{Config, PluginAction};
use crate::error::{LauncherError, Result};
use crate::matcher::QueryMatcher;
use crate::model::ApplicationRecord;
use crate::platform;
use crate::sources::command::SearchPath;
use crate::sources::desktop::DesktopSource;
use crate::sources::{application_dirs, data_dirs};
use serde::Serialize;
use std::path::PathBuf;

pub const KEYWORD: &str = "app";
pub const HELPER_TITLE: &str = "Search for local applications";
pub const HELPER_SUBTITLE: &str = "Example: app xterm";

const ERROR_ITEM: &str = "Error";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Helper {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Static description announced to the host.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PluginMetadata {
    pub keyword: &'static str,
    pub action: PluginAction,
    pub helper: Helper,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<ApplicationRecord> for ResultItem {
    fn from(record: ApplicationRecord) -> Self {
        Self {
            title: record.name,
            subtitle: record.description,
            arg: record.resolved_command.unwrap_or_default(),
            icon: Some(record.icon_path).filter(|icon| !icon.is_empty()),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PluginResponse {
    Items { items: Vec<ResultItem> },
    Error { item: String, subtitle: String },
}

impl PluginResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            item: ERROR_ITEM.to_string(),
            subtitle: message.into(),
        }
    }
}

pub struct AppPlugin {
    config: Config,
    os: String,
    data_dirs: Vec<PathBuf>,
    search_path: SearchPath,
}

impl AppPlugin {
    /// Plugin bound to the running system: its OS, XDG dirs and `$PATH`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            os: std::env::consts::OS.to_string(),
            data_dirs: data_dirs(),
            search_path: SearchPath::from_env(),
        }
    }

    #[cfg(test)]
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    #[cfg(test)]
    pub fn with_data_dirs(mut self, data_dirs: Vec<PathBuf>) -> Self {
        self.data_dirs = data_dirs;
        self
    }

    #[cfg(test)]
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    pub fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            keyword: KEYWORD,
            action: self.config.plugin.action,
            helper: Helper {
                title: HELPER_TITLE,
                subtitle: HELPER_SUBTITLE,
            },
        }
    }

    /// Runs one query. Failures become a single error item, so the host
    /// always gets a well-formed response.
    pub async fn execute(&self, query: &str) -> PluginResponse {
        match self.search(query).await {
            Ok(records) => PluginResponse::Items {
                items: records.into_iter().map(ResultItem::from).collect(),
            },
            Err(err) => {
                log::warn!("Query '{}' failed: {}", query, err);
                PluginResponse::error(err.to_string())
            }
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<ApplicationRecord>> {
        let support = platform::check(&self.os, &self.config.general.supported_platforms);
        platform::ensure_supported(support)?;

        let matcher = QueryMatcher::new(query);

        let dirs = application_dirs(&self.config.sources, self.data_dirs.clone());
        let source = DesktopSource::new(dirs, &self.config.sources, self.search_path.clone());

        // Run on its own task so a panic while scanning surfaces as a JoinError.
        let apps = tokio::spawn(async move { source.scan().await })
            .await
            .map_err(|err| LauncherError::Pipeline(err.to_string()))?;

        let matches = matcher.filter(apps);
        log::info!("Query '{}' matched {} applications", query, matches.len());
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::command::tests::install_binary;
    use std::fs;
    use tempfile::TempDir;

    struct Host {
        _data: TempDir,
        bin: TempDir,
        plugin: AppPlugin,
    }

    /// A data dir with `applications/` holding the given desktop files.
    fn host(files: &[(&str, &str)], binaries: &[&str]) -> Host {
        let data = tempfile::tempdir().unwrap();
        let apps = data.path().join("applications");
        fs::create_dir(&apps).unwrap();
        for (name, content) in files {
            fs::write(apps.join(name), content).unwrap();
        }

        let bin = tempfile::tempdir().unwrap();
        for name in binaries {
            install_binary(bin.path(), name);
        }

        let plugin = AppPlugin::new(Config::default())
            .with_os("linux")
            .with_data_dirs(vec![data.path().to_path_buf()])
            .with_search_path(SearchPath::new(vec![bin.path().to_path_buf()]));

        Host { _data: data, bin, plugin }
    }

    const FIREFOX: &str = "[Desktop Entry]\nName=Firefox\nComment=Web Browser\nExec=firefox %u\nType=Application\nIcon=/usr/share/icons/firefox.png\n";
    const XTERM: &str = "[Desktop Entry]\nName=Terminal\nComment=Terminal emulator\nExec=xterm -fa Monospace\nType=Application\nIcon=xterm\n";

    #[tokio::test]
    async fn maps_records_to_items() {
        let host = host(&[("firefox.desktop", FIREFOX), ("xterm.desktop", XTERM)], &["firefox", "xterm"]);
        let bin = host.bin.path();

        let response = host.plugin.execute("").await;

        assert_eq!(
            response,
            PluginResponse::Items {
                items: vec![
                    ResultItem {
                        title: "Firefox".to_string(),
                        subtitle: "Web Browser".to_string(),
                        arg: bin.join("firefox").display().to_string(),
                        icon: Some("/usr/share/icons/firefox.png".to_string()),
                    },
                    ResultItem {
                        title: "Terminal".to_string(),
                        subtitle: "Terminal emulator".to_string(),
                        arg: format!("{} -fa Monospace", bin.join("xterm").display()),
                        icon: None,
                    },
                ],
            }
        );
    }

    #[tokio::test]
    async fn filters_by_query() {
        let host = host(&[("firefox.desktop", FIREFOX), ("xterm.desktop", XTERM)], &["firefox", "xterm"]);

        let PluginResponse::Items { items } = host.plugin.execute("browser").await else {
            panic!("expected items");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Firefox");

        let PluginResponse::Items { items } = host.plugin.execute("nothing-like-this").await else {
            panic!("expected items");
        };
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn unsupported_platform_yields_error_item() {
        let host = host(&[("firefox.desktop", FIREFOX)], &["firefox"]);
        let plugin = host.plugin.with_os("windows");

        let response = plugin.execute("fire").await;

        assert_eq!(response, PluginResponse::error("Platform not yet supported"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"item": "Error", "subtitle": "Platform not yet supported"})
        );
    }

    #[tokio::test]
    async fn missing_data_dirs_yield_empty_items() {
        let plugin = AppPlugin::new(Config::default())
            .with_os("linux")
            .with_data_dirs(vec![PathBuf::from("/nonexistent/app-launcher-test")])
            .with_search_path(SearchPath::default());

        assert_eq!(plugin.execute("").await, PluginResponse::Items { items: Vec::new() });
    }

    #[test]
    fn items_serialize_without_empty_icon() {
        let item = ResultItem {
            title: "Terminal".to_string(),
            subtitle: "Terminal emulator".to_string(),
            arg: "/usr/bin/xterm".to_string(),
            icon: None,
        };
        let json = serde_json::to_value(PluginResponse::Items { items: vec![item] }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"items": [{"title": "Terminal", "subtitle": "Terminal emulator", "arg": "/usr/bin/xterm"}]})
        );
    }

    #[test]
    fn metadata_reports_configured_action() {
        let mut config = Config::default();
        config.plugin.action = PluginAction::OpenUrl;
        let metadata = AppPlugin::new(config).metadata();

        assert_eq!(
            serde_json::to_value(metadata).unwrap(),
            serde_json::json!({
                "keyword": "app",
                "action": "openurl",
                "helper": {"title": "Search for local applications", "subtitle": "Example: app xterm"}
            })
        );
    }
}
