use crate::identity::IdStrategy;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct TabsConfig {
    pub tabs: TabsSection,
    pub keep_alive: KeepAliveSection,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TabsSection {
    /// 0 - без ограничения
    pub max_tabs: usize,
    pub id_strategy: IdStrategy,
    /// Куда уходить, когда закрыт последний таб
    pub home_path: String,
    /// Маршруты, табы которых создаются закреплёнными
    pub non_closable_routes: Vec<String>,
    /// Маршруты, которые никогда не открывают таб
    pub excluded_routes: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct KeepAliveSection {
    /// 0 - без ограничения
    pub max_cached: usize,
    /// Маршруты, представления которых никогда не кэшируются
    pub excluded_routes: Vec<String>,
}

fn auth_and_error_routes() -> Vec<String> {
    ["login", "register", "forgot-password", "not-authorized", "404", "error"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for TabsSection {
    fn default() -> Self {
        Self {
            max_tabs: 30,
            id_strategy: IdStrategy::Logical,
            home_path: "/dashboards/crm".to_string(),
            non_closable_routes: vec!["dashboards-crm".to_string()],
            excluded_routes: auth_and_error_routes(),
        }
    }
}

impl Default for KeepAliveSection {
    fn default() -> Self {
        Self {
            max_cached: 20,
            excluded_routes: auth_and_error_routes(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[tabs]
max_tabs = 30
id_strategy = "logical"
home_path = "/dashboards/crm"
non_closable_routes = ["dashboards-crm"]
excluded_routes = ["login", "register", "forgot-password", "not-authorized", "404", "error"]

[keep_alive]
max_cached = 20
excluded_routes = ["login", "register", "forgot-password", "not-authorized", "404", "error"]
"#;

impl TabsConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load tab configuration
///
/// Search order:
/// 1. The given file, if it exists
/// 2. Falls back to embedded default config
pub fn load_config(path: Option<&Path>) -> anyhow::Result<TabsConfig> {
    if let Some(config_path) = path {
        if config_path.exists() {
            log::info!("Loading tabs config from: {}", config_path.display());
            let contents = std::fs::read_to_string(config_path)?;
            return TabsConfig::from_toml(&contents);
        }
        log::warn!("tabs config not found at: {}", config_path.display());
    }

    log::info!("Using default embedded tabs configuration");
    TabsConfig::from_toml(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = TabsConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.tabs.max_tabs, 30);
        assert_eq!(config.tabs.id_strategy, IdStrategy::Logical);
        assert_eq!(config.keep_alive.max_cached, 20);
        assert!(config.keep_alive.excluded_routes.contains(&"login".to_string()));
    }

    #[test]
    fn test_embedded_matches_defaults() {
        let parsed = TabsConfig::from_toml(DEFAULT_CONFIG).unwrap();
        let defaults = TabsConfig::default();
        assert_eq!(parsed.tabs.home_path, defaults.tabs.home_path);
        assert_eq!(parsed.tabs.non_closable_routes, defaults.tabs.non_closable_routes);
        assert_eq!(parsed.tabs.excluded_routes, defaults.tabs.excluded_routes);
        assert_eq!(parsed.keep_alive.excluded_routes, defaults.keep_alive.excluded_routes);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = TabsConfig::from_toml("[tabs]\nmax_tabs = 0\nid_strategy = \"full_path\"\n").unwrap();
        assert_eq!(config.tabs.max_tabs, 0);
        assert_eq!(config.tabs.id_strategy, IdStrategy::FullPath);
        assert_eq!(config.tabs.home_path, "/dashboards/crm");
        assert_eq!(config.keep_alive.max_cached, 20);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_config(Some(Path::new("definitely/not/here/tabs.toml"))).unwrap();
        assert_eq!(config.tabs.max_tabs, 30);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(TabsConfig::from_toml("[tabs]\nmax_tabs = \"many\"\n").is_err());
    }
}
