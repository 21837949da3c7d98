use std::path::PathBuf;

use ignore_fetch_github::GetterConfig;
use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Optional overrides for the built-in repository defaults. Command-line
/// flags take precedence over these.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    pub base_url: Option<String>,
    pub owner: Option<String>,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub suffix: Option<String>,
    pub max_requests: Option<usize>,
}

impl Defaults {
    pub fn apply(&self, config: &mut GetterConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(owner) = &self.owner {
            config.owner = owner.clone();
        }
        if let Some(repository) = &self.repository {
            config.repository = repository.clone();
        }
        if let Some(branch) = &self.branch {
            config.branch = branch.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if let Some(max_requests) = self.max_requests {
            config.max_requests = max_requests;
        }
    }
}

/// Config file path: `~/.config/ignore-fetch/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ignore-fetch").join("config.toml"))
}

/// Load config from file, falling back to defaults if missing.
pub fn load_config() -> AppConfig {
    if let Some(path) = config_path()
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => return config,
            Err(_) => eprintln!(
                "warning: failed to parse config at {}, using defaults",
                path.display()
            ),
        }
    }

    AppConfig::default()
}
