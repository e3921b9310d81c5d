//! Configuration management for showcase.
//!
//! Settings come from an optional TOML file, then environment overrides.
//! Every key has a default, so running without a config file is normal.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::loader::DEFAULT_DATA_PATH;
use crate::render::RenderOptions;
use crate::view::ExternalLinkPolicy;

/// Config file picked up from the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "showcase.toml";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding `data_path`.
pub const DATA_PATH_ENV: &str = "SHOWCASE_DATA_PATH";

/// Environment variable overriding `user_agent`.
pub const USER_AGENT_ENV: &str = "SHOWCASE_USER_AGENT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Projects document location, relative to each page.
    pub data_path: String,
    /// When linked cards open in a new browsing context.
    pub link_policy: ExternalLinkPolicy,
    /// Append a "Learn more" affordance to linked cards.
    pub learn_more: bool,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Custom user agent for HTTP requests.
    pub user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            link_policy: ExternalLinkPolicy::default(),
            learn_more: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, `showcase.toml` in the
    /// working directory is used if present. Environment overrides are
    /// applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(settings)
    }

    /// Apply overrides from a variable lookup. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(data_path) = lookup(DATA_PATH_ENV) {
            tracing::debug!("Using {} from environment: {}", DATA_PATH_ENV, data_path);
            self.data_path = data_path;
        }
        if let Some(user_agent) = lookup(USER_AGENT_ENV) {
            self.user_agent = Some(user_agent);
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            link_policy: self.link_policy,
            learn_more: self.learn_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data_path, "data/projects.json");
        assert_eq!(settings.link_policy, ExternalLinkPolicy::CrossOrigin);
        assert!(!settings.learn_more);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
link_policy = "always"
learn_more = true
"#,
        )
        .unwrap();

        assert_eq!(settings.link_policy, ExternalLinkPolicy::Always);
        assert!(settings.learn_more);
        assert_eq!(settings.data_path, DEFAULT_DATA_PATH);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<Settings>("data_pth = \"x\"").is_err());
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Settings::from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "timeout_secs = \"soon\"").unwrap();
        assert!(matches!(
            Settings::from_file(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "data_path = \"api/projects.json\"\ntimeout_secs = 5\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.data_path, "api/projects.json");
        assert_eq!(settings.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (DATA_PATH_ENV, "projects.json"),
            (USER_AGENT_ENV, ""),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.data_path, "projects.json");
        assert_eq!(settings.user_agent, None);
    }

    #[test]
    fn test_render_options() {
        let settings = Settings {
            link_policy: ExternalLinkPolicy::Always,
            learn_more: true,
            ..Default::default()
        };
        let options = settings.render_options();
        assert_eq!(options.link_policy, ExternalLinkPolicy::Always);
        assert!(options.learn_more);
    }
}
