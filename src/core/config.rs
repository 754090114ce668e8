use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Identity of the user the front end acts for.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    pub user_id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "finboard", "finboard")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
session:
  user_id: 7
  username: "alice"
  email: "alice@example.com"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.session.user_id, 7);
        assert_eq!(config.session.username, "alice");
        assert_eq!(config.session.email, "alice@example.com");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        let yaml_str_with_api = r#"
api:
  base_url: "http://example.com/api"
session:
  user_id: 1
  username: "demo_user"
  email: "demo@example.com"
        "#;
        let config: AppConfig = serde_yaml::from_str(yaml_str_with_api).unwrap();
        assert_eq!(config.api.base_url, "http://example.com/api");
    }

    #[test]
    fn test_config_requires_session() {
        let yaml_str = r#"
api:
  base_url: "http://example.com/api"
"#;
        let result: Result<AppConfig, _> = serde_yaml::from_str(yaml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_path() {
        let result = AppConfig::load_from_path("/nonexistent/finboard/config.yaml");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
