use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::shared::error::ConfigError;

pub const CONFIG_PATH_ENV: &str = "IMPACT_STATS_CONFIG";
pub const OUTPUT_DIR_ENV: &str = "IMPACT_STATS_OUTPUT_DIR";
pub const OFFLINE_ENV: &str = "IMPACT_STATS_OFFLINE";

const DEFAULT_OUTPUT_DIR: &str = "data";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
const DEFAULT_USER_AGENT: &str =
    "impact-stats/0.1 (statistics collector for a non-profit website)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    /// Skip the reference-page fetches entirely.
    pub offline: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            offline: false,
        }
    }
}

impl AppConfig {
    /// Defaults, then the YAML file named by `IMPACT_STATS_CONFIG`, then
    /// individual environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(
            env::var(OUTPUT_DIR_ENV).ok(),
            env::var(OFFLINE_ENV).ok(),
        )?;
        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(
        &mut self,
        output_dir: Option<String>,
        offline: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(dir) = output_dir.filter(|d| !d.trim().is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(flag) = offline {
            self.offline = parse_flag(&flag).ok_or_else(|| {
                ConfigError::Invalid(format!("{} must be true or false, got '{}'", OFFLINE_ENV, flag))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid("fetch_timeout_secs must be positive".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent cannot be empty".to_string()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output_dir cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(15));
        assert!(!config.offline);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("output_dir: public/data\noffline: true\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("public/data"));
        assert!(config.offline);
        assert_eq!(config.fetch_timeout_secs, 15);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = AppConfig::from_yaml("fetch_timeout_secs: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn env_style_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(Some("/tmp/out".to_string()), Some("YES".to_string()))
            .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert!(config.offline);

        let err = config
            .apply_overrides(None, Some("maybe".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(OFFLINE_ENV));
    }

    #[test]
    fn blank_output_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("  ".to_string()), None).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("data"));
    }
}
