use std::env;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use checkpoint_domain::RuntimeConfig;

use crate::config::validation::{validate_intake_path, validate_log_level};

pub const CONFIG_ENV: &str = "CHECKPOINT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./checkpoint.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub intake_path: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub auto_release_allowed: bool,
    pub decision_log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            intake_path: runtime.intake_path,
            log_level: "info".to_string(),
            log_json: false,
            log_dir: None,
            auto_release_allowed: runtime.auto_release_allowed,
            decision_log_capacity: runtime.decision_log_capacity,
        }
    }
}

impl AppConfig {
    /// Loads from `$CHECKPOINT_CONFIG`, falling back to `./checkpoint.toml`.
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path).await
    }

    /// A missing file yields defaults; environment overrides apply either way.
    pub async fn load_from(path: &str) -> Result<Self> {
        Self::load_with(path, |key| env::var(key).ok()).await
    }

    pub async fn load_with<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_path = Path::new(path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path)
                .await
                .with_context(|| format!("failed to read config {}", path))?;
            toml::from_str::<AppConfig>(&content)
                .with_context(|| format!("failed to parse config {}", path))?
        } else {
            warn!(path, "config file not found, using defaults");
            AppConfig::default()
        };
        config.apply_overrides(lookup);
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.intake_path = self.intake_path.trim().to_string();
        self.log_level = self.log_level.trim().to_lowercase();
        if self.log_level.is_empty() {
            self.log_level = "info".to_string();
        }
        if let Some(dir) = &self.log_dir {
            if dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.intake_path = resolve_path(base, &self.intake_path);
        if let Some(dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_intake_path(&self.intake_path)?;
        validate_log_level(&self.log_level)?;
        if self.decision_log_capacity == 0 {
            return Err(anyhow!("decision_log_capacity must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            intake_path: self.intake_path.clone(),
            auto_release_allowed: self.auto_release_allowed,
            decision_log_capacity: self.decision_log_capacity,
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CHECKPOINT_INTAKE_PATH") {
            self.intake_path = value;
        }
        if let Some(value) = lookup("CHECKPOINT_LOG_LEVEL") {
            self.log_level = value;
        }
        if let Some(value) = lookup("CHECKPOINT_LOG_JSON") {
            self.log_json = value.trim().parse().unwrap_or(self.log_json);
        }
        if let Some(value) = lookup("CHECKPOINT_LOG_DIR") {
            self.log_dir = Some(value);
        }
        if let Some(value) = lookup("CHECKPOINT_AUTO_RELEASE_ALLOWED") {
            self.auto_release_allowed = value.trim().parse().unwrap_or(self.auto_release_allowed);
        }
        if let Some(value) = lookup("CHECKPOINT_DECISION_LOG_CAPACITY") {
            self.decision_log_capacity =
                value.trim().parse().unwrap_or(self.decision_log_capacity);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_follow_config_dir() {
        let mut config = AppConfig {
            log_dir: Some("logs".to_string()),
            ..AppConfig::default()
        };
        config.resolve_paths(Some(Path::new("/etc/checkpoint")));
        assert_eq!(config.intake_path, "/etc/checkpoint/./intake.yaml");
        assert_eq!(config.log_dir.as_deref(), Some("/etc/checkpoint/logs"));

        let mut absolute = AppConfig {
            intake_path: "/srv/intake.json".to_string(),
            ..AppConfig::default()
        };
        absolute.resolve_paths(Some(Path::new("/etc/checkpoint")));
        assert_eq!(absolute.intake_path, "/srv/intake.json");
    }

    #[test]
    fn overrides_ignore_unparsable_values() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            "CHECKPOINT_LOG_JSON" => Some("true".to_string()),
            "CHECKPOINT_DECISION_LOG_CAPACITY" => Some("lots".to_string()),
            "CHECKPOINT_AUTO_RELEASE_ALLOWED" => Some("false".to_string()),
            _ => None,
        });
        assert!(config.log_json);
        assert!(!config.auto_release_allowed);
        assert_eq!(config.decision_log_capacity, 500);
    }

    #[test]
    fn normalize_drops_blank_log_dir() {
        let mut config = AppConfig {
            log_level: "  WARN ".to_string(),
            log_dir: Some("   ".to_string()),
            ..AppConfig::default()
        };
        config.normalize();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = AppConfig {
            decision_log_capacity: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
