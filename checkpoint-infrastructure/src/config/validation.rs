use std::path::Path;

use anyhow::{anyhow, Result};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

pub fn validate_log_level(value: &str) -> Result<()> {
    if LOG_LEVELS.contains(&value) {
        Ok(())
    } else {
        Err(anyhow!(
            "invalid log_level '{}', expected one of {}",
            value,
            LOG_LEVELS.join(", ")
        ))
    }
}

pub fn validate_intake_path(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("intake_path must not be empty"));
    }
    match Path::new(value).extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") | Some("json") => Ok(()),
        _ => Err(anyhow!("intake_path must be a .yaml, .yml or .json file")),
    }
}
