// Runtime configuration shared by the application layer
// Rubric constants and decision thresholds are compiled in and never configured here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub intake_path: String,
    pub auto_release_allowed: bool,
    pub decision_log_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            intake_path: "./intake.yaml".to_string(),
            auto_release_allowed: true,
            decision_log_capacity: 500,
        }
    }
}
