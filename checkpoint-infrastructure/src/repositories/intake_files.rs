use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use checkpoint_domain::{IntakeManifest, IntakeSource};

/// Reads intake manifests from disk. `.json` files are parsed as JSON,
/// everything else as YAML.
#[derive(Debug, Default)]
pub struct IntakeFileRepository;

impl IntakeFileRepository {
    pub fn new() -> Self {
        Self
    }
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[async_trait]
impl IntakeSource for IntakeFileRepository {
    async fn load_intake(&self, path: &str) -> anyhow::Result<IntakeManifest> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read intake file {}", path))?;
        let manifest: IntakeManifest = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("invalid JSON intake file {}", path))?
        } else if content.trim().is_empty() {
            IntakeManifest::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML intake file {}", path))?
        };
        debug!(
            path,
            students = manifest.students.len(),
            items = manifest.items.len(),
            "intake manifest loaded"
        );
        Ok(manifest)
    }
}
