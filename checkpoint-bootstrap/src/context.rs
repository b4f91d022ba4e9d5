use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use checkpoint_application::commands::{register_item, register_student};
use checkpoint_application::AppState;
use checkpoint_domain::{IntakeManifest, IntakeSource, RuntimeConfig};
use checkpoint_infrastructure::{
    InMemoryItemRepository, InMemoryStudentRepository, IntakeFileRepository,
};

pub struct AppContext {
    pub state: AppState,
    pub intake: Arc<dyn IntakeSource>,
}

/// Outcome of loading an intake manifest into the repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub students: usize,
    pub items: usize,
    pub rejected: Vec<String>,
}

impl AppContext {
    pub fn new(config: RuntimeConfig) -> Self {
        let state = AppState::new(
            config,
            Arc::new(InMemoryItemRepository::new()),
            Arc::new(InMemoryStudentRepository::new()),
        );
        Self {
            state,
            intake: Arc::new(IntakeFileRepository::new()),
        }
    }

    /// Builds the context and seeds it from the configured intake file.
    pub async fn load(config: RuntimeConfig) -> Result<(Self, SeedSummary)> {
        let context = Self::new(config);
        let manifest = context
            .intake
            .load_intake(&context.state.config.intake_path)
            .await?;
        let summary = context.seed(manifest).await;
        Ok((context, summary))
    }

    /// Students go in first so items can be linked to their holders.
    /// Invalid records are skipped and reported.
    pub async fn seed(&self, manifest: IntakeManifest) -> SeedSummary {
        let mut summary = SeedSummary::default();

        for student in manifest.students {
            let id = student.id.clone();
            match register_student(&self.state, student).await {
                Ok(_) => summary.students += 1,
                Err(err) => {
                    warn!(student = %id, error = %err, "intake student rejected");
                    summary.rejected.push(format!("student '{}': {}", id, err));
                }
            }
        }

        for item in manifest.items {
            let name = item.name.clone();
            match register_item(&self.state, item).await {
                Ok(_) => summary.items += 1,
                Err(err) => {
                    warn!(item = %name, error = %err, "intake item rejected");
                    summary.rejected.push(format!("item '{}': {}", name, err));
                }
            }
        }

        info!(
            students = summary.students,
            items = summary.items,
            rejected = summary.rejected.len(),
            "intake seeded"
        );
        summary
    }
}
