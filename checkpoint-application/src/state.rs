use std::collections::VecDeque;
use std::sync::Arc;

use checkpoint_domain::ports::{ItemRepository, StudentRepository};
use checkpoint_domain::{DecisionEngine, RuntimeConfig};
use tokio::sync::RwLock;

use crate::commands::DecisionRecord;
use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub item_repo: Arc<dyn ItemRepository>,
    pub student_repo: Arc<dyn StudentRepository>,
    pub engine: DecisionEngine,
    pub decision_log: Arc<RwLock<VecDeque<DecisionRecord>>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        item_repo: Arc<dyn ItemRepository>,
        student_repo: Arc<dyn StudentRepository>,
    ) -> Self {
        let capacity = config.decision_log_capacity;
        Self {
            config,
            item_repo,
            student_repo,
            engine: DecisionEngine::new(),
            decision_log: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
