// Checkpoint Application Layer

pub mod commands;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod state;

pub use error::AppError;
pub use metrics::{Metrics, MetricsSnapshot};
pub use state::AppState;
