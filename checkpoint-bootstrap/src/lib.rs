pub mod context;
pub mod lifecycle;
pub mod render;
pub mod telemetry;

pub use context::{AppContext, SeedSummary};
pub use lifecycle::{run_evaluate, run_review};
pub use telemetry::init_tracing;
