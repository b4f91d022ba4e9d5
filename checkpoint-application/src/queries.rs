// Read-side use cases
pub mod decision_log_queries;
pub mod item_queries;
pub mod student_queries;

pub use decision_log_queries::*;
pub use item_queries::*;
pub use student_queries::*;
