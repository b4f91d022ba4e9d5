// Domain entities
pub mod decision_result;
pub mod intake;
pub mod item;
pub mod risk_breakdown;
pub mod risk_factor;
pub mod runtime_config;
pub mod student;

pub use decision_result::*;
pub use intake::*;
pub use item::*;
pub use risk_breakdown::*;
pub use risk_factor::*;
pub use runtime_config::*;
pub use student::*;
