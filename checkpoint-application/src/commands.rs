// Write-side use cases
pub mod evaluation_commands;
pub mod item_commands;
pub mod student_commands;

pub use evaluation_commands::*;
pub use item_commands::*;
pub use student_commands::*;
