pub mod intake_files;
pub mod memory_items;
pub mod memory_students;

pub use intake_files::*;
pub use memory_items::*;
pub use memory_students::*;
