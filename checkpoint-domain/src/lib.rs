// Checkpoint Domain Layer

pub mod entities;
pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use error::DomainError;
pub use ports::*;
pub use services::*;
pub use value_objects::*;
