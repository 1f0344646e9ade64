// Core layer: demonstration logic and the engine that drives it.

pub mod capture;
pub mod engine;
pub mod receiver;

// Re-export commonly used types
pub use crate::domain::model::{Binding, Person};
pub use crate::domain::ports::{ConfigProvider, Console, Demonstration};
pub use crate::utils::error::Result;
