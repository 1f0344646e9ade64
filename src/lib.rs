pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::console::StdoutConsole;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::capture::CaptureDemo;
pub use crate::core::engine::{DemoEngine, DemoResult, RunContext};
pub use crate::core::receiver::ReceiverDemo;
pub use crate::domain::model::{Binding, Person};
pub use crate::utils::error::{DemoError, Result};
