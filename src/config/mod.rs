#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// 迭代次數的安全上限，避免把主控台灌爆
pub const MAX_ITERATIONS: usize = 1000;
