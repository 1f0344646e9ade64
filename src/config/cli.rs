use crate::config::MAX_ITERATIONS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, Validate,
};
use clap::Parser;

/// CLI 配置，預設值重現文件化的五行輸出
#[derive(Debug, Clone, Parser)]
#[command(name = "closure-demos")]
#[command(about = "Console demonstrations of closure capture and receiver binding")]
pub struct CliConfig {
    /// Path to a TOML configuration file (overrides the other flags)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of per-iteration counters to build
    #[arg(long, default_value = "3")]
    pub iterations: usize,

    /// Name of the person greeting their friends
    #[arg(long, default_value = "jane")]
    pub name: String,

    /// Friends greeted in the receiver demonstration
    #[arg(long, value_delimiter = ',', default_value = "Tarzan,Cheeta")]
    pub friends: Vec<String>,

    /// Run only the named demonstrations (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn iterations(&self) -> usize {
        self.iterations
    }

    fn person_name(&self) -> &str {
        &self.name
    }

    fn friends(&self) -> &[String] {
        &self.friends
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 驗證配置
        validate_range("iterations", self.iterations, 1, MAX_ITERATIONS)?;
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_list("friends", &self.friends)?;
        Ok(())
    }
}
