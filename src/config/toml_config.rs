use crate::config::MAX_ITERATIONS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 未指定時的迭代次數
pub const DEFAULT_ITERATIONS: usize = 3;

/// TOML 配置檔的頂層結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub demo: DemoSection,
    pub capture: CaptureSection,
    pub receiver: ReceiverSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSection {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureSection {
    pub iterations: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverSection {
    pub name: String,
    pub friends: Vec<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RECEIVER_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        // 匹配 ${VAR_NAME} 格式，未設定的變數保持原樣
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("demo.name", &self.demo.name)?;

        // 驗證迭代次數
        validate_range("capture.iterations", self.iterations(), 1, MAX_ITERATIONS)?;

        // 驗證接收者設定
        validate_non_empty_string("receiver.name", &self.receiver.name)?;
        validate_non_empty_list("receiver.friends", &self.receiver.friends)?;

        Ok(())
    }

    /// 取得迭代次數
    pub fn iterations(&self) -> usize {
        self.capture.iterations.unwrap_or(DEFAULT_ITERATIONS)
    }
}

impl ConfigProvider for TomlConfig {
    fn iterations(&self) -> usize {
        self.iterations()
    }

    fn person_name(&self) -> &str {
        &self.receiver.name
    }

    fn friends(&self) -> &[String] {
        &self.receiver.friends
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
