use crate::utils::error::Result;
use std::collections::HashMap;

/// 一段主控台示範：產出它要印出的每一行
pub trait Demonstration {
    fn name(&self) -> &str;

    fn lines(&self) -> Result<Vec<String>>;

    fn metadata(&self) -> HashMap<String, serde_json::Value> {
        HashMap::new()
    }
}

/// 輸出埠，一次一行
pub trait Console {
    fn print_line(&mut self, line: &str) -> Result<()>;
}

/// 示範參數來源
pub trait ConfigProvider {
    fn iterations(&self) -> usize;
    fn person_name(&self) -> &str;
    fn friends(&self) -> &[String];
}
