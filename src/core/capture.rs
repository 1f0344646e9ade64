use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

pub const DEMO_NAME: &str = "capture";

/// 在迴圈中捕捉索引的閉包
pub type Counter = Box<dyn Fn() -> usize>;

/// 每次迭代建立一個獨立綁定，再把它移進閉包。
/// 呼叫第 i 個閉包會得到建立當下的索引 i，而不是迴圈結束後的值。
pub fn per_iteration_counters(count: usize) -> Vec<Counter> {
    let mut counters: Vec<Counter> = Vec::with_capacity(count);

    for i in 0..count {
        // 獨立綁定：每個閉包擁有自己的副本
        let captured = i;
        counters.push(Box::new(move || captured));
    }

    counters
}

/// 對照組：所有閉包共用同一個可變綁定。
/// 迴圈逐步更新同一個槽位，結束後槽位停在最終值，
/// 所以每個閉包回傳的都是 `count`。
pub fn shared_binding_counters(count: usize) -> Vec<Counter> {
    let slot = Rc::new(Cell::new(0));
    let mut counters: Vec<Counter> = Vec::with_capacity(count);

    for i in 0..count {
        slot.set(i);
        let shared = Rc::clone(&slot);
        counters.push(Box::new(move || shared.get()));
    }

    // 迴圈結束，綁定停在最終值
    slot.set(count);

    counters
}

/// 逐迭代捕捉示範
pub struct CaptureDemo {
    iterations: usize,
}

impl CaptureDemo {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }
}

impl Demonstration for CaptureDemo {
    fn name(&self) -> &str {
        DEMO_NAME
    }

    fn lines(&self) -> Result<Vec<String>> {
        let counters = per_iteration_counters(self.iterations);

        // 依建立順序呼叫每個閉包，各自回傳自己的索引
        let lines: Vec<String> = counters
            .iter()
            .map(|counter| counter().to_string())
            .collect();

        // 共用綁定的對照組只進日誌，不進輸出
        for (index, counter) in shared_binding_counters(self.iterations).iter().enumerate() {
            tracing::debug!("🔄 shared-binding counter {} returns {}", index, counter());
        }

        Ok(lines)
    }

    fn metadata(&self) -> HashMap<String, serde_json::Value> {
        let mut metadata = HashMap::new();
        metadata.insert(
            "iterations".to_string(),
            serde_json::Value::Number(self.iterations.into()),
        );
        metadata
    }
}
