use crate::domain::model::{Binding, Person};
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use std::collections::HashMap;

pub const DEMO_NAME: &str = "receiver";

/// 未綁定回呼退回的模組層級名稱。
/// 回呼沒有自己的接收者時，查找會越過包圍它的物件，直達模組層級。
pub const MODULE_SCOPE_NAME: &str = "nobody";

/// 接收者查找：有綁定就用物件的名字，沒有就退回模組層級
pub fn greeting(receiver: Option<&Person>, friend: &str) -> String {
    match receiver {
        Some(person) => format!("{} knows {}", person.name, friend),
        None => format!("{} knows {}", MODULE_SCOPE_NAME, friend),
    }
}

/// 接收者綁定示範
pub struct ReceiverDemo {
    person: Person,
}

impl ReceiverDemo {
    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Demonstration for ReceiverDemo {
    fn name(&self) -> &str {
        DEMO_NAME
    }

    fn lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        // 明確綁定：回呼在每個朋友上都看得到包圍它的物件
        self.person
            .for_each_friend(Binding::Bound, |receiver, friend| {
                lines.push(greeting(receiver, friend));
            });

        // 對照組：同一個回呼不綁定接收者，結果只進日誌
        self.person
            .for_each_friend(Binding::Unbound, |receiver, friend| {
                tracing::debug!("🔍 unbound callback resolves: {}", greeting(receiver, friend));
            });

        Ok(lines)
    }

    fn metadata(&self) -> HashMap<String, serde_json::Value> {
        let mut metadata = HashMap::new();
        metadata.insert(
            "person".to_string(),
            serde_json::Value::String(self.person.name.clone()),
        );
        metadata.insert(
            "friends".to_string(),
            serde_json::Value::Number(self.person.friends.len().into()),
        );
        metadata
    }
}
