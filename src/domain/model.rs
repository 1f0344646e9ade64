/// 接收者綁定方式，由呼叫端決定，與回呼定義的位置無關
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// 回呼看得到包圍它的物件
    Bound,
    /// 回呼拿不到任何接收者
    Unbound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub friends: Vec<String>,
}

impl Person {
    pub fn new(name: String, friends: Vec<String>) -> Self {
        Self { name, friends }
    }

    /// 依序走訪朋友清單，為每個朋友呼叫一次回呼。
    /// 回呼看到的接收者完全由 `binding` 決定：`Bound` 傳入這個物件本身，
    /// `Unbound` 則刻意不傳。
    pub fn for_each_friend<F>(&self, binding: Binding, mut callback: F)
    where
        F: FnMut(Option<&Person>, &str),
    {
        for friend in &self.friends {
            let receiver = match binding {
                Binding::Bound => Some(self),
                Binding::Unbound => None,
            };
            callback(receiver, friend);
        }
    }
}
