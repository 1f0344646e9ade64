use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::Write;

/// 把示範輸出逐行寫到 stdout，日誌另走 stderr 互不干擾
#[derive(Debug, Clone, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn print_line(&mut self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }
}
