use crate::core::capture::{self, CaptureDemo};
use crate::core::receiver::{self, ReceiverDemo};
use crate::domain::model::Person;
use crate::domain::ports::{ConfigProvider, Console, Demonstration};
use crate::utils::error::{DemoError, Result};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// 單一示範的執行結果
#[derive(Debug, Clone)]
pub struct DemoResult {
    pub demo_name: String,
    pub lines: Vec<String>,
    pub duration: Duration,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// 一次執行的帳本，依完成順序保存結果，可依名稱查詢
#[derive(Debug, Clone)]
pub struct RunContext {
    pub completed: Vec<DemoResult>,
    pub run_id: String,
    lines_by_demo: HashMap<String, Vec<String>>,
}

impl RunContext {
    pub fn new(run_id: String) -> Self {
        Self {
            completed: Vec::new(),
            run_id,
            lines_by_demo: HashMap::new(),
        }
    }

    /// 最後完成的示範
    pub fn latest(&self) -> Option<&DemoResult> {
        self.completed.last()
    }

    /// 依名稱查詢示範結果
    pub fn get_result_by_name(&self, name: &str) -> Option<&DemoResult> {
        self.completed.iter().find(|r| r.demo_name == name)
    }

    /// 依名稱查詢示範的輸出行
    pub fn get_lines(&self, name: &str) -> Option<&Vec<String>> {
        self.lines_by_demo.get(name)
    }

    /// 依完成順序攤平所有輸出行
    pub fn all_lines(&self) -> Vec<String> {
        self.completed
            .iter()
            .flat_map(|result| result.lines.clone())
            .collect()
    }

    pub fn total_lines(&self) -> usize {
        self.completed.iter().map(|r| r.lines.len()).sum()
    }

    /// 添加結果到帳本
    pub fn add_result(&mut self, result: DemoResult) {
        self.lines_by_demo
            .insert(result.demo_name.clone(), result.lines.clone());
        self.completed.push(result);
    }
}

/// 依序執行示範，把每一行送進輸出埠
pub struct DemoEngine<C: Console> {
    console: C,
    demos: Vec<Box<dyn Demonstration>>,
    run_id: String,
}

impl<C: Console> DemoEngine<C> {
    pub fn new(console: C, run_id: String) -> Self {
        Self {
            console,
            demos: Vec::new(),
            run_id,
        }
    }

    pub fn add_demo(&mut self, demo: Box<dyn Demonstration>) {
        self.demos.push(demo);
    }

    /// 執行所有示範
    pub fn run(&mut self) -> Result<RunContext> {
        let mut context = RunContext::new(self.run_id.clone());

        for demo in &self.demos {
            let start_time = Instant::now();
            tracing::info!("🎬 Running demonstration: {}", demo.name());

            let lines = match demo.lines() {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::error!("❌ Demonstration {} failed: {}", demo.name(), e);
                    return Err(DemoError::DemoExecutionError {
                        demo: demo.name().to_string(),
                        details: format!("{}", e),
                    });
                }
            };

            for line in &lines {
                self.console.print_line(line)?;
            }

            let result = DemoResult {
                demo_name: demo.name().to_string(),
                lines,
                duration: start_time.elapsed(),
                metadata: demo.metadata(),
            };

            tracing::info!(
                "✅ Demonstration finished: {} (lines: {}, duration: {:?})",
                result.demo_name,
                result.lines.len(),
                result.duration
            );

            context.add_result(result);
        }

        Ok(context)
    }
}

/// 依輸出順序建立示範清單，`only` 非空時只保留點名的示範
pub fn build_demos(
    config: &impl ConfigProvider,
    only: &[String],
) -> Result<Vec<Box<dyn Demonstration>>> {
    let valid_names = [capture::DEMO_NAME, receiver::DEMO_NAME];

    // 不認識的名稱直接拒絕
    for name in only {
        if !valid_names.contains(&name.as_str()) {
            return Err(DemoError::InvalidConfigValueError {
                field: "only".to_string(),
                value: name.clone(),
                reason: format!(
                    "Unknown demonstration. Valid names: {}",
                    valid_names.join(", ")
                ),
            });
        }
    }

    let selected = |name: &str| only.is_empty() || only.iter().any(|n| n == name);
    let mut demos: Vec<Box<dyn Demonstration>> = Vec::new();

    if selected(capture::DEMO_NAME) {
        demos.push(Box::new(CaptureDemo::new(config.iterations())));
    } else {
        tracing::info!("⏭️ Skipping demonstration: {}", capture::DEMO_NAME);
    }

    if selected(receiver::DEMO_NAME) {
        let person = Person::new(config.person_name().to_string(), config.friends().to_vec());
        demos.push(Box::new(ReceiverDemo::new(person)));
    } else {
        tracing::info!("⏭️ Skipping demonstration: {}", receiver::DEMO_NAME);
    }

    Ok(demos)
}

/// 獲取執行摘要
pub fn execution_summary(results: &[DemoResult]) -> HashMap<String, serde_json::Value> {
    let mut summary = HashMap::new();

    let total_demos = results.len();
    let total_lines: usize = results.iter().map(|r| r.lines.len()).sum();
    let total_duration: Duration = results.iter().map(|r| r.duration).sum();

    summary.insert(
        "total_demos".to_string(),
        serde_json::Value::Number(total_demos.into()),
    );
    summary.insert(
        "total_lines".to_string(),
        serde_json::Value::Number(total_lines.into()),
    );
    summary.insert(
        "total_duration_ms".to_string(),
        serde_json::Value::Number((total_duration.as_millis() as u64).into()),
    );

    let demo_names: Vec<serde_json::Value> = results
        .iter()
        .map(|r| serde_json::Value::String(r.demo_name.clone()))
        .collect();
    summary.insert(
        "executed_demos".to_string(),
        serde_json::Value::Array(demo_names),
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct MockDemo {
        name: String,
        lines: Vec<String>,
        should_fail: bool,
    }

    impl MockDemo {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                lines: Vec::new(),
                should_fail: false,
            }
        }

        fn with_lines(mut self, lines: &[&str]) -> Self {
            self.lines = lines.iter().map(|s| s.to_string()).collect();
            self
        }

        fn with_failure(mut self) -> Self {
            self.should_fail = true;
            self
        }
    }

    impl Demonstration for MockDemo {
        fn name(&self) -> &str {
            &self.name
        }

        fn lines(&self) -> Result<Vec<String>> {
            if self.should_fail {
                return Err(DemoError::ConfigError {
                    message: "mock failure".to_string(),
                });
            }
            Ok(self.lines.clone())
        }
    }

    /// 共享緩衝區的測試輸出埠，引擎拿走所有權後仍能驗證輸出
    #[derive(Clone, Default)]
    struct SharedConsole {
        printed: Rc<RefCell<Vec<String>>>,
    }

    impl Console for SharedConsole {
        fn print_line(&mut self, line: &str) -> Result<()> {
            self.printed.borrow_mut().push(line.to_string());
            Ok(())
        }
    }

    struct FailingConsole;

    impl Console for FailingConsole {
        fn print_line(&mut self, _line: &str) -> Result<()> {
            Err(DemoError::IoError(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "console closed",
            )))
        }
    }

    struct TestConfig {
        iterations: usize,
        name: String,
        friends: Vec<String>,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                iterations: 3,
                name: "jane".to_string(),
                friends: vec!["Tarzan".to_string(), "Cheeta".to_string()],
            }
        }
    }

    impl ConfigProvider for TestConfig {
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

    fn sample_result(name: &str, lines: &[&str], duration_ms: u64) -> DemoResult {
        DemoResult {
            demo_name: name.to_string(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
            duration: Duration::from_millis(duration_ms),
            metadata: HashMap::new(),
        }
    }

    #[test]
    fn test_run_context_creation() {
        let context = RunContext::new("run_test".to_string());
        assert_eq!(context.run_id, "run_test");
        assert!(context.completed.is_empty());
        assert!(context.latest().is_none());
        assert_eq!(context.total_lines(), 0);
    }

    #[test]
    fn test_run_context_records_results() {
        let mut context = RunContext::new("run_test".to_string());
        context.add_result(sample_result("first", &["a", "b"], 10));
        context.add_result(sample_result("second", &["c"], 20));

        assert_eq!(context.completed.len(), 2);
        assert_eq!(context.latest().unwrap().demo_name, "second");
        assert_eq!(
            context.get_result_by_name("first").unwrap().lines,
            vec!["a", "b"]
        );
        assert_eq!(context.get_lines("second").unwrap(), &vec!["c".to_string()]);
        assert!(context.get_lines("missing").is_none());
        assert_eq!(context.all_lines(), vec!["a", "b", "c"]);
        assert_eq!(context.total_lines(), 3);
    }

    #[test]
    fn test_engine_runs_demos_in_insertion_order() {
        let console = SharedConsole::default();
        let printed = Rc::clone(&console.printed);

        let mut engine = DemoEngine::new(console, "run_test".to_string());
        engine.add_demo(Box::new(MockDemo::new("first").with_lines(&["1", "2"])));
        engine.add_demo(Box::new(MockDemo::new("second").with_lines(&["3"])));

        let context = engine.run().unwrap();

        assert_eq!(*printed.borrow(), vec!["1", "2", "3"]);
        let order: Vec<&str> = context
            .completed
            .iter()
            .map(|r| r.demo_name.as_str())
            .collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn test_engine_wraps_demo_failures() {
        let mut engine = DemoEngine::new(SharedConsole::default(), "run_test".to_string());
        engine.add_demo(Box::new(MockDemo::new("broken").with_failure()));

        let result = engine.run();

        match result {
            Err(DemoError::DemoExecutionError { demo, details }) => {
                assert_eq!(demo, "broken");
                assert!(details.contains("mock failure"));
            }
            other => panic!("Expected DemoExecutionError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_engine_propagates_console_errors() {
        let mut engine = DemoEngine::new(FailingConsole, "run_test".to_string());
        engine.add_demo(Box::new(MockDemo::new("first").with_lines(&["1"])));

        let result = engine.run();
        assert!(matches!(result, Err(DemoError::IoError(_))));
    }

    #[test]
    fn test_build_demos_default_order() {
        let demos = build_demos(&TestConfig::default(), &[]).unwrap();

        let names: Vec<&str> = demos.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["capture", "receiver"]);
    }

    #[test]
    fn test_build_demos_only_filter() {
        let only = vec!["receiver".to_string()];
        let demos = build_demos(&TestConfig::default(), &only).unwrap();

        assert_eq!(demos.len(), 1);
        assert_eq!(demos[0].name(), "receiver");
    }

    #[test]
    fn test_build_demos_rejects_unknown_name() {
        let only = vec!["shadow".to_string()];
        let result = build_demos(&TestConfig::default(), &only);

        match result {
            Err(DemoError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "only");
                assert_eq!(value, "shadow");
            }
            _ => panic!("Expected InvalidConfigValueError"),
        }
    }

    #[test]
    fn test_execution_summary() {
        let results = vec![
            sample_result("capture", &["0", "1", "2"], 100),
            sample_result("receiver", &["jane knows Tarzan", "jane knows Cheeta"], 200),
        ];

        let summary = execution_summary(&results);

        assert_eq!(
            summary.get("total_demos").unwrap(),
            &serde_json::Value::Number(2.into())
        );
        assert_eq!(
            summary.get("total_lines").unwrap(),
            &serde_json::Value::Number(5.into())
        );
        assert_eq!(
            summary.get("total_duration_ms").unwrap(),
            &serde_json::Value::Number(300.into())
        );
        assert_eq!(
            summary.get("executed_demos").unwrap(),
            &serde_json::Value::Array(vec![
                serde_json::Value::String("capture".to_string()),
                serde_json::Value::String("receiver".to_string()),
            ])
        );
    }
}
