use clap::Parser;
use closure_demos::config::toml_config::TomlConfig;
use closure_demos::core::engine::{self, build_demos, DemoEngine, RunContext};
use closure_demos::domain::ports::ConfigProvider;
use closure_demos::utils::error::ErrorSeverity;
use closure_demos::utils::logger;
use closure_demos::utils::validation::Validate;
use closure_demos::{CliConfig, StdoutConsole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting closure-demos CLI");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 生成執行 ID
    let run_id = format!("run_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"));

    let outcome = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            validate_or_exit(&config);
            execute(&config, &args.only, &run_id)
        }
        None => {
            validate_or_exit(&args);
            execute(&args, &args.only, &run_id)
        }
    };

    match outcome {
        Ok(context) => {
            let summary = engine::execution_summary(&context.completed);
            tracing::info!("✅ All demonstrations completed successfully!");
            tracing::info!(
                "📊 Run {} printed {} lines: {:?}",
                context.run_id,
                context.total_lines(),
                summary
            );
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Demo run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,      // 警告，但成功
                ErrorSeverity::Medium => 2,   // 重試錯誤
                ErrorSeverity::High => 1,     // 處理錯誤
                ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn validate_or_exit(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn execute(
    config: &impl ConfigProvider,
    only: &[String],
    run_id: &str,
) -> closure_demos::Result<RunContext> {
    let demos = build_demos(config, only)?;

    let mut engine = DemoEngine::new(StdoutConsole::new(), run_id.to_string());
    for demo in demos {
        engine.add_demo(demo);
    }

    engine.run()
}
