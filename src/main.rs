use clap::Parser;
use court_finder::config::toml_config::TomlConfig;
use court_finder::utils::{logger, validation::Validate};
use court_finder::{CliConfig, CourtLookupPipeline, CourtsApiClient, LocalStorage, LookupEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting court-finder CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 可選的 TOML 任務檔覆蓋命令列設定
    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(file_config) => {
                if let Some(job) = &file_config.job {
                    tracing::info!("📁 Loaded job '{}' from {}", job.name, path);
                }
                config.apply_file_config(file_config);
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲、API 客戶端與管道
    let storage = LocalStorage::new();
    let lookup = match CourtsApiClient::new(config.api_endpoint.clone(), config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let pipeline = CourtLookupPipeline::new(storage, config, lookup);

    // 創建引擎並運行
    let engine = LookupEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Court lookup completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Court lookup completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Court lookup failed: {} (Category: {:?}, Severity: {:?})",
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
                court_finder::utils::error::ErrorSeverity::Low => 0,
                court_finder::utils::error::ErrorSeverity::Medium => 2,
                court_finder::utils::error::ErrorSeverity::High => 1,
                court_finder::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
