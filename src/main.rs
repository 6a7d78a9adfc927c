use anyhow::Context;
use book_etl::domain::ports::{ConfigProvider, Notifier};
use book_etl::utils::{logger, validation::Validate};
use book_etl::{
    BookPipeline, BrowserNotifier, CliConfig, EtlEngine, HttpFetcher, LocalStorage, NoopNotifier,
    RunOutcome,
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting book-etl CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    // 解析並驗證配置
    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }
    let notifier: Box<dyn Notifier> = if config.open_browser {
        Box::new(BrowserNotifier)
    } else {
        Box::new(NoopNotifier)
    };

    let storage = LocalStorage::new(config.output_path());
    let fetcher = HttpFetcher::from_config(&config).context("failed to build HTTP client")?;
    let pipeline = BookPipeline::new(storage, config, fetcher)?;
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled).with_notifier(notifier);

    match engine.run().await {
        Ok(RunOutcome::Saved(report)) => {
            for line in report.lines() {
                println!("{}", line);
            }
        }
        Ok(RunOutcome::NothingToSave) => {
            println!("No data to save.");
        }
        Err(e) if !e.is_fatal() => {
            // 寫檔失敗只回報，不視為程式崩潰
            tracing::error!("❌ Could not save results: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
        Err(e) => {
            tracing::error!("❌ Scrape failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
