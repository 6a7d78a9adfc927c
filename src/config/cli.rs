use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-etl")]
#[command(about = "Scrape a book catalog page into CSV and JSON")]
pub struct CliConfig {
    /// TOML config file; flags given on the command line take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long)]
    pub csv_file: Option<String>,

    #[arg(long)]
    pub json_file: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long, help = "Open the catalog page in a browser after saving")]
    pub open_browser: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

impl CliConfig {
    /// 預設值 <- 設定檔 <- 命令列參數
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?.into_app_config()
            }
            None => AppConfig::default(),
        };

        if let Some(url) = &self.url {
            config.source_url = url.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.output_path = output_path.clone();
        }
        if let Some(csv_file) = &self.csv_file {
            config.csv_filename = csv_file.clone();
        }
        if let Some(json_file) = &self.json_file {
            config.json_filename = json_file.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config.open_browser |= self.open_browser;
        config.monitor |= self.monitor;

        Ok(config)
    }
}
