use crate::config::{AppConfig, ExtractorConfig};
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔格式，每個欄位都可省略，省略時使用預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub extract: ExtractorConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
    pub notify: Option<NotifyConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    pub csv_filename: Option<String>,
    pub json_filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    pub open_browser: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BOOKS_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 疊加到既有設定上，只覆寫檔案中有給的欄位
    pub fn apply_to(self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = self.source.url {
            config.source_url = url;
        }
        if let Some(timeout) = self.source.timeout_seconds {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = self.source.user_agent {
            config.user_agent = user_agent;
        }
        if let Some(output_path) = self.load.output_path {
            config.output_path = output_path;
        }
        if let Some(csv_filename) = self.load.csv_filename {
            config.csv_filename = csv_filename;
        }
        if let Some(json_filename) = self.load.json_filename {
            config.json_filename = json_filename;
        }
        if let Some(monitoring) = self.monitoring {
            config.monitor = monitoring.enabled;
        }
        if let Some(notify) = self.notify {
            config.open_browser = notify.open_browser;
        }
        config.extractor = self.extract;
        config
    }

    pub fn into_app_config(self) -> AppConfig {
        self.apply_to(AppConfig::default())
    }
}
