#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_filename, validate_non_empty_string, validate_path, validate_range, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str =
    "http://books.toscrape.com/catalogue/category/books/science_22/index.html";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_CSV_FILENAME: &str = "books.csv";
pub const DEFAULT_JSON_FILENAME: &str = "books.json";
pub const DEFAULT_CURRENCY: &str = "GBP";
pub const DEFAULT_SOURCE_NAME: &str = "BooksToScrape";

/// What to do with a book whose availability element is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityPolicy {
    /// Keep the book and store [`crate::domain::model::UNKNOWN_AVAILABILITY`].
    #[default]
    Sentinel,
    /// Drop the book like a missing title or price.
    Skip,
}

/// Selectors and constants describing the catalog page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub container_selector: String,
    pub title_selector: String,
    pub price_selector: String,
    pub availability_selector: String,
    pub availability_policy: AvailabilityPolicy,
    pub currency: String,
    pub source_name: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            container_selector: "article.product_pod".to_string(),
            title_selector: "h3 a".to_string(),
            price_selector: "p.price_color".to_string(),
            availability_selector: "p.instock.availability".to_string(),
            availability_policy: AvailabilityPolicy::Sentinel,
            currency: DEFAULT_CURRENCY.to_string(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
        }
    }
}

/// Fully resolved settings for one run. Built once, never mutated by the pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub output_path: String,
    pub csv_filename: String,
    pub json_filename: String,
    pub open_browser: bool,
    pub monitor: bool,
    pub extractor: ExtractorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            csv_filename: DEFAULT_CSV_FILENAME.to_string(),
            json_filename: DEFAULT_JSON_FILENAME.to_string(),
            open_browser: false,
            monitor: false,
            extractor: ExtractorConfig::default(),
        }
    }
}

impl ConfigProvider for AppConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn csv_filename(&self) -> &str {
        &self.csv_filename
    }

    fn json_filename(&self) -> &str {
        &self.json_filename
    }

    fn extractor(&self) -> &ExtractorConfig {
        &self.extractor
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source_url", &self.source_url)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        validate_path("output_path", &self.output_path)?;
        validate_filename("csv_filename", &self.csv_filename, "csv")?;
        validate_filename("json_filename", &self.json_filename, "json")?;
        validate_non_empty_string("extract.currency", &self.extractor.currency)?;
        validate_non_empty_string("extract.source_name", &self.extractor.source_name)?;
        Ok(())
    }
}
