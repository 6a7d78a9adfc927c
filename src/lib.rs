pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{AppConfig, AvailabilityPolicy, ExtractorConfig};

pub use adapters::{BrowserNotifier, HttpFetcher, LocalStorage, NoopNotifier};
pub use self::core::{
    etl::EtlEngine,
    extractor::{extract, extract_records, parse_price, Extractor},
    pipeline::BookPipeline,
    summary::summarize,
};
pub use domain::model::{BookRecord, PriceSummary, RunOutcome};
pub use utils::error::{EtlError, Result};
