use crate::config::ExtractorConfig;
use crate::domain::model::{BookRecord, LoadReport, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Human-readable location of `path`, used in console output.
    fn display_path(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn output_path(&self) -> &str;
    fn csv_filename(&self) -> &str;
    fn json_filename(&self) -> &str;
    fn extractor(&self) -> &ExtractorConfig;
}

/// Retrieves raw markup for a URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Side effect fired after a successful run. Never affects the outcome.
pub trait Notifier: Send + Sync {
    fn notify(&self, url: &str) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// URL the pipeline scrapes.
    fn source(&self) -> &str;
    async fn extract(&self) -> Result<Vec<BookRecord>>;
    async fn transform(&self, records: Vec<BookRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<LoadReport>;
}
