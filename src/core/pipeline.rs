use crate::core::extractor::Extractor;
use crate::core::{sink, summary};
use crate::domain::model::{BookRecord, LoadReport, TransformResult};
use crate::domain::ports::{ConfigProvider, Fetcher, Pipeline, Storage};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;

/// Catalog page → book records → `books.csv` + `books.json`.
pub struct BookPipeline<S: Storage, C: ConfigProvider, F: Fetcher> {
    storage: S,
    config: C,
    fetcher: F,
    extractor: Extractor,
}

impl<S: Storage, C: ConfigProvider, F: Fetcher> BookPipeline<S, C, F> {
    pub fn new(storage: S, config: C, fetcher: F) -> Result<Self> {
        let extractor = Extractor::new(config.extractor())?;
        Ok(Self {
            storage,
            config,
            fetcher,
            extractor,
        })
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider, F: Fetcher> Pipeline for BookPipeline<S, C, F> {
    fn source(&self) -> &str {
        self.config.source_url()
    }

    async fn extract(&self) -> Result<Vec<BookRecord>> {
        let markup = match self.fetcher.fetch(self.config.source_url()).await {
            Ok(markup) => markup,
            Err(e) => {
                // 抓取失敗不中斷流程，視為沒有資料
                tracing::error!("❌ Failed to fetch {}: {}", self.config.source_url(), e);
                return Ok(Vec::new());
            }
        };

        let report = self.extractor.extract(&markup);
        if !report.skipped.is_empty() {
            tracing::warn!(
                "Skipped {} of {} items with missing fields",
                report.skipped.len(),
                report.containers_seen()
            );
        }

        Ok(report.records)
    }

    async fn transform(&self, records: Vec<BookRecord>) -> Result<TransformResult> {
        let summary = summary::summarize(&records);
        let csv_output = sink::render_csv(&records)?;
        let json_output = sink::render_json(&records)?;

        Ok(TransformResult {
            records,
            summary,
            csv_output,
            json_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<LoadReport> {
        if result.records.is_empty() {
            return Err(EtlError::ProcessingError {
                message: "no records to save".to_string(),
            });
        }

        let csv_filename = self.config.csv_filename();
        let json_filename = self.config.json_filename();

        tracing::debug!("Writing {} records to {}", result.records.len(), csv_filename);
        self.storage
            .write_file(csv_filename, result.csv_output.as_bytes())
            .await?;

        tracing::debug!("Writing {} records to {}", result.records.len(), json_filename);
        if let Err(e) = self
            .storage
            .write_file(json_filename, result.json_output.as_bytes())
            .await
        {
            tracing::warn!(
                "⚠️ {} was written but {} was not",
                self.storage.display_path(csv_filename),
                self.storage.display_path(json_filename)
            );
            return Err(e);
        }

        Ok(LoadReport {
            records_saved: result.records.len(),
            csv_path: self.storage.display_path(csv_filename),
            json_path: self.storage.display_path(json_filename),
            summary: result.summary,
            finished_at: chrono::Utc::now(),
        })
    }
}
