use crate::domain::model::RunOutcome;
use crate::domain::ports::{Notifier, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
    notifier: Option<Box<dyn Notifier>>,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
            notifier: None,
        }
    }

    /// Fired once after both files are written.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("🚀 Starting scrape of {}", self.pipeline.source());

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} records", records.len());
        self.monitor.log_stats("Extract");

        if records.is_empty() {
            tracing::warn!("No data to save");
            self.monitor.log_final_stats();
            return Ok(RunOutcome::NothingToSave);
        }

        // Transform
        let result = self.pipeline.transform(records).await?;
        tracing::info!("🔄 Prepared CSV and JSON for {} records", result.records.len());
        self.monitor.log_stats("Transform");

        // Load
        let report = self.pipeline.load(result).await?;
        tracing::info!(
            "💾 Saved {} records to {} and {}",
            report.records_saved,
            report.csv_path,
            report.json_path
        );
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        if let Some(notifier) = &self.notifier {
            if let Err(e) = notifier.notify(self.pipeline.source()) {
                tracing::warn!("⚠️ Notification failed: {}", e);
            }
        }

        Ok(RunOutcome::Saved(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BookRecord, LoadReport, PriceSummary, TransformResult};
    use crate::utils::error::EtlError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubPipeline {
        records: Vec<BookRecord>,
        fail_load: bool,
        loads: Arc<AtomicUsize>,
    }

    impl StubPipeline {
        fn with_titles(titles: &[&str]) -> Self {
            Self {
                records: titles
                    .iter()
                    .enumerate()
                    .map(|(i, title)| BookRecord {
                        title: title.to_string(),
                        price: 10.0 + i as f64,
                        currency: "GBP".to_string(),
                        availability: "In stock".to_string(),
                        source: "BooksToScrape".to_string(),
                    })
                    .collect(),
                fail_load: false,
                loads: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl Pipeline for StubPipeline {
        fn source(&self) -> &str {
            "http://books.test/"
        }

        async fn extract(&self) -> Result<Vec<BookRecord>> {
            Ok(self.records.clone())
        }

        async fn transform(&self, records: Vec<BookRecord>) -> Result<TransformResult> {
            let summary = records.first().map(|r| PriceSummary {
                cheapest: r.clone(),
                most_expensive: r.clone(),
            });
            Ok(TransformResult {
                records,
                summary,
                csv_output: String::new(),
                json_output: String::new(),
            })
        }

        async fn load(&self, result: TransformResult) -> Result<LoadReport> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail_load {
                return Err(EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )));
            }
            Ok(LoadReport {
                records_saved: result.records.len(),
                csv_path: "books.csv".to_string(),
                json_path: "books.json".to_string(),
                summary: result.summary,
                finished_at: chrono::Utc::now(),
            })
        }
    }

    struct CountingNotifier(Arc<AtomicUsize>);

    impl Notifier for CountingNotifier {
        fn notify(&self, _url: &str) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(EtlError::ProcessingError {
                message: "no browser".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_run_saves_records() {
        let engine = EtlEngine::new(StubPipeline::with_titles(&["A", "B"]));

        let outcome = engine.run().await.unwrap();

        match outcome {
            RunOutcome::Saved(report) => {
                assert_eq!(report.records_saved, 2);
                assert_eq!(report.summary.unwrap().cheapest.title, "A");
            }
            RunOutcome::NothingToSave => panic!("expected records to be saved"),
        }
    }

    #[tokio::test]
    async fn test_run_without_records_skips_load() {
        let pipeline = StubPipeline::with_titles(&[]);
        let loads = pipeline.loads.clone();
        let engine = EtlEngine::new(pipeline);

        let outcome = engine.run().await.unwrap();

        assert!(matches!(outcome, RunOutcome::NothingToSave));
        assert_eq!(loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_run_surfaces_write_failure_without_notifying() {
        let mut pipeline = StubPipeline::with_titles(&["A"]);
        pipeline.fail_load = true;
        let notified = Arc::new(AtomicUsize::new(0));
        let engine = EtlEngine::new(pipeline)
            .with_notifier(Box::new(CountingNotifier(notified.clone())));

        let result = engine.run().await;

        assert!(matches!(result, Err(EtlError::IoError(_))));
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_notifier_failure_does_not_fail_run() {
        let notified = Arc::new(AtomicUsize::new(0));
        let engine = EtlEngine::new(StubPipeline::with_titles(&["A"]))
            .with_notifier(Box::new(CountingNotifier(notified.clone())));

        let outcome = engine.run().await.unwrap();

        assert!(matches!(outcome, RunOutcome::Saved(_)));
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }
}
