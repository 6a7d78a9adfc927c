pub mod etl;
pub mod extractor;
pub mod pipeline;
pub mod sink;
pub mod summary;

pub use crate::domain::model::{BookRecord, PriceSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Fetcher, Notifier, Pipeline, Storage};
pub use crate::utils::error::Result;
