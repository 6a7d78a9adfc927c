//! Turns catalog markup into [`BookRecord`]s.
//!
//! Each container element yields at most one record. A container is skipped
//! when its title link or price element is missing; a missing availability
//! element is replaced by [`UNKNOWN_AVAILABILITY`] unless the configured
//! [`AvailabilityPolicy`] says otherwise.

use crate::config::{AvailabilityPolicy, ExtractorConfig};
use crate::domain::model::{
    BookRecord, ExtractionReport, SkipReason, SkippedItem, UNKNOWN_AVAILABILITY,
};
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("price pattern is a valid regex"));

/// Reads the first `digits.digits` group out of a price label.
///
/// Whatever precedes the number (`£`, `Â£` from a mis-decoded page, `$`) is
/// ignored. Labels without such a group yield `0.0`.
pub fn parse_price(text: &str) -> f64 {
    PRICE_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}

pub fn normalize_availability(raw: Option<&str>) -> String {
    match raw {
        Some(text) => text.trim().to_string(),
        None => UNKNOWN_AVAILABILITY.to_string(),
    }
}

fn compile(field: &str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| EtlError::ConfigError {
        message: format!("invalid {} selector '{}': {:?}", field, selector, e),
    })
}

pub struct Extractor {
    container: Selector,
    title: Selector,
    price: Selector,
    availability: Selector,
    policy: AvailabilityPolicy,
    currency: String,
    source: String,
}

impl Extractor {
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        Ok(Self {
            container: compile("container", &config.container_selector)?,
            title: compile("title", &config.title_selector)?,
            price: compile("price", &config.price_selector)?,
            availability: compile("availability", &config.availability_selector)?,
            policy: config.availability_policy,
            currency: config.currency.clone(),
            source: config.source_name.clone(),
        })
    }

    pub fn extract(&self, markup: &str) -> ExtractionReport {
        let document = Html::parse_document(markup);
        let mut report = ExtractionReport::default();

        for (index, container) in document.select(&self.container).enumerate() {
            match self.extract_item(container) {
                Ok(record) => report.records.push(record),
                Err(reason) => {
                    tracing::warn!("⚠️ Skipping item #{}: {}", index, reason);
                    report.skipped.push(SkippedItem { index, reason });
                }
            }
        }

        tracing::debug!(
            "Extracted {} of {} containers ({} skipped)",
            report.records.len(),
            report.containers_seen(),
            report.skipped.len()
        );

        report
    }

    fn extract_item(&self, container: ElementRef<'_>) -> std::result::Result<BookRecord, SkipReason> {
        let link = container
            .select(&self.title)
            .next()
            .ok_or(SkipReason::MissingTitle)?;
        let title = link.value().attr("title").ok_or(SkipReason::MissingTitle)?;
        if title.trim().is_empty() {
            return Err(SkipReason::EmptyTitle);
        }

        let price_text = container
            .select(&self.price)
            .next()
            .map(|element| element.text().collect::<String>())
            .ok_or(SkipReason::MissingPrice)?;

        let availability_text = container
            .select(&self.availability)
            .next()
            .map(|element| element.text().collect::<String>());
        if availability_text.is_none() && self.policy == AvailabilityPolicy::Skip {
            return Err(SkipReason::MissingAvailability);
        }

        Ok(BookRecord {
            title: title.to_string(),
            price: parse_price(&price_text),
            currency: self.currency.clone(),
            availability: normalize_availability(availability_text.as_deref()),
            source: self.source.clone(),
        })
    }
}

/// One-shot helper: compile selectors from `config` and extract.
pub fn extract(markup: &str, config: &ExtractorConfig) -> Result<ExtractionReport> {
    Ok(Extractor::new(config)?.extract(markup))
}

pub fn extract_records(markup: &str, config: &ExtractorConfig) -> Result<Vec<BookRecord>> {
    Ok(extract(markup, config)?.records)
}
