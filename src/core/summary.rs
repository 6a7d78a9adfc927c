use crate::domain::model::{BookRecord, LoadReport, PriceSummary};

/// Cheapest and most expensive books; `None` when there is nothing to summarize.
///
/// Ties keep the earliest record.
pub fn summarize(records: &[BookRecord]) -> Option<PriceSummary> {
    let (first, rest) = records.split_first()?;

    let mut cheapest = first;
    let mut most_expensive = first;
    for record in rest {
        if record.price < cheapest.price {
            cheapest = record;
        }
        if record.price > most_expensive.price {
            most_expensive = record;
        }
    }

    Some(PriceSummary {
        cheapest: cheapest.clone(),
        most_expensive: most_expensive.clone(),
    })
}

fn currency_symbol(currency: &str) -> &str {
    match currency {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        other => other,
    }
}

impl PriceSummary {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "Cheapest: {} ({}{:.2})",
                self.cheapest.title,
                currency_symbol(&self.cheapest.currency),
                self.cheapest.price
            ),
            format!(
                "Most expensive: {} ({}{:.2})",
                self.most_expensive.title,
                currency_symbol(&self.most_expensive.currency),
                self.most_expensive.price
            ),
        ]
    }
}

impl LoadReport {
    /// Console report printed after a successful run.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Saved {} books to {} and {}",
                self.records_saved, self.csv_path, self.json_path
            ),
            format!("Finished at {}", self.finished_at.format("%Y-%m-%d %H:%M:%S UTC")),
        ];
        if let Some(summary) = &self.summary {
            lines.extend(summary.lines());
        }
        lines
    }
}
