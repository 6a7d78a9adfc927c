use crate::domain::model::BookRecord;
use crate::utils::error::{EtlError, Result};
use serde::Serialize;

/// CSV with a `title,price,currency,availability,source` header, rows in input order.
///
/// The header row is written even for an empty slice. The pipeline never
/// saves an empty record set, so that case only shows up when rendering directly.
pub fn render_csv(records: &[BookRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(["title", "price", "currency", "availability", "source"])?;
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("failed to flush CSV buffer: {}", e),
    })?;

    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Pretty JSON array, 4-space indent. Non-ASCII is written as-is.
pub fn render_json(records: &[BookRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| EtlError::ProcessingError {
        message: format!("JSON output is not valid UTF-8: {}", e),
    })
}

pub fn parse_json(content: &str) -> Result<Vec<BookRecord>> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<BookRecord> {
        vec![
            BookRecord {
                title: "Sapiens: A Brief History of Humankind".to_string(),
                price: 54.23,
                currency: "GBP".to_string(),
                availability: "In stock".to_string(),
                source: "BooksToScrape".to_string(),
            },
            BookRecord {
                title: "Naïve Café, \"quoted\"".to_string(),
                price: 0.1,
                currency: "GBP".to_string(),
                availability: "unknown".to_string(),
                source: "BooksToScrape".to_string(),
            },
        ]
    }

    #[test]
    fn test_render_csv() {
        let csv_output = render_csv(&sample()).unwrap();
        let lines: Vec<&str> = csv_output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "title,price,currency,availability,source");
        assert_eq!(
            lines[1],
            "Sapiens: A Brief History of Humankind,54.23,GBP,In stock,BooksToScrape"
        );
        assert_eq!(
            lines[2],
            "\"Naïve Café, \"\"quoted\"\"\",0.1,GBP,unknown,BooksToScrape"
        );
    }

    #[test]
    fn test_render_csv_empty_has_header_only() {
        let csv_output = render_csv(&[]).unwrap();
        assert_eq!(csv_output, "title,price,currency,availability,source\n");
    }

    #[test]
    fn test_render_json_keeps_field_order_and_unicode() {
        let json_output = render_json(&sample()).unwrap();

        assert!(json_output.contains("Naïve Café"));
        assert!(!json_output.contains("\\u"));
        assert!(json_output.contains("\n        \"title\""));

        let title_at = json_output.find("\"title\"").unwrap();
        let price_at = json_output.find("\"price\"").unwrap();
        let currency_at = json_output.find("\"currency\"").unwrap();
        let availability_at = json_output.find("\"availability\"").unwrap();
        let source_at = json_output.find("\"source\"").unwrap();
        assert!(title_at < price_at);
        assert!(price_at < currency_at);
        assert!(currency_at < availability_at);
        assert!(availability_at < source_at);
    }

    #[test]
    fn test_json_read_back_matches() {
        let records = sample();
        let parsed = parse_json(&render_json(&records).unwrap()).unwrap();
        assert_eq!(parsed, records);
    }
}
