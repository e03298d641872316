//! Assertions over exported payloads.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the CSV has the given header and number of data rows.
///
/// Every line after the header counts as a row, blank ones included.
pub fn assert_csv_shape(csv: &str, header: &[&str], rows: usize) -> Result<()> {
    let (first, body) = csv.split_once('\n').context("CSV has no header terminator")?;
    let first = first.trim_end_matches('\r');

    if first != header.join(",") {
        anyhow::bail!("Expected header {:?}, got {:?}", header.join(","), first);
    }

    let count = if body.is_empty() {
        0
    } else {
        body.split('\n').count()
    };
    if count != rows {
        anyhow::bail!("Expected {} data rows, got {}", rows, count);
    }

    Ok(())
}

/// Assert every object of a JSON export has exactly `labels` as keys, in order.
pub fn assert_json_keys(json: &Value, labels: &[&str]) -> Result<()> {
    let items = json.as_array().context("Expected a JSON array")?;

    for (i, item) in items.iter().enumerate() {
        let keys: Vec<&str> = item
            .as_object()
            .with_context(|| format!("Item {} is not an object", i))?
            .keys()
            .map(String::as_str)
            .collect();

        if keys != labels {
            anyhow::bail!("Item {} has keys {:?}, expected {:?}", i, keys, labels);
        }
    }

    Ok(())
}
