use crate::args::SelectionArgs;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;
use tstamp_engine::TimestampTable;
use tstamp_types::FileRecord;

pub fn load_table(path: &Path) -> Result<TimestampTable> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    let records = FileRecord::parse_list(&json)
        .with_context(|| format!("Failed to parse records in {}", path.display()))?;
    Ok(TimestampTable::new(records))
}

/// Load the records file and check the rows `selection` names.
pub fn checked_table(selection: &SelectionArgs) -> Result<TimestampTable> {
    let mut table = load_table(&selection.records)?;

    if selection.all {
        table.check_all(true);
        return Ok(table);
    }

    let found = table.check_file_ids(selection.select.as_slice());
    for id in &selection.select {
        if !table.records().iter().any(|r| r.value("file_id") == Some(id.as_str())) {
            warn!(file_id = %id, "no row with this file id");
        }
    }
    tracing::debug!(found, requested = selection.select.len(), "rows checked");
    Ok(table)
}
