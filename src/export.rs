// CSV export of matched panel IDs.
//
// One header row (`panel_id (mb_sn)`) followed by one ID per line. The file
// is produced locally; nothing is sent back to the backend.

use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::info;

/// Header of the single CSV column.
pub const CSV_HEADER: &str = "panel_id (mb_sn)";

/// Pull `mb_sn` out of result rows.
///
/// Accepts string or integer IDs. Rows without one are skipped; repeated IDs
/// keep their first position only.
pub fn collect_panel_ids(rows: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(|row| match row.get("mb_sn") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Write the header and one ID per line to `writer`.
pub fn write_panel_ids<W: Write>(writer: W, ids: &[String]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record([CSV_HEADER])
        .context("Failed to write CSV header")?;
    for id in ids {
        csv_writer
            .write_record([id])
            .with_context(|| format!("Failed to write panel ID {id}"))?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Export the IDs found in `rows` to `path`. Returns how many were written.
pub fn export_rows(rows: &[Value], path: &Path) -> Result<usize> {
    let ids = collect_panel_ids(rows);
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    write_panel_ids(file, &ids)?;
    info!(path = %path.display(), ids = ids.len(), "Exported panel IDs");
    Ok(ids.len())
}

/// `panel_ids_YYYYMMDD_HHMMSS.csv` for the given instant.
pub fn default_export_filename(now: DateTime<Local>) -> String {
    format!("panel_ids_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
