// src/utils/report.rs
use std::fs;
use std::path::Path;

use crate::manual::models::{SearchBounds, UnitId};
use crate::utils::error::AppError;

/// Writes a heading-offset report for a manual document.
///
/// Scans the document for every in-bounds `# UNIT <major>.<minor>:` marker
/// and lists the ones present, sorted by byte offset. When an extraction
/// comes back empty, the report shows which headings the document actually
/// contains and where.
pub fn write_heading_report(
    document: &str,
    bounds: SearchBounds,
    path: &Path,
) -> Result<(), AppError> {
    let mut found: Vec<(usize, String)> = Vec::new();

    for major in 1..=bounds.max_major {
        for minor in 1..=bounds.max_minor {
            let marker = UnitId::new(major, minor).marker();
            if let Some(offset) = document.find(&marker) {
                found.push((offset, marker));
            }
        }
    }

    found.sort_by_key(|entry| entry.0);

    let mut report = format!(
        "document length: {} bytes\nheadings found: {}\n\n",
        document.len(),
        found.len()
    );
    for (offset, marker) in &found {
        report.push_str(&format!("{:>10}  {}\n", offset, marker));
    }

    fs::write(path, report)?;

    tracing::info!("Saved heading report to {}", path.display());
    Ok(())
}
