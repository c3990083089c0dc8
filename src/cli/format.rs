//! Output formatting for CLI display.

use crate::ingest::FileReport;
use crate::storage::{StoredCounts, StoredSystem};
use crate::totals::Totals;

const BUCKET_HEADER: &str = "BUCKET";

/// Render totals as an aligned table, one row per bucket in key order.
pub(super) fn format_totals(totals: &Totals) -> String {
    if totals.is_empty() {
        return "No stars scanned\n".to_string();
    }

    let width = totals
        .keys()
        .map(String::len)
        .chain([BUCKET_HEADER.len()])
        .max()
        .unwrap_or_default();

    let mut out = format!(
        "{BUCKET_HEADER:<width$}  {:>5}  {:>9}  {:>7}  {:>5}\n",
        "WATER", "EARTHLIKE", "AMMONIA", "TOTAL"
    );
    for (key, counts) in totals {
        out.push_str(&format!(
            "{key:<width$}  {:>5}  {:>9}  {:>7}  {:>5}\n",
            counts.water_worlds,
            counts.earthlike_bodies,
            counts.ammonia_worlds,
            counts.total(),
        ));
    }
    out
}

/// One line per journal file: line counts, or the error that stopped it.
pub(super) fn format_file_report(report: &FileReport) -> String {
    let name = report
        .path
        .file_name()
        .map_or_else(|| report.path.display().to_string(), |n| n.to_string_lossy().into_owned());
    match &report.outcome {
        Ok(counts) => format!(
            "{name}: {} lines, {} recognized",
            counts.lines, counts.recognized
        ),
        Err(e) => format!("{name}: failed: {e}"),
    }
}

pub(super) fn format_counts(counts: &StoredCounts) -> String {
    format!(
        "Stored: {} systems, {} stars, {} bodies",
        counts.systems, counts.stars, counts.bodies
    )
}

pub(super) fn format_system(system: &StoredSystem) -> String {
    let arrived = system.arrived_at.as_deref().unwrap_or("-");
    format!(
        "{:<20}  {}  {}  {}",
        system.address, arrived, system.name, system.arrival_body
    )
}
