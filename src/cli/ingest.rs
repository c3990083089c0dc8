//! `loopy ingest`: assemble journals and persist them.

use std::path::Path;

use crate::assemble::Assembler;
use crate::ingest::{IngestOptions, ingest_directory};
use crate::model::StarSystem;
use crate::storage::Storage;

use super::format::{format_counts, format_file_report};

pub(super) fn cmd_ingest(storage: Storage, dir: &Path, options: IngestOptions) -> Result<(), String> {
    let mut assembler = Assembler::new(storage);
    let report = ingest_directory(&mut assembler, dir, options).map_err(|e| e.to_string())?;

    if report.files.is_empty() {
        println!("No journals in {}", dir.display());
        return Ok(());
    }

    for file in &report.files {
        println!("{}", format_file_report(file));
    }

    let state = assembler.state();
    println!(
        "Assembled {} systems (last: {})",
        state.systems().len(),
        state.current().map_or("none", StarSystem::name)
    );

    let counts = assembler
        .sink()
        .counts()
        .map_err(|e| format!("failed to count stored records: {e}"))?;
    println!("{}", format_counts(&counts));

    let failed = report.failures().count();
    if failed > 0 {
        return Err(format!("{failed} of {} journals failed", report.files.len()));
    }
    Ok(())
}
