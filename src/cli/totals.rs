//! `loopy totals`: assemble journals in memory and print totals.

use std::path::Path;
use std::slice;

use crate::assemble::Assembler;
use crate::ingest::{IngestOptions, ingest_directory};
use crate::totals::{Totals, aggregate, aggregate_into, reset_counted};

use super::format::{format_file_report, format_totals};

pub(super) fn cmd_totals(
    dir: &Path,
    options: IngestOptions,
    json: bool,
    by_system: bool,
) -> Result<(), String> {
    let mut assembler = Assembler::detached();
    let report = ingest_directory(&mut assembler, dir, options).map_err(|e| e.to_string())?;
    for file in report.failures() {
        eprintln!("{}", format_file_report(file));
    }

    let mut state = assembler.into_state();
    let systems = state.systems_mut();

    if by_system {
        for system in systems.iter_mut() {
            let totals = aggregate(slice::from_mut(system));
            if totals.is_empty() {
                continue;
            }
            println!("{} ({})", system.name(), system.address());
            println!("{}", format_totals(&totals));
        }
        // The per-system pass marked every counted body.
        reset_counted(systems);
    }

    let mut totals = Totals::new();
    aggregate_into(systems, &mut totals);

    if json {
        let out = serde_json::to_string_pretty(&totals)
            .map_err(|e| format!("failed to serialize totals: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", format_totals(&totals));
    }

    Ok(())
}
