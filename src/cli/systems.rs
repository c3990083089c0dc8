//! `loopy systems`: list stored systems.

use crate::storage::Storage;

use super::format::format_system;

pub(super) fn cmd_systems(storage: &Storage) -> Result<(), String> {
    let systems = storage
        .list_systems()
        .map_err(|e| format!("failed to list systems: {e}"))?;

    if systems.is_empty() {
        println!("No systems");
        return Ok(());
    }

    for system in &systems {
        println!("{}", format_system(system));
    }

    Ok(())
}
