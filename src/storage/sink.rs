//! Storage as the assembler's persistence collaborator.

use crate::assemble::SystemSink;
use crate::model::{BodyRecord, StarRecord, StarSystem};

use super::{Result, Storage, StorageError};

impl SystemSink for Storage {
    fn system_created(&mut self, system: &StarSystem) {
        report("system", system.name(), self.insert_system(system));
    }

    fn star_recorded(&mut self, star: &StarRecord) {
        report("star", &star.scan.body_name, self.insert_star(star));
    }

    fn body_recorded(&mut self, body: &BodyRecord) {
        report("body", &body.scan.body_name, self.insert_body(body));
    }
}

/// Duplicates mean the record was stored by an earlier run.
fn report(record: &'static str, name: &str, result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(StorageError::Duplicate(_)) => tracing::debug!(record, name, "already stored"),
        Err(e) => tracing::warn!(record, name, error = %e, "failed to store"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::assemble::Assembler;
    use crate::model::{BodyScanEvent, Event, JumpEvent, StarScanEvent};
    use crate::storage::StoredCounts;

    use tempfile::TempDir;

    fn events() -> Vec<Event> {
        vec![
            Event::Jump(JumpEvent {
                system_name: "Sol".into(),
                system_address: 10,
                ..JumpEvent::default()
            }),
            Event::StarScan(Box::new(StarScanEvent {
                body_name: "Sol".into(),
                stellar_type: "G".into(),
                ..StarScanEvent::default()
            })),
            Event::BodyScan(Box::new(BodyScanEvent {
                body_name: "Earth".into(),
                planet_class: "Earthlike body".into(),
                ..BodyScanEvent::default()
            })),
        ]
    }

    #[test]
    fn assembler_persists_new_records() {
        let mut assembler = Assembler::new(Storage::open_in_memory().unwrap());
        assembler.process(events());

        let counts = assembler.sink().counts().unwrap();
        assert_eq!(
            counts,
            StoredCounts {
                systems: 1,
                stars: 1,
                bodies: 1,
            }
        );
    }

    #[test]
    fn duplicates_from_earlier_runs_do_not_stop_assembly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("loopy.db");

        let mut first = Assembler::new(Storage::open(&path).unwrap());
        first.process(events());

        // A fresh graph over the same database: every insert collides.
        let mut second = Assembler::new(Storage::open(&path).unwrap());
        second.process(events());

        assert_eq!(second.state().systems().len(), 1);
        assert_eq!(second.state().get("Sol").unwrap().bodies.len(), 1);
        assert_eq!(second.sink().counts().unwrap().bodies, 1);
    }

    #[test]
    fn storage_failures_do_not_stop_assembly() {
        let storage = Storage::open_in_memory().unwrap();
        storage.conn.execute_batch("DROP TABLE Bodies").unwrap();
        assert!(matches!(
            storage.insert_body(&BodyRecord::from(BodyScanEvent::default())),
            Err(StorageError::Sqlite(_))
        ));

        let mut assembler = Assembler::new(storage);
        assembler.process(events());

        let sol = assembler.state().get("Sol").unwrap();
        assert_eq!(sol.stars.len(), 1);
        assert_eq!(sol.bodies.len(), 1);
        assert_eq!(sol.bodies[0].scan.body_name, "Earth");
        assert_eq!(assembler.sink().count("Stars").unwrap(), 1);
    }
}
