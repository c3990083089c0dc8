//! System storage: insert and list systems.

use crate::model::StarSystem;

use super::{Result, Storage, schema};

/// A system row as read back from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSystem {
    pub address: u64,
    pub name: String,
    pub arrival_body: String,
    pub arrived_at: Option<String>,
}

impl Storage {
    /// Inserts a system from its originating jump.
    pub fn insert_system(&self, system: &StarSystem) -> Result<()> {
        let jump = &system.jump;
        self.conn.execute(
            schema::INSERT_SYSTEM,
            rusqlite::params![
                jump.system_address,
                &jump.system_name,
                &jump.body,
                jump.body_id,
                &jump.body_type,
                jump.timestamp.map(|t| t.to_string()),
            ],
        )?;
        Ok(())
    }

    /// Lists stored systems, ordered by name.
    pub fn list_systems(&self) -> Result<Vec<StoredSystem>> {
        let mut stmt = self.conn.prepare(
            "SELECT SystemAddress, StarSystem, Body, ArrivedAt FROM Systems ORDER BY StarSystem",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredSystem {
                address: row.get(0)?,
                name: row.get(1)?,
                arrival_body: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                arrived_at: row.get(3)?,
            })
        })?;
        let mut systems = Vec::new();
        for row in rows {
            systems.push(row?);
        }
        Ok(systems)
    }
}
