//! Star and body storage.
//!
//! List-valued fields (parents, rings, atmosphere, materials) and the bulk
//! composition are stored as JSON text.

use crate::model::{BodyRecord, ParentKind, StarRecord};

use super::{Result, Storage, schema};

impl Storage {
    /// Inserts a star record.
    pub fn insert_star(&self, star: &StarRecord) -> Result<()> {
        let scan = &star.scan;
        let orbit = &scan.orbit;
        self.conn.execute(
            schema::INSERT_STAR,
            rusqlite::params![
                star.parent_id,
                star.parent_kind.map(ParentKind::as_str),
                &scan.body_name,
                scan.body_id,
                serde_json::to_string(&scan.parents)?,
                scan.system_address,
                &scan.stellar_type,
                scan.subclass,
                scan.stellar_mass,
                scan.radius,
                scan.absolute_magnitude,
                scan.age,
                scan.surface_temperature,
                &scan.luminosity,
                orbit.semi_major_axis,
                orbit.eccentricity,
                orbit.inclination,
                orbit.periapsis,
                orbit.orbital_period,
                orbit.rotation_period,
                orbit.axial_tilt,
                serde_json::to_string(&scan.rings)?,
                scan.was_discovered,
                scan.was_mapped,
            ],
        )?;
        Ok(())
    }

    /// Inserts a body record.
    pub fn insert_body(&self, body: &BodyRecord) -> Result<()> {
        let scan = &body.scan;
        let orbit = &scan.orbit;
        self.conn.execute(
            schema::INSERT_BODY,
            rusqlite::params![
                body.parent_id,
                body.parent_kind.map(ParentKind::as_str),
                &scan.body_name,
                scan.body_id,
                serde_json::to_string(&scan.parents)?,
                scan.system_address,
                scan.tidal_lock,
                &scan.terraform_state,
                &scan.planet_class,
                &scan.atmosphere,
                &scan.atmosphere_type,
                serde_json::to_string(&scan.atmosphere_composition)?,
                &scan.volcanism,
                scan.mass,
                scan.radius,
                scan.surface_gravity,
                scan.surface_temperature,
                scan.surface_pressure,
                scan.landable,
                serde_json::to_string(&scan.materials)?,
                serde_json::to_string(&scan.composition)?,
                orbit.semi_major_axis,
                orbit.eccentricity,
                orbit.inclination,
                orbit.periapsis,
                orbit.orbital_period,
                orbit.rotation_period,
                orbit.axial_tilt,
                serde_json::to_string(&scan.rings)?,
                scan.was_discovered,
                scan.was_mapped,
            ],
        )?;
        Ok(())
    }
}
