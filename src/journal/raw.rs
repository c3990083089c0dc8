//! Presence-tracking shapes of journal lines.
//!
//! Every scalar is an `Option` so a key missing from the line (or `null`)
//! is told apart from one present with a zero value. Projection into the
//! model types happens in `into_event`, which is the only place defaults
//! are filled in.

use jiff::Timestamp;
use serde::Deserialize;

use crate::model::{
    ABSENT, BodyScanEvent, Composition, JumpEvent, Orbit, ParentRef, Percent, Ring,
    StarScanEvent,
};

/// One entry of `Parents`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawParent {
    star: Option<i64>,
    planet: Option<i64>,
    ring: Option<i64>,
    null: Option<i64>,
}

impl From<RawParent> for ParentRef {
    fn from(raw: RawParent) -> Self {
        Self {
            star: raw.star.unwrap_or(ABSENT),
            planet: raw.planet.unwrap_or(ABSENT),
            ring: raw.ring.unwrap_or(ABSENT),
            null: raw.null.unwrap_or(ABSENT),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawOrbit {
    semi_major_axis: Option<f64>,
    eccentricity: Option<f64>,
    orbital_inclination: Option<f64>,
    periapsis: Option<f64>,
    orbital_period: Option<f64>,
    rotation_period: Option<f64>,
    axial_tilt: Option<f64>,
}

impl From<RawOrbit> for Orbit {
    fn from(raw: RawOrbit) -> Self {
        Self {
            semi_major_axis: raw.semi_major_axis.unwrap_or_default(),
            eccentricity: raw.eccentricity.unwrap_or_default(),
            inclination: raw.orbital_inclination.unwrap_or_default(),
            periapsis: raw.periapsis.unwrap_or_default(),
            orbital_period: raw.orbital_period.unwrap_or_default(),
            rotation_period: raw.rotation_period.unwrap_or_default(),
            axial_tilt: raw.axial_tilt.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawJump {
    #[serde(rename = "timestamp")]
    timestamp: Option<String>,
    star_system: Option<String>,
    system_address: Option<u64>,
    body: Option<String>,
    #[serde(rename = "BodyID")]
    body_id: Option<u64>,
    body_type: Option<String>,
}

impl RawJump {
    /// `None` when the line does not name the system it jumped to.
    pub(super) fn into_event(self) -> Option<JumpEvent> {
        let system_name = self.star_system.filter(|s| !s.is_empty())?;
        Some(JumpEvent {
            timestamp: parse_timestamp(self.timestamp.as_deref()),
            system_name,
            system_address: self.system_address.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            body_id: self.body_id.unwrap_or_default(),
            body_type: self.body_type.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawStarScan {
    #[serde(rename = "timestamp")]
    timestamp: Option<String>,
    body_name: Option<String>,
    #[serde(rename = "BodyID")]
    body_id: Option<u64>,
    parents: Option<Vec<RawParent>>,
    star_system: Option<String>,
    system_address: Option<u64>,
    #[serde(rename = "DistanceFromArrivalLS")]
    distance_from_arrival_ls: Option<f64>,
    star_type: Option<String>,
    subclass: Option<u32>,
    stellar_mass: Option<f64>,
    radius: Option<f64>,
    absolute_magnitude: Option<f64>,
    #[serde(rename = "Age_MY")]
    age_my: Option<f64>,
    surface_temperature: Option<f64>,
    luminosity: Option<String>,
    #[serde(flatten)]
    orbit: RawOrbit,
    rings: Option<Vec<Ring>>,
    was_discovered: Option<bool>,
    was_mapped: Option<bool>,
}

impl RawStarScan {
    /// `None` when the scan carries no stellar type.
    pub(super) fn into_event(self) -> Option<StarScanEvent> {
        let stellar_type = self.star_type.filter(|s| !s.is_empty())?;
        Some(StarScanEvent {
            timestamp: parse_timestamp(self.timestamp.as_deref()),
            body_name: self.body_name.unwrap_or_default(),
            body_id: self.body_id.unwrap_or_default(),
            parents: parents(self.parents),
            system_name: self.star_system.unwrap_or_default(),
            system_address: self.system_address.unwrap_or_default(),
            distance_from_arrival: self.distance_from_arrival_ls.unwrap_or_default(),
            stellar_type,
            subclass: self.subclass.unwrap_or_default(),
            stellar_mass: self.stellar_mass.unwrap_or_default(),
            radius: self.radius.unwrap_or_default(),
            absolute_magnitude: self.absolute_magnitude.unwrap_or_default(),
            age: self.age_my.unwrap_or_default(),
            surface_temperature: self.surface_temperature.unwrap_or_default(),
            luminosity: self.luminosity.unwrap_or_default(),
            orbit: self.orbit.into(),
            rings: self.rings.unwrap_or_default(),
            was_discovered: self.was_discovered.unwrap_or_default(),
            was_mapped: self.was_mapped.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawBodyScan {
    #[serde(rename = "timestamp")]
    timestamp: Option<String>,
    body_name: Option<String>,
    #[serde(rename = "BodyID")]
    body_id: Option<u64>,
    parents: Option<Vec<RawParent>>,
    star_system: Option<String>,
    system_address: Option<u64>,
    #[serde(rename = "DistanceFromArrivalLS")]
    distance_from_arrival_ls: Option<f64>,
    tidal_lock: Option<bool>,
    terraform_state: Option<String>,
    planet_class: Option<String>,
    atmosphere: Option<String>,
    atmosphere_type: Option<String>,
    atmosphere_composition: Option<Vec<Percent>>,
    volcanism: Option<String>,
    #[serde(rename = "MassEM")]
    mass_em: Option<f64>,
    radius: Option<f64>,
    surface_gravity: Option<f64>,
    surface_temperature: Option<f64>,
    surface_pressure: Option<f64>,
    landable: Option<bool>,
    materials: Option<Vec<Percent>>,
    composition: Option<Composition>,
    #[serde(flatten)]
    orbit: RawOrbit,
    rings: Option<Vec<Ring>>,
    was_discovered: Option<bool>,
    was_mapped: Option<bool>,
}

impl RawBodyScan {
    /// `None` when the scan carries no planet class.
    pub(super) fn into_event(self) -> Option<BodyScanEvent> {
        let planet_class = self.planet_class.filter(|s| !s.is_empty())?;
        Some(BodyScanEvent {
            timestamp: parse_timestamp(self.timestamp.as_deref()),
            body_name: self.body_name.unwrap_or_default(),
            body_id: self.body_id.unwrap_or_default(),
            parents: parents(self.parents),
            system_name: self.star_system.unwrap_or_default(),
            system_address: self.system_address.unwrap_or_default(),
            distance_from_arrival: self.distance_from_arrival_ls.unwrap_or_default(),
            tidal_lock: self.tidal_lock.unwrap_or_default(),
            terraform_state: self.terraform_state.unwrap_or_default(),
            planet_class,
            atmosphere: self.atmosphere.unwrap_or_default(),
            atmosphere_type: self.atmosphere_type.unwrap_or_default(),
            atmosphere_composition: self.atmosphere_composition.unwrap_or_default(),
            volcanism: self.volcanism.unwrap_or_default(),
            mass: self.mass_em.unwrap_or_default(),
            radius: self.radius.unwrap_or_default(),
            surface_gravity: self.surface_gravity.unwrap_or_default(),
            surface_temperature: self.surface_temperature.unwrap_or_default(),
            surface_pressure: self.surface_pressure.unwrap_or_default(),
            landable: self.landable.unwrap_or_default(),
            materials: self.materials.unwrap_or_default(),
            composition: self.composition.unwrap_or_default(),
            orbit: self.orbit.into(),
            rings: self.rings.unwrap_or_default(),
            was_discovered: self.was_discovered.unwrap_or_default(),
            was_mapped: self.was_mapped.unwrap_or_default(),
        })
    }
}

fn parents(raw: Option<Vec<RawParent>>) -> Vec<ParentRef> {
    raw.unwrap_or_default()
        .into_iter()
        .map(ParentRef::from)
        .collect()
}

/// Journal timestamps are RFC 3339; anything else is treated as missing.
fn parse_timestamp(raw: Option<&str>) -> Option<Timestamp> {
    raw.and_then(|s| s.parse().ok())
}
