//! Typed journal events.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ParentRef;

/// One decoded journal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum Event {
    /// Arrival in a system.
    Jump(JumpEvent),

    /// Automatic scan of a star.
    StarScan(Box<StarScanEvent>),

    /// Detailed scan of a planet or moon.
    BodyScan(Box<BodyScanEvent>),

    /// Anything else, or a known event that lacked its identifying field.
    Other(OtherEvent),
}

/// The two discriminator strings of a line that decoded to nothing specific.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherEvent {
    pub kind: String,
    pub scan_type: String,
}

/// An `FSDJump`: the ship arrived in `system_name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpEvent {
    pub timestamp: Option<Timestamp>,
    pub system_name: String,
    pub system_address: u64,
    pub body: String,
    pub body_id: u64,
    pub body_type: String,
}

/// Orbital elements shared by star and body scans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orbit {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub periapsis: f64,
    pub orbital_period: f64,
    pub rotation_period: f64,
    pub axial_tilt: f64,
}

/// A ring around a star or body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Ring {
    pub name: String,
    pub ring_class: String,
    #[serde(rename = "MassMT")]
    pub mass_mt: f64,
    pub inner_rad: f64,
    pub outer_rad: f64,
}

/// A named share, used for atmosphere gases and surface materials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Percent {
    pub name: String,
    pub percent: f64,
}

/// Bulk composition of a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Composition {
    pub ice: f64,
    pub rock: f64,
    pub metal: f64,
}

/// A `Scan` with `ScanType` `AutoScan` that identified a star.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarScanEvent {
    pub timestamp: Option<Timestamp>,
    pub body_name: String,
    pub body_id: u64,
    pub parents: Vec<ParentRef>,
    pub system_name: String,
    pub system_address: u64,
    pub distance_from_arrival: f64,
    pub stellar_type: String,
    pub subclass: u32,
    pub stellar_mass: f64,
    pub radius: f64,
    pub absolute_magnitude: f64,
    pub age: f64,
    pub surface_temperature: f64,
    pub luminosity: String,
    pub orbit: Orbit,
    pub rings: Vec<Ring>,
    pub was_discovered: bool,
    pub was_mapped: bool,
}

/// A `Scan` with `ScanType` `Detailed` that identified a planet or moon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyScanEvent {
    pub timestamp: Option<Timestamp>,
    pub body_name: String,
    pub body_id: u64,
    pub parents: Vec<ParentRef>,
    pub system_name: String,
    pub system_address: u64,
    pub distance_from_arrival: f64,
    pub tidal_lock: bool,
    pub terraform_state: String,
    pub planet_class: String,
    pub atmosphere: String,
    pub atmosphere_type: String,
    pub atmosphere_composition: Vec<Percent>,
    pub volcanism: String,
    pub mass: f64,
    pub radius: f64,
    pub surface_gravity: f64,
    pub surface_temperature: f64,
    pub surface_pressure: f64,
    pub landable: bool,
    pub materials: Vec<Percent>,
    pub composition: Composition,
    pub orbit: Orbit,
    pub rings: Vec<Ring>,
    pub was_discovered: bool,
    pub was_mapped: bool,
}
