//! Totals: valuable bodies per stellar-type bucket.
//!
//! Every star opens its bucket (see [`StarRecord::bucket_key`]). A body is
//! attributed to a star of the same system when their recorded parent ids
//! are equal, and only if it has not been counted before. Counting marks
//! the body, so a second pass over the same systems adds nothing until
//! [`reset_counted`] is called.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{BodyRecord, StarRecord, StarSystem};

/// Counters for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyCounts {
    pub water_worlds: u64,
    pub earthlike_bodies: u64,
    pub ammonia_worlds: u64,
}

impl BodyCounts {
    pub fn total(&self) -> u64 {
        self.water_worlds + self.earthlike_bodies + self.ammonia_worlds
    }

    fn increment(&mut self, class: ValuableClass) {
        match class {
            ValuableClass::WaterWorld => self.water_worlds += 1,
            ValuableClass::EarthlikeBody => self.earthlike_bodies += 1,
            ValuableClass::AmmoniaWorld => self.ammonia_worlds += 1,
        }
    }
}

/// Bucket key to counters, in key order.
pub type Totals = BTreeMap<String, BodyCounts>;

/// The planet classes the totals track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuableClass {
    WaterWorld,
    EarthlikeBody,
    AmmoniaWorld,
}

impl ValuableClass {
    /// Match a journal `PlanetClass` exactly.
    pub fn from_planet_class(class: &str) -> Option<Self> {
        match class {
            "Water world" => Some(Self::WaterWorld),
            "Earthlike body" => Some(Self::EarthlikeBody),
            "Ammonia world" => Some(Self::AmmoniaWorld),
            _ => None,
        }
    }
}

/// Count valuable bodies into a fresh map.
pub fn aggregate(systems: &mut [StarSystem]) -> Totals {
    let mut totals = Totals::new();
    aggregate_into(systems, &mut totals);
    totals
}

/// Count valuable bodies into `totals`, adding to what it already holds.
pub fn aggregate_into(systems: &mut [StarSystem], totals: &mut Totals) {
    for system in systems {
        let StarSystem { stars, bodies, .. } = system;
        for star in stars.iter() {
            let counts = totals.entry(star.bucket_key()).or_default();
            count_bodies(star, bodies, counts);
        }
    }
}

fn count_bodies(star: &StarRecord, bodies: &mut [BodyRecord], counts: &mut BodyCounts) {
    for body in bodies.iter_mut().filter(|b| !b.counted) {
        if body.parent_id != star.parent_id {
            continue;
        }
        let Some(class) = ValuableClass::from_planet_class(&body.scan.planet_class) else {
            continue;
        };
        tracing::trace!(
            body = body.scan.body_name.as_str(),
            class = body.scan.planet_class.as_str(),
            parent_id = body.parent_id,
            "counted"
        );
        counts.increment(class);
        body.counted = true;
    }
}

/// Clear every body's counted mark.
pub fn reset_counted(systems: &mut [StarSystem]) {
    for body in systems.iter_mut().flat_map(|s| s.bodies.iter_mut()) {
        body.counted = false;
    }
}
