//! Star systems and the records retained inside them.

use serde::{Deserialize, Serialize};

use super::{ABSENT, BodyScanEvent, JumpEvent, ParentKind, ParentRef, StarScanEvent};

/// A visited system: the jump that first reached it plus every star and
/// body scanned while it was the current system, in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub jump: JumpEvent,
    pub stars: Vec<StarRecord>,
    pub bodies: Vec<BodyRecord>,
}

impl StarSystem {
    pub fn new(jump: JumpEvent) -> Self {
        Self {
            jump,
            stars: Vec::new(),
            bodies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.jump.system_name
    }

    pub fn address(&self) -> u64 {
        self.jump.system_address
    }
}

/// A star scan retained inside its system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    pub scan: StarScanEvent,
    pub parent_kind: Option<ParentKind>,
    /// Id of the nearest parent, or [`ABSENT`] for a star with no parents.
    pub parent_id: i64,
    /// Set once by the totals pass.
    pub counted: bool,
}

impl StarRecord {
    /// Totals bucket: stellar type, subclass and luminosity run together,
    /// e.g. `K4Va`.
    pub fn bucket_key(&self) -> String {
        format!(
            "{}{}{}",
            self.scan.stellar_type, self.scan.subclass, self.scan.luminosity
        )
    }
}

impl From<StarScanEvent> for StarRecord {
    fn from(scan: StarScanEvent) -> Self {
        let (parent_kind, parent_id) = nearest_parent(&scan.parents);
        Self {
            scan,
            parent_kind,
            parent_id,
            counted: false,
        }
    }
}

/// A body scan retained inside its system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyRecord {
    pub scan: BodyScanEvent,
    pub parent_kind: Option<ParentKind>,
    /// Id of the nearest parent, or [`ABSENT`] for a body with no parents.
    pub parent_id: i64,
    /// Set once by the totals pass so a body lands in one bucket at most.
    pub counted: bool,
}

impl From<BodyScanEvent> for BodyRecord {
    fn from(scan: BodyScanEvent) -> Self {
        let (parent_kind, parent_id) = nearest_parent(&scan.parents);
        Self {
            scan,
            parent_kind,
            parent_id,
            counted: false,
        }
    }
}

/// The journal lists parents nearest first.
fn nearest_parent(parents: &[ParentRef]) -> (Option<ParentKind>, i64) {
    parents
        .first()
        .map_or((None, ABSENT), |p| (p.kind(), p.id()))
}
