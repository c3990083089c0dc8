//! Core data model for loopy.
//!
//! Journal events as decoded from the log, and the star systems
//! assembled from them.

mod event;
mod parent;
mod system;

pub use event::{
    BodyScanEvent, Composition, Event, JumpEvent, Orbit, OtherEvent, Percent, Ring,
    StarScanEvent,
};
pub use parent::{ABSENT, ParentKind, ParentRef};
pub use system::{BodyRecord, StarRecord, StarSystem};
