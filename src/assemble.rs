//! System assembly: fold an ordered event stream into star systems.
//!
//! The assembler keeps a "current system" cursor. A jump moves the cursor
//! to the system it names, creating that system the first time the name is
//! seen. Star and body scans are appended to whichever system the cursor
//! points at; with no cursor they are dropped.

use std::collections::HashMap;

use crate::model::{BodyRecord, Event, JumpEvent, StarRecord, StarSystem};

/// Receives newly assembled records, typically to persist them.
///
/// Notifications are fire-and-forget: an implementation reports its own
/// failures and never stops assembly.
pub trait SystemSink {
    fn system_created(&mut self, system: &StarSystem);
    fn star_recorded(&mut self, star: &StarRecord);
    fn body_recorded(&mut self, body: &BodyRecord);
}

/// Discards every notification.
impl SystemSink for () {
    fn system_created(&mut self, _: &StarSystem) {}
    fn star_recorded(&mut self, _: &StarRecord) {}
    fn body_recorded(&mut self, _: &BodyRecord) {}
}

/// The assembled systems plus the cursor.
///
/// At most one system exists per name; `index` maps each name to its
/// position in `systems`, which stays in creation order.
#[derive(Debug, Default)]
pub struct AssemblerState {
    systems: Vec<StarSystem>,
    index: HashMap<String, usize>,
    current: Option<usize>,
}

impl AssemblerState {
    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    /// Mutable access for the totals pass. Identity fields must not change.
    pub fn systems_mut(&mut self) -> &mut [StarSystem] {
        &mut self.systems
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&StarSystem> {
        self.index.get(name).map(|&i| &self.systems[i])
    }

    pub fn current(&self) -> Option<&StarSystem> {
        self.current.map(|i| &self.systems[i])
    }

    /// Forget the current system; scans are dropped until the next jump.
    pub fn reset_cursor(&mut self) {
        self.current = None;
    }

    /// Point the cursor at the system named by `jump`, creating it if new.
    /// Returns the system's position and whether it was created.
    fn enter(&mut self, jump: JumpEvent) -> (usize, bool) {
        if let Some(&i) = self.index.get(&jump.system_name) {
            self.current = Some(i);
            return (i, false);
        }
        let i = self.systems.len();
        self.index.insert(jump.system_name.clone(), i);
        self.systems.push(StarSystem::new(jump));
        self.current = Some(i);
        (i, true)
    }

    fn current_mut(&mut self, event: &'static str) -> Option<&mut StarSystem> {
        let Some(i) = self.current else {
            tracing::debug!(event, "scan before any jump dropped");
            return None;
        };
        Some(&mut self.systems[i])
    }
}

/// Single-pass fold of journal events into [`AssemblerState`].
pub struct Assembler<S> {
    state: AssemblerState,
    sink: S,
}

impl Assembler<()> {
    /// An assembler that notifies nobody.
    pub fn detached() -> Self {
        Self::new(())
    }
}

impl<S: SystemSink> Assembler<S> {
    pub fn new(sink: S) -> Self {
        Self::with_state(AssemblerState::default(), sink)
    }

    /// Continue assembling on top of previously built state.
    pub fn with_state(state: AssemblerState, sink: S) -> Self {
        Self { state, sink }
    }

    pub fn state(&self) -> &AssemblerState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_state(self) -> AssemblerState {
        self.state
    }

    pub fn reset_cursor(&mut self) {
        self.state.reset_cursor();
    }

    /// Apply every event in order.
    pub fn process(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Apply one event.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Jump(jump) => {
                let (i, created) = self.state.enter(jump);
                let system = &self.state.systems[i];
                if created {
                    tracing::debug!(system = system.name(), "system created");
                    self.sink.system_created(system);
                } else {
                    tracing::trace!(system = system.name(), "returned to known system");
                }
            }
            Event::StarScan(scan) => {
                let Some(system) = self.state.current_mut("star-scan") else {
                    return;
                };
                system.stars.push(StarRecord::from(*scan));
                if let Some(star) = system.stars.last() {
                    self.sink.star_recorded(star);
                }
            }
            Event::BodyScan(scan) => {
                let Some(system) = self.state.current_mut("body-scan") else {
                    return;
                };
                system.bodies.push(BodyRecord::from(*scan));
                if let Some(body) = system.bodies.last() {
                    self.sink.body_recorded(body);
                }
            }
            Event::Other(_) => {}
        }
    }
}
