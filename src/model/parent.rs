//! Parent relations: one link in a body's containment chain.

use serde::{Deserialize, Serialize};

/// Id stored for a relation kind that is absent from the journal entry.
pub const ABSENT: i64 = -1;

/// What a body orbits at one level of its containment chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentKind {
    Star,
    Planet,
    Ring,
    /// A barycentre. The journal spells it `Null`.
    Null,
}

impl ParentKind {
    /// The journal's name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Planet => "Planet",
            Self::Ring => "Ring",
            Self::Null => "Null",
        }
    }
}

/// One entry of a scan's `Parents` list, e.g. `{"Null": 1}` or `{"Star": 0}`.
///
/// Each kind holds the local id scoped to the owning system, or [`ABSENT`]
/// when the entry does not name that kind. An explicit `0` stays `0`.
/// Serializes with the journal's spelling, absent kinds omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ParentRef {
    #[serde(skip_serializing_if = "is_absent")]
    pub star: i64,
    #[serde(skip_serializing_if = "is_absent")]
    pub planet: i64,
    #[serde(skip_serializing_if = "is_absent")]
    pub ring: i64,
    #[serde(skip_serializing_if = "is_absent")]
    pub null: i64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_absent(id: &i64) -> bool {
    *id == ABSENT
}

impl Default for ParentRef {
    fn default() -> Self {
        Self {
            star: ABSENT,
            planet: ABSENT,
            ring: ABSENT,
            null: ABSENT,
        }
    }
}

impl ParentRef {
    /// A relation naming exactly one kind.
    #[cfg(test)]
    pub fn new(kind: ParentKind, id: i64) -> Self {
        let mut parent = Self::default();
        match kind {
            ParentKind::Star => parent.star = id,
            ParentKind::Planet => parent.planet = id,
            ParentKind::Ring => parent.ring = id,
            ParentKind::Null => parent.null = id,
        }
        parent
    }

    /// The kind this entry names, if any.
    ///
    /// Journal entries name a single kind; should several be present the
    /// first in `Star`, `Planet`, `Ring`, `Null` order wins.
    pub fn kind(&self) -> Option<ParentKind> {
        self.present().map(|(kind, _)| kind)
    }

    /// The id of the named kind, or [`ABSENT`] for an empty entry.
    pub fn id(&self) -> i64 {
        self.present().map_or(ABSENT, |(_, id)| id)
    }

    fn present(&self) -> Option<(ParentKind, i64)> {
        [
            (ParentKind::Star, self.star),
            (ParentKind::Planet, self.planet),
            (ParentKind::Ring, self.ring),
            (ParentKind::Null, self.null),
        ]
        .into_iter()
        .find(|&(_, id)| id != ABSENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_absent() {
        let parent = ParentRef::default();
        assert_eq!(parent.kind(), None);
        assert_eq!(parent.id(), ABSENT);
    }

    #[test]
    fn zero_id_is_present() {
        let parent = ParentRef::new(ParentKind::Star, 0);
        assert_eq!(parent.kind(), Some(ParentKind::Star));
        assert_eq!(parent.id(), 0);
        assert_eq!(parent.planet, ABSENT);
    }

    #[test]
    fn barycentre_uses_null_kind() {
        let parent = ParentRef::new(ParentKind::Null, 3);
        assert_eq!(parent.kind(), Some(ParentKind::Null));
        assert_eq!(parent.kind().map(ParentKind::as_str), Some("Null"));
    }

    #[test]
    fn serializes_with_journal_keys() {
        let parents = vec![
            ParentRef::new(ParentKind::Planet, 5),
            ParentRef::new(ParentKind::Star, 0),
        ];
        let json = serde_json::to_string(&parents).unwrap();
        assert_eq!(json, r#"[{"Planet":5},{"Star":0}]"#);

        let back: Vec<ParentRef> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parents);
    }
}
