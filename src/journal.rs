//! Journal decoding: one log line in, one typed [`Event`] out.
//!
//! A line is parsed once into a generic JSON value to read the two
//! discriminators (`event` and, for scans, `ScanType`). The value is then
//! decoded into the presence-tracking shape for that discriminator pair and
//! projected into the model. A projection that cannot establish the
//! variant's identity (no system name, stellar type or planet class)
//! becomes [`Event::Other`].

mod raw;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{Event, OtherEvent};

use raw::{RawBodyScan, RawJump, RawStarScan};

/// A line that is not well-formed JSON text.
#[derive(Debug, thiserror::Error)]
#[error("malformed journal line: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

pub type Result<T> = core::result::Result<T, DecodeError>;

/// Decode one journal line.
///
/// Fails only when the bytes are not valid UTF-8 JSON. Valid JSON that is
/// not an object, lacks the discriminators, or has fields of the wrong type
/// for its variant decodes to [`Event::Other`].
pub fn decode(line: impl AsRef<[u8]>) -> Result<Event> {
    let value: Value = serde_json::from_slice(line.as_ref())?;

    let kind = discriminator(&value, "event");
    let scan_type = if kind == "Scan" {
        discriminator(&value, "ScanType")
    } else {
        String::new()
    };

    let event = match (kind.as_str(), scan_type.as_str()) {
        ("FSDJump", _) => variant::<RawJump>(value)
            .and_then(RawJump::into_event)
            .map(Event::Jump),
        ("Scan", "AutoScan") => variant::<RawStarScan>(value)
            .and_then(RawStarScan::into_event)
            .map(|scan| Event::StarScan(Box::new(scan))),
        ("Scan", "Detailed") => variant::<RawBodyScan>(value)
            .and_then(RawBodyScan::into_event)
            .map(|scan| Event::BodyScan(Box::new(scan))),
        _ => None,
    };

    Ok(event.unwrap_or_else(|| {
        tracing::trace!(%kind, %scan_type, "decoded as other");
        Event::Other(OtherEvent { kind, scan_type })
    }))
}

fn discriminator(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn variant<T: DeserializeOwned>(value: Value) -> Option<T> {
    serde_json::from_value(value)
        .inspect_err(|e| tracing::debug!(error = %e, "journal line does not fit its event shape"))
        .ok()
}
