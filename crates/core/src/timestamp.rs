//! Lenient timestamp input.
//!
//! Clients send either RFC 3339 (`2023-11-30T10:05:06Z`,
//! `2023-11-30T10:05:06+02:00`) or an ISO datetime without an offset
//! (`2023-11-30T14:08:06.365`). The latter is read as UTC. Output is
//! unaffected and stays RFC 3339.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::patch::Patch;
use crate::types::Timestamp;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an RFC 3339 or offset-less ISO datetime into UTC.
pub fn parse(raw: &str) -> Result<Timestamp, String> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|err| format!("invalid datetime '{raw}': {err}"))
}

/// `deserialize_with` target for a required [`Timestamp`] field.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// `deserialize_with` target for a `Patch<Timestamp>` field.
///
/// Pair it with `#[serde(default)]` so a missing key stays absent.
pub fn deserialize_patch<'de, D>(deserializer: D) -> Result<Patch<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(Patch::Null),
        Some(raw) => parse(&raw).map(Patch::Value).map_err(serde::de::Error::custom),
    }
}
