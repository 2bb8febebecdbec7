use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Timestamp layouts accepted from upstream session records.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A scheduled teaching event.
///
/// Times are local wall-clock values; no timezone conversion is applied
/// anywhere in the pipeline. `start_time` and `end_time` are optional so that
/// records with a missing or unparseable timestamp still reach the grid, where
/// they are rendered as invalid instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    /// Calendar date the session is shown under
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub end_time: Option<NaiveDateTime>,
    pub teacher_id: Uuid,
    #[serde(default)]
    pub assistant_id: Option<Uuid>,
    pub subject_type: String,
    /// Display-only payload, never read by the layout logic
    #[serde(default)]
    pub data: Option<Value>,
}

impl Session {
    /// Returns the `[start, end)` interval when both timestamps are present
    /// and `end > start`.
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if end > start => Some((start, end)),
            _ => None,
        }
    }

    pub fn has_valid_interval(&self) -> bool {
        self.interval().is_some()
    }

    /// Half-open interval intersection. Sessions that merely touch
    /// (one ends when the other starts) do not overlap, and a session without
    /// a valid interval overlaps nothing.
    pub fn overlaps(&self, other: &Session) -> bool {
        match (self.interval(), other.interval()) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => a_start < b_end && b_start < a_end,
            _ => false,
        }
    }
}

/// Parses a timestamp leniently: `null`, non-string values and strings in an
/// unknown format all become `None` rather than failing the whole record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}

/// Parses a wall-clock timestamp in any of the accepted layouts.
///
/// RFC 3339 values carrying a `Z` or numeric offset keep their local
/// reading: `2024-05-15T09:00:00+07:00` is 09:00, not 02:00.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
