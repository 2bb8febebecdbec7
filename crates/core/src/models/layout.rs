use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Horizontal geometry computed for one session.
///
/// Fractions are relative to the full width of the time-slot row:
/// the card spans `[left_offset_fraction, left_offset_fraction + width_fraction)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSlot {
    pub session_id: Uuid,
    pub column_index: usize,
    pub column_count: usize,
    pub width_fraction: f64,
    pub left_offset_fraction: f64,
    /// Set when the session has a missing or inverted interval; the presenter
    /// should mark such cards.
    #[serde(default)]
    pub invalid_interval: bool,
}

impl LayoutSlot {
    /// Places a session in `column_index` of a cluster `column_count` wide.
    pub fn in_column(session_id: Uuid, column_index: usize, column_count: usize) -> Self {
        let columns = column_count as f64;
        Self {
            session_id,
            column_index,
            column_count,
            width_fraction: 1.0 / columns,
            left_offset_fraction: column_index as f64 / columns,
            invalid_interval: false,
        }
    }

    /// Full-row slot used for sessions that overlap nothing.
    pub fn full_row(session_id: Uuid) -> Self {
        Self::in_column(session_id, 0, 1)
    }

    /// Full-row slot flagged as carrying an invalid interval.
    pub fn invalid(session_id: Uuid) -> Self {
        Self {
            invalid_interval: true,
            ..Self::full_row(session_id)
        }
    }

    pub fn right_edge(&self) -> f64 {
        self.left_offset_fraction + self.width_fraction
    }
}
