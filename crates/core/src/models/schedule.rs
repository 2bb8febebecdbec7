use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{layout::LayoutSlot, session::Session, view::ViewMode};

/// Query string accepted by the schedule endpoints. Values are kept raw so
/// that malformed input turns into a validation error rather than a generic
/// extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    /// Reference date, `YYYY-MM-DD`. Defaults to today.
    pub date: Option<String>,
    /// `day` or `week`. Defaults to `day`.
    pub mode: Option<String>,
    /// Id of the session currently open in the editor, if any
    pub editing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeResponse {
    pub mode: ViewMode,
    pub reference_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub grid_dates: Vec<NaiveDate>,
    /// Reference date one view back
    pub previous_date: NaiveDate,
    /// Reference date one view forward
    pub next_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub range: DateRangeResponse,
    pub days: Vec<DayResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub days: Vec<DayResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: NaiveDate,
    /// True when the date has no sessions and a placeholder should be shown
    pub is_empty: bool,
    pub slots: Vec<TimeSlotResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotResponse {
    pub start: Option<NaiveTime>,
    pub sessions: Vec<SessionCellResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCellResponse {
    pub session: Session,
    pub layout: LayoutSlot,
    pub width_percent: f64,
    pub left_percent: f64,
    pub is_editing: bool,
}
