use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    grouping::group_by_day_and_time,
    layout::{distinct_sessions, layout, SessionLayout},
};
use crate::models::{
    session::Session,
    time_slot::TimeSlot,
    view::DateRange,
};

/// Rows and column geometry for one grid date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGrid {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
    pub layout: SessionLayout,
}

impl DayGrid {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A fully laid out view: one [`DayGrid`] per date of the range, in
/// `grid_dates` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    pub range: DateRange,
    pub days: Vec<DayGrid>,
}

/// Groups and lays out `sessions` for every date of `range`.
///
/// Each date is laid out independently. Sessions dated outside the range are
/// left out.
pub fn build_schedule_grid(sessions: &[Session], range: &DateRange) -> ScheduleGrid {
    let outside = sessions.iter().filter(|s| !range.contains(s.date)).count();
    if outside > 0 {
        debug!(outside, start = %range.start_date, end = %range.end_date, "Skipping sessions outside the view range");
    }

    let days = range
        .grid_dates
        .iter()
        .map(|&date| build_day_grid(sessions, date))
        .collect();

    ScheduleGrid {
        range: range.clone(),
        days,
    }
}

/// Groups and lays out the sessions of a single date.
///
/// Records sharing an id are reduced to one before grouping, so every cell
/// of the grid has geometry of its own.
pub fn build_day_grid(sessions: &[Session], date: NaiveDate) -> DayGrid {
    let on_date: Vec<Session> = sessions.iter().filter(|s| s.date == date).cloned().collect();
    let day_sessions: Vec<Session> = distinct_sessions(&on_date).into_iter().cloned().collect();

    DayGrid {
        date,
        slots: group_by_day_and_time(&day_sessions, date),
        layout: layout(&day_sessions),
    }
}
