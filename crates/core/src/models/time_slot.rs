use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::session::Session;

/// One row of the schedule grid: every session of `date` that starts at
/// `start` (minute resolution), in input order.
///
/// `start` is `None` only for the trailing row that collects sessions without
/// a start timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start: Option<NaiveTime>,
    pub sessions: Vec<Session>,
}
