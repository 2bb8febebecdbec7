use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::models::{session::Session, time_slot::TimeSlot};

/// Groups the sessions of one date into start-time rows.
///
/// Only sessions whose `date` equals `date` are kept. Rows are keyed by the
/// start time-of-day truncated to the minute and returned in ascending order;
/// sessions keep their input order within a row. Sessions without a start
/// timestamp land in one trailing row with `start: None`.
pub fn group_by_day_and_time(sessions: &[Session], date: NaiveDate) -> Vec<TimeSlot> {
    let mut rows: BTreeMap<NaiveTime, Vec<Session>> = BTreeMap::new();
    let mut unscheduled = Vec::new();

    for session in sessions.iter().filter(|s| s.date == date) {
        match session.start_time.and_then(|start| minute_of(start.time())) {
            Some(start) => rows.entry(start).or_default().push(session.clone()),
            None => unscheduled.push(session.clone()),
        }
    }

    let mut slots: Vec<TimeSlot> = rows
        .into_iter()
        .map(|(start, sessions)| TimeSlot {
            date,
            start: Some(start),
            sessions,
        })
        .collect();

    if !unscheduled.is_empty() {
        slots.push(TimeSlot {
            date,
            start: None,
            sessions: unscheduled,
        });
    }

    slots
}

fn minute_of(time: NaiveTime) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
}
