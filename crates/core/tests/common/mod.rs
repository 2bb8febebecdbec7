#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use classgrid_core::models::session::Session;
use uuid::Uuid;

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, minute, 0).unwrap()
}

/// Session on the test day with a deterministic id derived from `n`.
pub fn session(n: u128, start: (u32, u32), end: (u32, u32)) -> Session {
    Session {
        id: Uuid::from_u128(n),
        date: day(),
        start_time: Some(at(start.0, start.1)),
        end_time: Some(at(end.0, end.1)),
        teacher_id: Uuid::from_u128(1000 + n),
        assistant_id: None,
        subject_type: "math".to_string(),
        data: None,
    }
}

pub fn session_on(n: u128, date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Session {
    Session {
        date,
        start_time: date.and_hms_opt(start.0, start.1, 0),
        end_time: date.and_hms_opt(end.0, end.1, 0),
        ..session(n, start, end)
    }
}

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}
