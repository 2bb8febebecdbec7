use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveTime};
use classgrid_core::models::{
    schedule::{DateRangeResponse, DayResponse, LayoutResponse, ScheduleResponse},
    view::ViewMode,
};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use uuid::Uuid;

use crate::test_utils::{session, wednesday, TestContext};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn day_on(response: &ScheduleResponse, date: NaiveDate) -> &DayResponse {
    response
        .days
        .iter()
        .find(|day| day.date == date)
        .expect("date missing from grid")
}

#[test_log::test(tokio::test)]
async fn test_week_view_lays_out_overlaps() {
    let thursday = date(2024, 5, 16);
    let server = TestContext::serving(vec![
        session(1, wednesday(), (9, 0), (10, 0)),
        session(2, wednesday(), (9, 30), (10, 30)),
        session(3, wednesday(), (10, 15), (11, 0)),
        session(4, thursday, (9, 0), (10, 0)),
    ])
    .server();

    let response = server
        .get("/api/schedule")
        .add_query_param("date", "2024-05-15")
        .add_query_param("mode", "week")
        .await;

    response.assert_status_ok();
    let body: ScheduleResponse = response.json();

    assert_eq!(body.range.mode, ViewMode::Week);
    assert_eq!(body.range.start_date, date(2024, 5, 13));
    assert_eq!(body.range.end_date, date(2024, 5, 19));
    assert_eq!(body.days.len(), 7);

    let wed = day_on(&body, wednesday());
    assert!(!wed.is_empty);
    let starts: Vec<Option<NaiveTime>> = wed.slots.iter().map(|slot| slot.start).collect();
    assert_eq!(
        starts,
        vec![
            NaiveTime::from_hms_opt(9, 0, 0),
            NaiveTime::from_hms_opt(9, 30, 0),
            NaiveTime::from_hms_opt(10, 15, 0),
        ]
    );

    let cells: Vec<_> = wed.slots.iter().flat_map(|slot| slot.sessions.iter()).collect();
    assert_eq!(cells.len(), 3);
    for cell in &cells {
        assert_eq!(cell.layout.column_count, 2);
        assert_eq!(cell.width_percent, 50.0);
        assert!(!cell.is_editing);
    }
    assert_eq!(cells[0].left_percent, 0.0);
    assert_eq!(cells[1].left_percent, 50.0);
    assert_eq!(cells[2].left_percent, 0.0);

    let thu = day_on(&body, thursday);
    assert_eq!(thu.slots[0].sessions[0].width_percent, 100.0);

    assert!(day_on(&body, date(2024, 5, 13)).is_empty);
}

#[tokio::test]
async fn test_source_is_queried_with_resolved_window() {
    let mut ctx = TestContext::new();
    ctx.sessions
        .expect_sessions_in_range()
        .with(eq(date(2024, 5, 13)), eq(date(2024, 5, 19)))
        .times(1)
        .returning(|_, _| Ok(Vec::new()));
    let server = ctx.server();

    let response = server
        .get("/api/schedule")
        .add_query_param("date", "2024-05-19")
        .add_query_param("mode", "week")
        .await;

    response.assert_status_ok();
    let body: ScheduleResponse = response.json();
    assert!(body.days.iter().all(|day| day.is_empty && day.slots.is_empty()));
}

#[tokio::test]
async fn test_day_view_is_the_default_mode() {
    let server = TestContext::serving(vec![
        session(1, wednesday(), (9, 0), (10, 0)),
        session(2, date(2024, 5, 16), (9, 0), (10, 0)),
    ])
    .server();

    let response = server
        .get("/api/schedule")
        .add_query_param("date", "2024-05-15")
        .await;

    response.assert_status_ok();
    let body: ScheduleResponse = response.json();
    assert_eq!(body.range.mode, ViewMode::Day);
    assert_eq!(body.range.grid_dates, vec![wednesday()]);
    assert_eq!(body.range.previous_date, date(2024, 5, 14));
    assert_eq!(body.range.next_date, date(2024, 5, 16));
    assert_eq!(body.days.len(), 1);
    assert_eq!(body.days[0].slots.len(), 1);
}

#[tokio::test]
async fn test_editing_session_is_marked() {
    let server = TestContext::serving(vec![
        session(1, wednesday(), (9, 0), (10, 0)),
        session(2, wednesday(), (9, 0), (10, 0)),
    ])
    .server();

    let response = server
        .get("/api/schedule")
        .add_query_param("date", "2024-05-15")
        .add_query_param("editing", Uuid::from_u128(2).to_string())
        .await;

    response.assert_status_ok();
    let body: ScheduleResponse = response.json();
    let cells = &body.days[0].slots[0].sessions;
    assert_eq!(cells.len(), 2);
    for cell in cells {
        assert_eq!(cell.is_editing, cell.session.id == Uuid::from_u128(2));
        assert_eq!(cell.width_percent, 50.0);
    }
}

#[tokio::test]
async fn test_invalid_session_is_flagged_but_kept() {
    let mut broken = session(9, wednesday(), (11, 0), (10, 0));
    broken.end_time = None;
    let server = TestContext::serving(vec![session(1, wednesday(), (9, 0), (10, 0)), broken]).server();

    let response = server
        .get("/api/schedule")
        .add_query_param("date", "2024-05-15")
        .await;

    response.assert_status_ok();
    let body: ScheduleResponse = response.json();
    let cells: Vec<_> = body.days[0].slots.iter().flat_map(|slot| slot.sessions.iter()).collect();
    assert_eq!(cells.len(), 2);

    let flagged = cells.iter().find(|c| c.session.id == Uuid::from_u128(9)).unwrap();
    assert!(flagged.layout.invalid_interval);
    assert_eq!(flagged.width_percent, 100.0);

    let valid = cells.iter().find(|c| c.session.id == Uuid::from_u128(1)).unwrap();
    assert!(!valid.layout.invalid_interval);
    assert_eq!(valid.width_percent, 100.0);
}

#[rstest]
#[case("date", "15/05/2024", "Invalid date")]
#[case("mode", "month", "Unknown view mode")]
#[case("editing", "not-a-uuid", "Invalid session id")]
#[tokio::test]
async fn test_malformed_query_is_rejected(
    #[case] key: &str,
    #[case] value: &str,
    #[case] message: &str,
) {
    let server = TestContext::new().server();

    let response = server.get("/api/schedule").add_query_param(key, value).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Validation error"), "{error}");
    assert!(error.contains(message), "{error}");
}

#[tokio::test]
async fn test_source_failure_is_server_error() {
    let mut ctx = TestContext::new();
    ctx.sessions
        .expect_sessions_in_range()
        .returning(|_, _| Err(eyre::eyre!("connection refused")));
    let server = ctx.server();

    let response = server
        .get("/api/schedule")
        .add_query_param("date", "2024-05-15")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Database error"));
}

#[tokio::test]
async fn test_range_endpoint() {
    let server = TestContext::new().server();

    let response = server
        .get("/api/schedule/range")
        .add_query_param("date", "2024-05-19")
        .add_query_param("mode", "week")
        .await;

    response.assert_status_ok();
    let body: DateRangeResponse = response.json();
    assert_eq!(body.reference_date, date(2024, 5, 19));
    assert_eq!(body.start_date, date(2024, 5, 13));
    assert_eq!(body.end_date, date(2024, 5, 19));
    assert_eq!(body.grid_dates.len(), 7);
    assert_eq!(body.previous_date, date(2024, 5, 12));
    assert_eq!(body.next_date, date(2024, 5, 26));
}

#[tokio::test]
async fn test_layout_endpoint_groups_by_date() {
    let server = TestContext::new().server();
    let thursday = date(2024, 5, 16);
    let sessions = vec![
        session(4, thursday, (9, 0), (10, 0)),
        session(1, wednesday(), (9, 0), (10, 0)),
        session(2, wednesday(), (9, 30), (10, 30)),
        session(3, wednesday(), (10, 15), (11, 0)),
    ];

    let response = server.post("/api/schedule/layout").json(&sessions).await;

    response.assert_status_ok();
    let body: LayoutResponse = response.json();
    let dates: Vec<_> = body.days.iter().map(|day| day.date).collect();
    assert_eq!(dates, vec![wednesday(), thursday]);

    let columns: Vec<(Uuid, usize, usize)> = body.days[0]
        .slots
        .iter()
        .flat_map(|slot| slot.sessions.iter())
        .map(|cell| (cell.session.id, cell.layout.column_index, cell.layout.column_count))
        .collect();
    assert_eq!(
        columns,
        vec![
            (Uuid::from_u128(1), 0, 2),
            (Uuid::from_u128(2), 1, 2),
            (Uuid::from_u128(3), 0, 2),
        ]
    );
    assert_eq!(body.days[1].slots[0].sessions[0].layout.column_count, 1);
}

#[tokio::test]
async fn test_layout_endpoint_with_no_sessions() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/schedule/layout")
        .json(&Vec::<Value>::new())
        .await;

    response.assert_status_ok();
    let body: LayoutResponse = response.json();
    assert!(body.days.is_empty());
}

#[tokio::test]
async fn test_layout_endpoint_accepts_offset_timestamps() {
    let server = TestContext::new().server();
    let record = |n: u128, start: &str, end: &str| {
        serde_json::json!({
            "id": Uuid::from_u128(n),
            "date": "2024-05-15",
            "start_time": start,
            "end_time": end,
            "teacher_id": Uuid::from_u128(500 + n),
            "subject_type": "math",
        })
    };
    let sessions = vec![
        record(1, "2024-05-15T09:00:00.000Z", "2024-05-15T10:00:00.000Z"),
        record(2, "2024-05-15T09:30:00+07:00", "2024-05-15T10:30:00+07:00"),
    ];

    let response = server.post("/api/schedule/layout").json(&sessions).await;

    response.assert_status_ok();
    let body: LayoutResponse = response.json();
    let cells: Vec<_> = body.days[0].slots.iter().flat_map(|slot| slot.sessions.iter()).collect();
    assert_eq!(cells.len(), 2);
    for cell in cells {
        assert!(!cell.layout.invalid_interval);
        assert_eq!(cell.layout.column_count, 2);
        assert_eq!(cell.width_percent, 50.0);
    }
}
