//! # Schedule Handlers
//!
//! Endpoints that resolve a day or week view, pull the sessions it covers and
//! return them laid out for the grid.

use std::{collections::BTreeSet, sync::Arc};

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use classgrid_core::{
    errors::ScheduleError,
    models::{
        schedule::{DateRangeResponse, LayoutResponse, ScheduleQuery, ScheduleResponse},
        session::Session,
        view::ViewMode,
    },
    schedule::{build_day_grid, build_schedule_grid, resolve},
};
use uuid::Uuid;

use crate::{
    middleware::error_handling::AppError,
    presenter::{self, PresenterContext},
    ApiState,
};

/// Returns the date window a view covers.
///
/// # Endpoint
///
/// ```text
/// GET /api/schedule/range?date=2024-05-15&mode=week
/// ```
pub async fn get_range(Query(query): Query<ScheduleQuery>) -> Result<Json<DateRangeResponse>, AppError> {
    let (reference_date, mode) = parse_view(&query)?;
    let range = resolve(reference_date, mode);

    Ok(Json(presenter::present_range(&range, reference_date, mode)))
}

/// Returns the laid out schedule grid for a view.
///
/// # Endpoint
///
/// ```text
/// GET /api/schedule?date=2024-05-15&mode=week&editing=<session uuid>
/// ```
///
/// # Steps
///
/// 1. Parse the reference date (default today) and view mode (default day)
/// 2. Resolve the date window and fetch its sessions
/// 3. Group each grid date into start-time rows and lay out overlaps
/// 4. Present the grid, marking the session being edited
///
/// # Errors
///
/// * `ScheduleError::Validation` - Malformed date, mode or editing id
/// * `ScheduleError::Database` - The session source failed
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let (reference_date, mode) = parse_view(&query)?;
    let context = PresenterContext {
        editing_session: parse_editing(query.editing.as_deref())?,
    };

    let range = resolve(reference_date, mode);

    let sessions = state
        .sessions
        .sessions_in_range(range.start_date, range.end_date)
        .await
        .map_err(ScheduleError::Database)?;

    tracing::debug!(
        "Laying out {} sessions for {} view {}..{}",
        sessions.len(),
        mode,
        range.start_date,
        range.end_date
    );

    let grid = build_schedule_grid(&sessions, &range);

    Ok(Json(presenter::present_schedule(&grid, reference_date, mode, &context)))
}

/// Lays out an ad-hoc list of sessions without touching storage.
///
/// Sessions are grouped per date; days are returned in ascending date order.
///
/// # Endpoint
///
/// ```text
/// POST /api/schedule/layout
/// ```
pub async fn layout_sessions(Json(sessions): Json<Vec<Session>>) -> Json<LayoutResponse> {
    let dates: BTreeSet<NaiveDate> = sessions.iter().map(|session| session.date).collect();
    let context = PresenterContext::default();

    let days = dates
        .into_iter()
        .map(|date| presenter::present_day(&build_day_grid(&sessions, date), &context))
        .collect();

    Json(LayoutResponse { days })
}

/// Parses the reference date and view mode, applying defaults.
pub fn parse_view(query: &ScheduleQuery) -> Result<(NaiveDate, ViewMode), AppError> {
    let reference_date = match query.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            AppError(ScheduleError::Validation(format!(
                "Invalid date '{}'. Expected YYYY-MM-DD",
                raw
            )))
        })?,
        _ => Local::now().date_naive(),
    };

    let mode = match query.mode.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw.parse::<ViewMode>()?,
        _ => ViewMode::default(),
    };

    Ok((reference_date, mode))
}

fn parse_editing(raw: Option<&str>) -> Result<Option<Uuid>, AppError> {
    match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => Uuid::parse_str(raw).map(Some).map_err(|_| {
            AppError(ScheduleError::Validation(format!(
                "Invalid session id '{}'",
                raw
            )))
        }),
        _ => Ok(None),
    }
}
