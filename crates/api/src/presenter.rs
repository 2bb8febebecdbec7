//! # Grid presenter
//!
//! Turns laid out [`ScheduleGrid`]s into the response bodies the dashboard
//! renders. Which session is open in the editor is not ambient state: callers
//! pass it in through [`PresenterContext`], and the layout itself never sees it.

use chrono::NaiveDate;
use classgrid_core::{
    models::{
        layout::LayoutSlot,
        schedule::{
            DateRangeResponse, DayResponse, ScheduleResponse, SessionCellResponse,
            TimeSlotResponse,
        },
        view::{DateRange, ViewMode},
    },
    schedule::{navigate, DayGrid, ScheduleGrid},
};
use uuid::Uuid;

/// Per-request presentation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresenterContext {
    /// Session currently open in the editor
    pub editing_session: Option<Uuid>,
}

pub fn present_range(range: &DateRange, reference_date: NaiveDate, mode: ViewMode) -> DateRangeResponse {
    DateRangeResponse {
        mode,
        reference_date,
        start_date: range.start_date,
        end_date: range.end_date,
        grid_dates: range.grid_dates.clone(),
        previous_date: navigate(reference_date, mode, -1),
        next_date: navigate(reference_date, mode, 1),
    }
}

pub fn present_schedule(
    grid: &ScheduleGrid,
    reference_date: NaiveDate,
    mode: ViewMode,
    context: &PresenterContext,
) -> ScheduleResponse {
    ScheduleResponse {
        range: present_range(&grid.range, reference_date, mode),
        days: grid.days.iter().map(|day| present_day(day, context)).collect(),
    }
}

pub fn present_day(day: &DayGrid, context: &PresenterContext) -> DayResponse {
    let slots = day
        .slots
        .iter()
        .map(|slot| TimeSlotResponse {
            start: slot.start,
            sessions: slot
                .sessions
                .iter()
                .map(|session| {
                    let layout = day
                        .layout
                        .get(&session.id)
                        .cloned()
                        .unwrap_or_else(|| LayoutSlot::full_row(session.id));

                    SessionCellResponse {
                        width_percent: layout.width_fraction * 100.0,
                        left_percent: layout.left_offset_fraction * 100.0,
                        is_editing: context.editing_session == Some(session.id),
                        session: session.clone(),
                        layout,
                    }
                })
                .collect(),
        })
        .collect();

    DayResponse {
        date: day.date,
        is_empty: day.is_empty(),
        slots,
    }
}
