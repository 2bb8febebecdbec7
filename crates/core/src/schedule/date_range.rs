use chrono::{Datelike, Days, Duration, NaiveDate};

use crate::models::view::{DateRange, ViewMode};

/// Resolves the window of dates a view shows around `reference_date`.
///
/// - `Day`: the reference date alone.
/// - `Week`: Monday through Sunday of the ISO week containing the reference
///   date. A Sunday reference belongs to the week that started six days
///   earlier.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use classgrid_core::models::view::ViewMode;
/// use classgrid_core::schedule::resolve;
///
/// let wednesday = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// let range = resolve(wednesday, ViewMode::Week);
///
/// assert_eq!(range.start_date, NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
/// assert_eq!(range.end_date, NaiveDate::from_ymd_opt(2024, 5, 19).unwrap());
/// assert_eq!(range.grid_dates.len(), 7);
/// ```
pub fn resolve(reference_date: NaiveDate, mode: ViewMode) -> DateRange {
    match mode {
        ViewMode::Day => DateRange {
            start_date: reference_date,
            end_date: reference_date,
            grid_dates: vec![reference_date],
        },
        ViewMode::Week => {
            let grid_dates: Vec<NaiveDate> = week_start(reference_date).iter_days().take(7).collect();
            // The day iterator stops short only at the very end of the calendar.
            let start_date = grid_dates.first().copied().unwrap_or(reference_date);
            let end_date = grid_dates.last().copied().unwrap_or(reference_date);
            DateRange {
                start_date,
                end_date,
                grid_dates,
            }
        }
    }
}

/// Moves the reference date by `steps` views: days in day mode, weeks in
/// week mode. Negative steps go back in time. Saturates at the bounds of the
/// calendar.
pub fn navigate(reference_date: NaiveDate, mode: ViewMode, steps: i32) -> NaiveDate {
    let days = match mode {
        ViewMode::Day => i64::from(steps),
        ViewMode::Week => i64::from(steps) * 7,
    };

    reference_date
        .checked_add_signed(Duration::days(days))
        .unwrap_or(if steps < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}
