/// Day and week window resolution
pub mod date_range;
/// Assembly of per-date rows and layouts for a whole view
pub mod grid;
/// Per-date grouping of sessions into start-time rows
pub mod grouping;
/// Side-by-side column assignment for overlapping sessions
pub mod layout;

mod clusters;

pub use date_range::{navigate, resolve};
pub use grid::{build_day_grid, build_schedule_grid, DayGrid, ScheduleGrid};
pub use grouping::group_by_day_and_time;
pub use layout::{distinct_sessions, layout, SessionLayout};
