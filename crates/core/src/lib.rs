//! # classgrid core
//!
//! Domain types and the pure scheduling pipeline behind the class timetable:
//!
//! - [`schedule::date_range`] resolves the dates a day or week view covers
//! - [`schedule::grouping`] splits one date's sessions into start-time rows
//! - [`schedule::layout`] assigns side-by-side columns to overlapping sessions
//! - [`schedule::grid`] runs the last two for every date of a resolved range
//!
//! Nothing in this crate performs I/O. Sessions arrive through a
//! [`source::SessionSource`] implemented by the storage layer.

pub mod errors;
pub mod models;
pub mod schedule;
pub mod source;
