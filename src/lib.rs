//! Chronicle: event dates for an OC wiki's timelines.
//!
//! Five shapes of event date, an era configuration that ranks them, and the
//! pure functions that format, order and measure them. Timelines are kept as
//! JSON files and driven from the `chronicle` CLI.

pub mod chronology;
pub mod cli;
pub mod config;
pub mod model;
pub mod storage;

pub use chronology::{calculate_age, compare_event_dates, format_date_data, parse_era_config};
