//! Chronology: formatting, ordering and age arithmetic over event dates.
//!
//! Everything here is a pure function. Malformed input degrades to an empty
//! string, `None` or `Ordering::Equal` instead of failing, because these feed
//! display and sort paths directly.

mod age;
mod compare;
mod era;
mod format;

pub use age::calculate_age;
pub use compare::{compare_event_dates, sort_chronologically};
pub use era::parse_era_config;
pub use format::{format_date_data, format_date_value};
