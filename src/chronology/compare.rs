//! Chronological ordering of event dates.
//!
//! Every date is reduced to a [`SortKey`] and keys are compared
//! lexicographically, so the order is total and consistent by construction.
//! Dates that carry no numeric year have no key and sort after all dated ones.

use std::cmp::Ordering;

use crate::model::{EraConfig, EventDate, Period};

/// The comparable projection of a datable [`EventDate`].
///
/// Field order is comparison order. `None` sorts before `Some`, so a
/// year-only date precedes the same year with a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct SortKey {
    pub era_rank: Option<usize>,
    pub year: i64,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub period_rank: Option<u8>,
}

impl SortKey {
    /// Extracts the key, or `None` for dates with no numeric year.
    pub fn of(date: &EventDate, eras: &EraConfig) -> Option<Self> {
        let era_rank = eras.sort_rank(date.era());
        match date {
            EventDate::Exact {
                year, month, day, ..
            } => Some(Self {
                era_rank,
                year: *year,
                month: *month,
                day: *day,
                period_rank: None,
            }),
            EventDate::Range { start, .. } => Some(Self {
                era_rank,
                year: start.year,
                month: start.month,
                day: start.day,
                period_rank: None,
            }),
            EventDate::Approximate {
                year,
                year_range,
                period,
                ..
            } => {
                let year = year.or_else(|| year_range.map(|(start, _)| start))?;
                Some(Self {
                    era_rank,
                    year,
                    month: None,
                    day: None,
                    period_rank: Some(Period::rank(*period)),
                })
            }
            EventDate::Relative { .. } | EventDate::Unknown { .. } => None,
        }
    }
}

/// Compare two event dates chronologically.
///
/// With a non-empty era list, era rank decides first; a date with no
/// recognized era sorts after every configured era (or before all of them
/// under [`UnmarkedEra::Earliest`](crate::model::UnmarkedEra)). Then year,
/// month, day and sub-year period. Undatable dates (relative, unknown,
/// absent) sort after every dated one and compare equal to each other, so a
/// stable sort keeps their original order.
pub fn compare_event_dates(
    a: Option<&EventDate>,
    b: Option<&EventDate>,
    eras: &EraConfig,
) -> Ordering {
    let a = a.and_then(|d| SortKey::of(d, eras));
    let b = b.and_then(|d| SortKey::of(d, eras));
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable-sort `items` chronologically by the date `date_of` picks out.
pub fn sort_chronologically<T, F>(items: &mut [T], date_of: F, eras: &EraConfig)
where
    F: Fn(&T) -> Option<&EventDate>,
{
    items.sort_by(|a, b| compare_event_dates(date_of(a), date_of(b), eras));
}
