//! Display strings for event dates.

use std::fmt::Write;

use crate::model::{EventDate, PartialDate, Period};

/// Render a date for display. Never fails: absent or malformed dates render as `""`.
pub fn format_date_data(date: Option<&EventDate>) -> String {
    let Some(date) = date else {
        return String::new();
    };

    match date {
        EventDate::Exact {
            year,
            month,
            day,
            era,
            approximate,
        } => {
            let Some(mut out) = calendar(era.as_deref(), *year, *month, *day) else {
                return String::new();
            };
            if *approximate {
                out.push_str(" ~");
            }
            out
        }
        EventDate::Approximate {
            year,
            year_range,
            era,
            period,
            text,
        } => {
            let years = match (year, year_range) {
                (Some(y), _) => pad_year(*y),
                (None, Some((start, end))) => format!("{}-{}", pad_year(*start), pad_year(*end)),
                (None, None) => {
                    return non_empty(text.as_deref())
                        .unwrap_or("Approximate date")
                        .to_string();
                }
            };
            let mut out = String::from("~");
            for part in [period.map(Period::as_str), non_empty(era.as_deref())]
                .into_iter()
                .flatten()
            {
                out.push_str(part);
                out.push(' ');
            }
            out.push_str(&years);
            out
        }
        EventDate::Range { start, end, text } => {
            let Some(mut out) = range(start, end) else {
                return String::new();
            };
            if let Some(text) = non_empty(text.as_deref()) {
                let _ = write!(out, " ({text})");
            }
            out
        }
        EventDate::Relative { text, .. } => {
            non_empty(text.as_deref()).unwrap_or("Relative date").to_string()
        }
        EventDate::Unknown { text } => {
            non_empty(text.as_deref()).unwrap_or("Date unknown").to_string()
        }
    }
}

/// Format a raw persisted blob; anything that doesn't decode renders as `""`.
pub fn format_date_value(value: &serde_json::Value) -> String {
    format_date_data(EventDate::from_value(value).as_ref())
}

fn range(start: &PartialDate, end: &PartialDate) -> Option<String> {
    let start_era = non_empty(start.era.as_deref());
    let end_era = non_empty(end.era.as_deref());
    let from = calendar(start_era, start.year, start.month, start.day)?;
    if start_era == end_era {
        let to = calendar(None, end.year, end.month, end.day)?;
        Some(format!("{from}–{to}"))
    } else {
        let to = calendar(end_era, end.year, end.month, end.day)?;
        Some(format!("{from} to {to}"))
    }
}

/// `{era }{year}[-{month}[-{day}]]`, or `None` if month or day is out of range.
fn calendar(era: Option<&str>, year: i64, month: Option<u8>, day: Option<u8>) -> Option<String> {
    if month.is_some_and(|m| !(1..=12).contains(&m)) || day.is_some_and(|d| !(1..=31).contains(&d))
    {
        return None;
    }

    let mut out = String::new();
    if let Some(era) = non_empty(era) {
        out.push_str(era);
        out.push(' ');
    }
    out.push_str(&pad_year(year));
    if let Some(month) = month {
        let _ = write!(out, "-{month:02}");
        if let Some(day) = day {
            let _ = write!(out, "-{day:02}");
        }
    }
    Some(out)
}

/// Zero-pads the magnitude to four digits, keeping any sign in front.
fn pad_year(year: i64) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
