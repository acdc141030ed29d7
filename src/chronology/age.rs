//! Character ages at event dates.

use jiff::civil::Date;

use super::compare::SortKey;
use crate::model::{EraConfig, EventDate};

/// A parsed date of birth. Wiki forms often record only month and day.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Birth {
    era: Option<String>,
    year: Option<i64>,
    month: u8,
    day: u8,
}

/// A character's age at `event_date`, or `None` if it can't be determined.
///
/// `date_of_birth` may be `MM/DD`, `MM-DD`, `YYYY-MM-DD` or `MM/DD/YYYY`,
/// optionally prefixed by an era tag (`"SE 480-06-15"`). A birth date without
/// a year counts from year 0 of the event's era.
///
/// An era-less birth or event belongs to the unmarked era (the last one by
/// default). The era prefix is everything before the last whitespace, so
/// multi-word names work. Births and events in different eras are only
/// measurable when both eras carry an offset.
/// The age drops by one when the event falls before the birthday in its
/// year; without an event month that adjustment is skipped.
pub fn calculate_age(
    date_of_birth: &str,
    event_date: &EventDate,
    eras: &EraConfig,
) -> Option<i64> {
    let Some(birth) = parse_birth(date_of_birth) else {
        tracing::debug!(date_of_birth, "unparseable date of birth");
        return None;
    };
    let event = SortKey::of(event_date, eras)?;

    let years = match birth.year {
        None => event.year,
        Some(year) => {
            let from = eras.rank(birth.era.as_deref());
            let to = eras.rank(event_date.era());
            span(eras, from, year, to, event.year)?
        }
    };

    let before_birthday = match (event.month, event.day) {
        (Some(month), Some(day)) => (month, day) < (birth.month, birth.day),
        (Some(month), None) => month < birth.month,
        (None, _) => false,
    };
    years.checked_sub(i64::from(before_birthday))
}

/// Whole years from `from_year` in era `from` to `to_year` in era `to`.
fn span(
    eras: &EraConfig,
    from: Option<usize>,
    from_year: i64,
    to: Option<usize>,
    to_year: i64,
) -> Option<i64> {
    match (from, to) {
        (Some(from), Some(to)) if from != to => {
            let start = eras.offset(from)?.checked_add(from_year)?;
            let end = eras.offset(to)?.checked_add(to_year)?;
            end.checked_sub(start)
        }
        _ => to_year.checked_sub(from_year),
    }
}

fn parse_birth(raw: &str) -> Option<Birth> {
    let raw = raw.trim();
    if let Some(birth) = parse_calendar(raw) {
        return Some(birth);
    }
    let (era, rest) = raw.rsplit_once(char::is_whitespace)?;
    let mut birth = parse_calendar(rest)?;
    birth.era = Some(era.trim().to_string());
    Some(birth)
}

fn parse_calendar(s: &str) -> Option<Birth> {
    if let Ok(date) = s.parse::<Date>() {
        return Some(Birth {
            era: None,
            year: Some(i64::from(date.year())),
            month: u8::try_from(date.month()).ok()?,
            day: u8::try_from(date.day()).ok()?,
        });
    }

    let separator = if s.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = s.split(separator).collect();
    if parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let (year, month, day) = match (separator, parts.as_slice()) {
        (_, [month, day]) => (None, *month, *day),
        ('-', [year, month, day]) => (Some(*year), *month, *day),
        ('/', [month, day, year]) => (Some(*year), *month, *day),
        _ => return None,
    };

    let month: u8 = month.parse().ok().filter(|m| (1..=12).contains(m))?;
    let day: u8 = day.parse().ok().filter(|d| (1..=31).contains(d))?;
    let year = match year {
        Some(year) => Some(year.parse::<i64>().ok()?),
        None => None,
    };
    Some(Birth {
        era: None,
        year,
        month,
        day,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::chronology::parse_era_config;
    use crate::model::{PartialDate, Period};

    fn exact(year: i64, month: Option<u8>, day: Option<u8>, era: Option<&str>) -> EventDate {
        EventDate::Exact {
            year,
            month,
            day,
            era: era.map(String::from),
            approximate: false,
        }
    }

    #[test]
    fn parse_birth_formats() {
        let birth = |year, month, day| Birth {
            era: None,
            year,
            month,
            day,
        };
        let cases = [
            ("06/15", birth(None, 6, 15)),
            ("6-5", birth(None, 6, 5)),
            ("2000-06-15", birth(Some(2000), 6, 15)),
            ("480-06-15", birth(Some(480), 6, 15)),
            ("06/15/480", birth(Some(480), 6, 15)),
            (" 02/30 ", birth(None, 2, 30)),
        ];
        for (raw, expected) in cases {
            assert_eq!(parse_birth(raw), Some(expected), "{raw}");
        }
    }

    #[test]
    fn parse_birth_with_era_prefix() {
        let birth = parse_birth("SE 480-06-15").unwrap();

        assert_eq!(birth.era.as_deref(), Some("SE"));
        assert_eq!(birth.year, Some(480));
        assert_eq!((birth.month, birth.day), (6, 15));
    }

    #[test]
    fn parse_birth_with_multi_word_era() {
        let birth = parse_birth("Age of Ash  480-06-15").unwrap();

        assert_eq!(birth.era.as_deref(), Some("Age of Ash"));
        assert_eq!(birth.year, Some(480));
    }

    #[test]
    fn multi_word_era_birth_age() {
        let eras = parse_era_config(Some("Age of Ash, Dawn"));
        let event = exact(500, None, None, Some("Age of Ash"));

        assert_eq!(calculate_age("Age of Ash 480-01-01", &event, &eras), Some(20));
        assert_eq!(
            calculate_age("Dawn 480-01-01", &exact(500, None, None, Some("Dawn")), &eras),
            Some(20)
        );
    }

    #[test]
    fn unparseable_births_yield_none() {
        for raw in [
            "",
            "June 15th",
            "13/01",
            "00/10",
            "06/32",
            "06/15/",
            "06/15-2000",
            "2000/06/15/1",
            "480-06",
            "SE",
        ] {
            assert_eq!(parse_birth(raw), None, "{raw}");
        }
    }

    #[test]
    fn birthday_adjustment() {
        let eras = EraConfig::default();
        let before = calculate_age("06/15", &exact(520, Some(3), Some(1), None), &eras);
        let after = calculate_age("06/15", &exact(520, Some(7), None, None), &eras);

        assert_eq!(before, Some(519));
        assert_eq!(after, Some(520));
    }

    #[test]
    fn birthday_itself_counts_as_passed() {
        let eras = EraConfig::default();

        assert_eq!(
            calculate_age("1990-06-15", &exact(2000, Some(6), Some(15), None), &eras),
            Some(10)
        );
        assert_eq!(
            calculate_age("1990-06-15", &exact(2000, Some(6), Some(14), None), &eras),
            Some(9)
        );
    }

    #[test]
    fn event_without_month_uses_year_only() {
        let eras = EraConfig::default();

        assert_eq!(
            calculate_age("12/31/480", &exact(500, None, None, None), &eras),
            Some(20)
        );
    }

    #[test]
    fn event_month_without_day_compares_months() {
        let eras = EraConfig::default();

        assert_eq!(
            calculate_age("06/15/480", &exact(500, Some(6), None, None), &eras),
            Some(20)
        );
        assert_eq!(
            calculate_age("06/15/480", &exact(500, Some(5), None, None), &eras),
            Some(19)
        );
    }

    #[test]
    fn approximate_and_range_events() {
        let eras = EraConfig::default();
        let approx = EventDate::Approximate {
            year: None,
            year_range: Some((500, 510)),
            era: None,
            period: Some(Period::Late),
            text: None,
        };
        let range = EventDate::Range {
            start: PartialDate {
                year: 500,
                month: Some(1),
                day: Some(1),
                era: None,
            },
            end: PartialDate {
                year: 505,
                month: None,
                day: None,
                era: None,
            },
            text: None,
        };

        assert_eq!(calculate_age("06/15/480", &approx, &eras), Some(20));
        assert_eq!(calculate_age("06/15/480", &range, &eras), Some(19));
    }

    #[test]
    fn undatable_events_yield_none() {
        let eras = EraConfig::default();
        let cases = [
            EventDate::Relative {
                text: Some("later".into()),
                reference_event_id: None,
            },
            EventDate::Unknown { text: None },
            EventDate::Approximate {
                year: None,
                year_range: None,
                era: None,
                period: None,
                text: Some("long ago".into()),
            },
        ];
        for event in cases {
            assert_eq!(calculate_age("06/15/480", &event, &eras), None);
        }
    }

    #[test]
    fn same_era_needs_no_offsets() {
        let eras = parse_era_config(Some("BE, SE"));

        assert_eq!(
            calculate_age("SE 480-01-01", &exact(500, None, None, Some("SE")), &eras),
            Some(20)
        );
        // Era-less dates belong to the last era.
        assert_eq!(
            calculate_age("480-01-01", &exact(500, None, None, Some("SE")), &eras),
            Some(20)
        );
    }

    #[test]
    fn cross_era_age_uses_offsets() {
        let eras = parse_era_config(Some(
            r#"[{"name": "BE", "offset": 0}, {"name": "SE", "offset": 1000}]"#,
        ));

        assert_eq!(
            calculate_age("BE 990-01-01", &exact(5, None, None, Some("SE")), &eras),
            Some(15)
        );
    }

    #[test]
    fn cross_era_age_without_offsets_is_unknown() {
        let eras = parse_era_config(Some("BE, SE"));

        assert_eq!(
            calculate_age("BE 990-01-01", &exact(5, None, None, Some("SE")), &eras),
            None
        );
    }

    #[test]
    fn yearless_birth_counts_from_event_era() {
        let eras = parse_era_config(Some("BE, SE"));

        assert_eq!(
            calculate_age("06/15", &exact(20, Some(8), None, Some("BE")), &eras),
            Some(20)
        );
    }

    #[test]
    fn age_is_deterministic() {
        let eras = parse_era_config(Some("BE, SE"));
        let event = exact(520, Some(3), Some(1), Some("SE"));

        let first = calculate_age("06/15", &event, &eras);
        let second = calculate_age("06/15", &event, &eras);
        assert_eq!(first, second);
    }

    #[test]
    fn event_before_birth_is_negative() {
        let eras = EraConfig::default();

        assert_eq!(
            calculate_age("06/15/500", &exact(490, Some(7), None, None), &eras),
            Some(-10)
        );
    }
}
