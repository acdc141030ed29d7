//! Output formatting for CLI display.

use std::cmp::Ordering;
use std::fmt::Write;

use crate::chronology::{calculate_age, format_date_data};
use crate::model::{EraConfig, Timeline, TimelineEvent, UnmarkedEra};

/// One line per era with its rank, noting where era-less dates land.
pub(super) fn format_eras(eras: &EraConfig) -> String {
    if eras.is_empty() {
        return "No eras".to_string();
    }
    let unmarked = eras.rank(None);
    eras.eras()
        .iter()
        .enumerate()
        .map(|(rank, era)| {
            let mut line = format!("{rank}  {}", era.name);
            if let Some(offset) = era.offset {
                let _ = write!(line, "  (year 0 = {offset})");
            }
            if unmarked == Some(rank) {
                line.push_str(match eras.unmarked() {
                    UnmarkedEra::Latest => "  [unmarked dates, latest]",
                    UnmarkedEra::Earliest => "  [unmarked dates, earliest]",
                });
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn format_ordering(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "before",
        Ordering::Equal => "same",
        Ordering::Greater => "after",
    }
}

pub(super) fn format_age(age: Option<i64>) -> String {
    age.map_or_else(|| "unknown".to_string(), |a| a.to_string())
}

/// Lines for a timeline whose events are already in display order:
/// the event row followed by one indented line per linked character.
pub(super) fn timeline_rows(timeline: &Timeline, eras: &EraConfig) -> Vec<String> {
    let width = timeline
        .events
        .iter()
        .map(|e| format_date_data(e.date.as_ref()).chars().count())
        .max()
        .unwrap_or(0);

    let mut rows = Vec::new();
    for event in &timeline.events {
        let date = format_date_data(event.date.as_ref());
        rows.push(format!("{date:<width$}  {}", event.title).trim_end().to_string());
        rows.extend(character_lines(timeline, event, eras));
    }
    rows
}

fn character_lines<'a>(
    timeline: &'a Timeline,
    event: &'a TimelineEvent,
    eras: &'a EraConfig,
) -> impl Iterator<Item = String> + 'a {
    event.characters.iter().map(move |id| {
        let Some(character) = timeline.character(*id) else {
            return format!("    - unknown character {id}");
        };
        let age = event
            .date
            .as_ref()
            .zip(character.date_of_birth.as_deref())
            .and_then(|(date, born)| calculate_age(born, date, eras));
        match age {
            Some(age) => format!("    - {} (age {age})", character.name),
            None => format!("    - {}", character.name),
        }
    })
}
