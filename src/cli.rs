//! CLI interface for Chronicle.
//!
//! Each subcommand is non-interactive: arguments in, plain text out.
//!
//! Commands split into two groups:
//!
//! - `chronicle eras|date|age` work on values given on the command line.
//! - `chronicle timeline ...` work on timelines kept in local storage.
//!
//! Dates are passed as the JSON blobs the wiki stores, e.g.
//! `'{"type":"exact","year":520,"era":"SE"}'`.

mod format;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::chronology::{
    calculate_age, compare_event_dates, format_date_value, sort_chronologically,
};
use crate::config::Config;
use crate::model::{EventDate, Timeline};
use crate::storage::Storage;

use format::{format_age, format_eras, format_ordering, timeline_rows};

/// Chronicle — order and date the events of a world.
#[derive(Debug, Parser)]
#[command(name = "chronicle", after_long_help = EXAMPLES_HELP)]
pub struct Cli {
    /// Storage directory for timelines (default: `~/.chronicle/timelines`).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const EXAMPLES_HELP: &str = r#"Examples:
  chronicle eras "BE, SE"
  chronicle date format '{"type":"range","start":{"year":990,"era":"BE"},"end":{"year":3,"era":"SE"}}'
  chronicle date compare --eras "BE, SE" '{"type":"exact","year":100,"era":"BE"}' '{"type":"exact","year":1,"era":"SE"}'
  chronicle age --born 06/15 '{"type":"exact","year":520,"month":3,"day":1}'

Timelines:
  chronicle timeline import world.json
  chronicle timeline show the-shattered-isles
  chronicle timeline sort the-shattered-isles"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse an era string and print the eras in chronological order.
    Eras {
        /// Comma-separated names or a JSON array.
        raw: String,
    },

    /// Format or compare event dates.
    Date {
        #[command(subcommand)]
        command: DateCommand,
    },

    /// Print a character's age at an event date, or `unknown`.
    Age {
        /// Date of birth: `MM/DD`, `YYYY-MM-DD`, `MM/DD/YYYY`, optionally era-prefixed.
        #[arg(long)]
        born: String,

        /// Event date as JSON.
        date: String,

        /// Era string to resolve era tags against.
        #[arg(long)]
        eras: Option<String>,
    },

    /// Manage stored timelines.
    Timeline {
        #[command(subcommand)]
        command: TimelineCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum DateCommand {
    /// Print the display string for a date (empty if malformed).
    Format {
        /// Event date as JSON.
        date: String,
    },

    /// Print whether the first date is `before`, `after` or the `same` as the second.
    Compare {
        /// First event date as JSON.
        a: String,

        /// Second event date as JSON.
        b: String,

        /// Era string ranking the dates' era tags.
        #[arg(long)]
        eras: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TimelineCommand {
    /// Store a timeline from a JSON file. Prints its slug.
    Import {
        /// Path to the timeline JSON.
        path: PathBuf,
    },

    /// List stored timelines.
    List,

    /// Print a timeline's events in chronological order with character ages.
    Show {
        /// Timeline slug.
        slug: String,

        /// Override the timeline's era string.
        #[arg(long)]
        eras: Option<String>,
    },

    /// Persist a timeline's events in chronological order.
    Sort {
        /// Timeline slug.
        slug: String,

        /// Override the timeline's era string.
        #[arg(long)]
        eras: Option<String>,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Eras { raw } => {
            println!("{}", format_eras(&config.eras(Some(raw.as_str()), None)));
            Ok(())
        }
        Command::Date { command } => match command {
            DateCommand::Format { date } => {
                println!("{}", format_date_value(&parse_json(&date)?));
                Ok(())
            }
            DateCommand::Compare { a, b, eras } => cmd_compare(config, &a, &b, eras.as_deref()),
        },
        Command::Age { born, date, eras } => cmd_age(config, &born, &date, eras.as_deref()),
        Command::Timeline { command } => {
            let storage = open_storage(cli.root)?;
            match command {
                TimelineCommand::Import { path } => cmd_import(&storage, &path),
                TimelineCommand::List => cmd_list(&storage),
                TimelineCommand::Show { slug, eras } => {
                    cmd_show(config, &storage, &slug, eras.as_deref())
                }
                TimelineCommand::Sort { slug, eras } => {
                    cmd_sort(config, &storage, &slug, eras.as_deref())
                }
            }
        }
    }
}

fn open_storage(root: Option<PathBuf>) -> Result<Storage, String> {
    let root = root
        .or_else(Storage::default_root)
        .ok_or("could not determine home directory")?;
    Storage::new(&root).map_err(|e| format!("failed to open storage at {}: {e}", root.display()))
}

fn cmd_compare(config: &Config, a: &str, b: &str, eras: Option<&str>) -> Result<(), String> {
    let a = EventDate::from_value(&parse_json(a)?);
    let b = EventDate::from_value(&parse_json(b)?);
    let ordering = compare_event_dates(a.as_ref(), b.as_ref(), &config.eras(eras, None));
    println!("{}", format_ordering(ordering));
    Ok(())
}

fn cmd_age(config: &Config, born: &str, date: &str, eras: Option<&str>) -> Result<(), String> {
    let date = EventDate::from_value(&parse_json(date)?);
    let eras = config.eras(eras, None);
    let age = date.and_then(|d| calculate_age(born, &d, &eras));
    println!("{}", format_age(age));
    Ok(())
}

fn cmd_import(storage: &Storage, path: &Path) -> Result<(), String> {
    let slug = storage
        .import_timeline(path)
        .map_err(|e| format!("failed to import {}: {e}", path.display()))?;
    println!("{slug}");
    Ok(())
}

fn cmd_list(storage: &Storage) -> Result<(), String> {
    let timelines = storage
        .list_timelines()
        .map_err(|e| format!("failed to list timelines: {e}"))?;

    if timelines.is_empty() {
        println!("No timelines");
        return Ok(());
    }

    for t in &timelines {
        let slug = crate::storage::slug(&t.name);
        let eras = t.eras.as_deref().unwrap_or("-");
        println!("{slug}  [{} events] [eras: {eras}]  {}", t.events.len(), t.name);
    }

    Ok(())
}

fn cmd_show(
    config: &Config,
    storage: &Storage,
    slug: &str,
    eras: Option<&str>,
) -> Result<(), String> {
    let mut timeline = load(storage, slug)?;
    let eras = config.eras(eras, timeline.eras.as_deref());
    sort_chronologically(&mut timeline.events, |e| e.date.as_ref(), &eras);

    if timeline.events.is_empty() {
        println!("No events");
        return Ok(());
    }
    for row in timeline_rows(&timeline, &eras) {
        println!("{row}");
    }
    Ok(())
}

fn cmd_sort(
    config: &Config,
    storage: &Storage,
    slug: &str,
    eras: Option<&str>,
) -> Result<(), String> {
    let mut timeline = load(storage, slug)?;
    let eras = config.eras(eras, timeline.eras.as_deref());
    let before: Vec<_> = timeline.events.iter().map(|e| e.id).collect();

    sort_chronologically(&mut timeline.events, |e| e.date.as_ref(), &eras);

    let moved = timeline
        .events
        .iter()
        .zip(&before)
        .filter(|(event, id)| event.id != **id)
        .count();
    if moved == 0 {
        eprintln!("Timeline {slug} already in order");
        return Ok(());
    }

    storage
        .save_timeline(&timeline)
        .map_err(|e| format!("failed to save timeline: {e}"))?;
    eprintln!("Timeline {slug} sorted ({moved} events moved)");
    Ok(())
}

fn load(storage: &Storage, slug: &str) -> Result<Timeline, String> {
    storage
        .load_timeline(slug)
        .map_err(|e| format!("failed to load timeline: {e}"))
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON {raw:?}: {e}"))
}
