//! Local persistence for timelines.
//!
//! Each timeline lives in its own JSON file under the storage root,
//! named by the slug of its name:
//!
//! ```text
//! <root>/<slug>.json   # Timeline: eras, events, characters
//! ```

use std::{fs, io, path::Path, path::PathBuf};

use crate::model::Timeline;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("timeline not found: {0}")]
    TimelineNotFound(String),

    #[error("timeline already exists: {0}")]
    TimelineAlreadyExists(String),

    #[error("timeline name has no usable characters: {0:?}")]
    InvalidName(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Local file-based storage for timelines.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.chronicle/timelines/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".chronicle").join("timelines"))
    }

    /// Stores a new timeline and returns its slug.
    pub fn create_timeline(&self, timeline: &Timeline) -> Result<String> {
        let slug = require_slug(&timeline.name)?;
        let path = self.timeline_path(&slug);
        if path.exists() {
            return Err(StorageError::TimelineAlreadyExists(slug));
        }
        write_json(&path, timeline)?;
        tracing::info!(%slug, events = timeline.events.len(), "created timeline");
        Ok(slug)
    }

    /// Overwrites an existing timeline.
    pub fn save_timeline(&self, timeline: &Timeline) -> Result<()> {
        let slug = require_slug(&timeline.name)?;
        let path = self.timeline_path(&slug);
        if !path.exists() {
            return Err(StorageError::TimelineNotFound(slug));
        }
        write_json(&path, timeline)?;
        tracing::info!(%slug, "saved timeline");
        Ok(())
    }

    /// Loads a timeline by slug.
    pub fn load_timeline(&self, slug: &str) -> Result<Timeline> {
        let path = self.timeline_path(slug);
        if !path.exists() {
            return Err(StorageError::TimelineNotFound(slug.to_string()));
        }
        read_json(&path)
    }

    /// Lists all stored timelines, sorted by name.
    pub fn list_timelines(&self) -> Result<Vec<Timeline>> {
        let mut timelines = Vec::new();
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(timelines),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                timelines.push(read_json(&path)?);
            }
        }
        timelines.sort_by(|a: &Timeline, b: &Timeline| a.name.cmp(&b.name));
        Ok(timelines)
    }

    /// Reads a timeline from an arbitrary JSON file and stores it.
    pub fn import_timeline(&self, path: &Path) -> Result<String> {
        let timeline: Timeline = read_json(path)?;
        self.create_timeline(&timeline)
    }

    fn timeline_path(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{slug}.json"))
    }
}

/// File-safe key for a timeline name: lowercase ASCII alphanumerics,
/// with every other run of characters collapsed to a single `-`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut gap = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    out
}

fn require_slug(name: &str) -> Result<String> {
    let slug = slug(name);
    if slug.is_empty() {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(slug)
}

fn read_json(path: &Path) -> Result<Timeline> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn write_json(path: &Path, timeline: &Timeline) -> Result<()> {
    let json = serde_json::to_string_pretty(timeline)?;
    fs::write(path, json)?;
    Ok(())
}
