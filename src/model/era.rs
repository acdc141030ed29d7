//! Era configuration: the ordered list of named epochs a timeline counts years in.

use serde::{Deserialize, Serialize};

/// A named chronological epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
    pub name: String,

    /// Absolute year at which this era's year 0 falls.
    /// Only needed to measure spans across eras.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// Which configured era a date without a recognized era tag belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmarkedEra {
    /// The last-listed era: undated events are assumed to be "current era".
    #[default]
    Latest,

    /// The first-listed era.
    Earliest,
}

/// Ordered eras, earliest first.
///
/// Built transiently from a timeline's era string on every read.
/// An empty config means no era ordering is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EraConfig {
    eras: Vec<Era>,
    unmarked: UnmarkedEra,
}

impl EraConfig {
    /// Builds a config from eras in chronological order.
    ///
    /// Names are expected trimmed and unique; the parser guarantees both.
    pub fn new(eras: Vec<Era>) -> Self {
        Self {
            eras,
            unmarked: UnmarkedEra::default(),
        }
    }

    /// Replaces the policy for era-less dates.
    #[must_use]
    pub fn with_unmarked(mut self, unmarked: UnmarkedEra) -> Self {
        self.unmarked = unmarked;
        self
    }

    pub fn unmarked(&self) -> UnmarkedEra {
        self.unmarked
    }

    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }

    pub fn len(&self) -> usize {
        self.eras.len()
    }

    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    pub fn names(&self) -> Vec<&str> {
        self.eras.iter().map(|e| e.name.as_str()).collect()
    }

    /// Chronological rank of an era tag.
    ///
    /// A recognized tag ranks by its position. An absent or unrecognized tag
    /// takes the rank of the unmarked era. Returns `None` when no eras are
    /// configured.
    pub fn rank(&self, era: Option<&str>) -> Option<usize> {
        if self.eras.is_empty() {
            return None;
        }
        let found = era
            .map(str::trim)
            .and_then(|tag| self.eras.iter().position(|e| e.name == tag));
        Some(found.unwrap_or(match self.unmarked {
            UnmarkedEra::Latest => self.eras.len() - 1,
            UnmarkedEra::Earliest => 0,
        }))
    }

    /// Position of an era tag for chronological ordering.
    ///
    /// Recognized tags keep their list order. An absent or unrecognized tag
    /// sorts after every configured era under [`UnmarkedEra::Latest`] and
    /// before all of them under [`UnmarkedEra::Earliest`]. Returns `None`
    /// when no eras are configured.
    pub fn sort_rank(&self, era: Option<&str>) -> Option<usize> {
        if self.eras.is_empty() {
            return None;
        }
        let found = era
            .map(str::trim)
            .and_then(|tag| self.eras.iter().position(|e| e.name == tag));
        Some(match (found, self.unmarked) {
            (Some(index), _) => index + 1,
            (None, UnmarkedEra::Latest) => self.eras.len() + 1,
            (None, UnmarkedEra::Earliest) => 0,
        })
    }

    /// Offset of the era at `rank`, if one was configured.
    pub fn offset(&self, rank: usize) -> Option<i64> {
        self.eras.get(rank).and_then(|e| e.offset)
    }
}
