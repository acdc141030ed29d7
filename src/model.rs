//! Core data model for Chronicle.
//!
//! Event dates in their five shapes, the era configuration that ranks them,
//! and the timeline records that own them.

mod date;
mod era;
mod timeline;

pub use date::{EventDate, PartialDate, Period};
pub use era::{Era, EraConfig, UnmarkedEra};
pub use timeline::{Character, Timeline, TimelineEvent};
