//! Finalized journal records.
//!
//! Field names serialize in camelCase so persisted entries are readable
//! by (and from) the original journal's data files.

use serde::{Deserialize, Serialize};

use crate::badge::Badge;

/// One finalized thought: an affirmation paired with its justification
/// and both reflections. All fields are present once an entry exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtPair {
    pub part1: String,
    /// The word connecting the two parts; `None` for two-prompt plans.
    pub connector: Option<String>,
    pub part2: String,
    pub reflection1: String,
    pub reflection2: String,
}

/// An immutable journal entry. Created only at successful submission,
/// never mutated afterwards, destroyed only by bulk data reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique, time-derived id (RFC 3339 creation instant).
    pub id: String,
    pub plan_title: String,
    /// The prompts are stored on the entry so it renders without the plan.
    pub prompt1: String,
    pub prompt2: String,
    pub thought_pairs: Vec<ThoughtPair>,
    pub badge_name: Badge,
    /// Display date, dd.mm.yyyy.
    pub timestamp: String,
}
