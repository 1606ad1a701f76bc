use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::badge::Badge;
use crate::checkin::Mood;
use crate::journal::StageKind;

/// Every state change in the system produces an Event.
/// The CLI prints them; a future GUI layer would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// An affirmation was appended in the collecting stage.
    AffirmationAdded {
        index: usize,
        count: usize,
        at: DateTime<Utc>,
    },
    /// The composer entered a new stage (index reset to 0).
    StageEntered {
        stage: StageKind,
        item_count: usize,
        at: DateTime<Utc>,
    },
    /// A sequential-stage answer was written at `index`.
    StepCommitted {
        stage: StageKind,
        index: usize,
        item_count: usize,
        at: DateTime<Utc>,
    },
    /// One-step-back navigation landed on (stage, index).
    SteppedBack {
        stage: StageKind,
        index: usize,
        at: DateTime<Utc>,
    },
    /// The user left the composer from the collecting stage.
    ComposerCancelled {
        at: DateTime<Utc>,
    },
    /// Submission succeeded and a journal entry was constructed.
    EntryCompleted {
        entry_id: String,
        plan_id: u32,
        badge: Badge,
        thought_count: usize,
        at: DateTime<Utc>,
    },
    /// A daily check-in was recorded.
    CheckinRecorded {
        date: NaiveDate,
        mood: Mood,
        streak: u32,
        awarded: Vec<Badge>,
        at: DateTime<Utc>,
    },
    /// A badge entered the collected set.
    BadgeAwarded {
        badge: Badge,
        at: DateTime<Utc>,
    },
    /// Full composer state snapshot for status displays.
    ComposerSnapshot {
        plan_id: u32,
        stage: StageKind,
        index: Option<usize>,
        affirmation_count: usize,
        draft: String,
        at: DateTime<Utc>,
    },
}
