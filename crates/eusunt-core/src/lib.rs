//! # Eu Sunt Core Library
//!
//! Core business logic for "Eu Sunt", a guided reflective-journaling
//! app for young users. The library is CLI-first: every operation is
//! available through the standalone CLI binary, and any GUI layer would
//! be a thin shell over the same core.
//!
//! ## Architecture
//!
//! - **Entry Composer**: a four-stage state machine that turns a plan's
//!   prompts plus the user's answers into an immutable journal entry
//! - **Check-in Engine**: daily mood/thought capture with streak
//!   tracking and milestone badges
//! - **Storage**: SQLite-backed key-value store of wholesale JSON
//!   records and TOML-based configuration
//! - **Profile**: badge-gated avatar items and journal themes, rendered
//!   as layered SVG
//! - **Export**: read-only share-text and paginated PDF renderers
//!
//! ## Key Components
//!
//! - [`Composer`]: the entry composer state machine
//! - [`Store`]: persistent collections (entries, badges, moods, streak)
//! - [`check_in`]: the daily check-in/streak transition
//! - [`BadgeResolver`]: the badge assignment seam

pub mod badge;
pub mod checkin;
pub mod error;
pub mod events;
pub mod export;
pub mod journal;
pub mod plan;
pub mod profile;
pub mod storage;

pub use badge::{Badge, BadgeInfo, BadgeResolver, PlanBadgeResolver};
pub use checkin::{
    check_in, daily_prompt, CheckinOutcome, DailyThought, Mood, MoodEntry, StreakData,
};
pub use error::{
    CheckinError, ComposerError, ConfigError, CoreError, ExportError, ProfileError, StorageError,
};
pub use events::Event;
pub use journal::{
    Composer, JournalEntry, Stage, StageKind, ThoughtDraft, ThoughtPair, MAX_AFFIRMATIONS,
    MIN_AFFIRMATIONS,
};
pub use plan::{plan_by_id, plans, Plan};
pub use profile::{AvatarConfig, AvatarPart, ColorSlot, JournalTheme};
pub use storage::{Config, Database, DataResetOptions, DataResetSummary, Store};
