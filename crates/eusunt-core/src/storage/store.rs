//! Typed facade over the key-value database.
//!
//! Each persisted collection lives under one key and is read and
//! rewritten wholesale. A corrupt or unreadable record degrades to the
//! key's default value with a warning -- keys fail independently, and
//! load never propagates an error to callers.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::badge::Badge;
use crate::checkin::{CheckinOutcome, DailyThought, MoodEntry, StreakData};
use crate::error::StorageError;
use crate::journal::{Composer, JournalEntry};
use crate::profile::AvatarConfig;

use super::Database;

/// The persisted record keys. Spellings match the original journal's
/// storage so existing data loads as-is.
pub mod keys {
    pub const JOURNAL_ENTRIES: &str = "journalEntries";
    pub const COLLECTED_BADGES: &str = "collectedBadges";
    pub const MOOD_ENTRIES: &str = "moodEntries";
    pub const DAILY_THOUGHTS: &str = "dailyThoughts";
    pub const STREAK_DATA: &str = "streakData";
    pub const AVATAR_CONFIG: &str = "avatarConfig";
    pub const JOURNAL_THEME: &str = "journalTheme";
    /// The in-flight composer session, parked between CLI invocations.
    pub const COMPOSER_SESSION: &str = "composerSession";
}

/// Which collections a bulk reset clears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataResetOptions {
    pub entries: bool,
    pub badges: bool,
    pub moods: bool,
    pub daily_thoughts: bool,
    pub streak: bool,
    pub profile: bool,
}

impl DataResetOptions {
    pub fn everything() -> Self {
        Self {
            entries: true,
            badges: true,
            moods: true,
            daily_thoughts: true,
            streak: true,
            profile: true,
        }
    }
}

/// What a bulk reset removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataResetSummary {
    pub deleted_entries: usize,
    pub deleted_badges: usize,
    pub deleted_moods: usize,
    pub deleted_thoughts: usize,
    pub streak_cleared: bool,
    pub profile_cleared: bool,
}

/// Typed storage for every persisted collection.
pub struct Store {
    db: Database,
}

impl Store {
    /// Open the store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            db: Database::open()?,
        })
    }

    /// In-memory store (tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: Database::open_memory()?,
        })
    }

    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Load a record wholesale, degrading to the default on a missing,
    /// unreadable or corrupt value.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.db.kv_get(key) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = %e, "corrupt record, using default");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read record, using default");
                T::default()
            }
        }
    }

    /// Save a record wholesale.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.db.kv_set(key, &json)
    }

    // ── Typed collections ────────────────────────────────────────────

    /// The append-only entry log, insertion order = chronological.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.load_or_default(keys::JOURNAL_ENTRIES)
    }

    /// The collected badge set (serialized as a duplicate-free sequence).
    pub fn badges(&self) -> BTreeSet<Badge> {
        self.load_or_default(keys::COLLECTED_BADGES)
    }

    pub fn moods(&self) -> Vec<MoodEntry> {
        self.load_or_default(keys::MOOD_ENTRIES)
    }

    pub fn daily_thoughts(&self) -> Vec<DailyThought> {
        self.load_or_default(keys::DAILY_THOUGHTS)
    }

    pub fn streak(&self) -> StreakData {
        self.load_or_default(keys::STREAK_DATA)
    }

    pub fn avatar(&self) -> AvatarConfig {
        self.load_or_default(keys::AVATAR_CONFIG)
    }

    pub fn save_avatar(&self, config: &AvatarConfig) -> Result<(), StorageError> {
        self.save(keys::AVATAR_CONFIG, config)
    }

    /// The active journal theme id; empty record means the default.
    pub fn theme_id(&self) -> String {
        let id: String = self.load_or_default(keys::JOURNAL_THEME);
        if id.is_empty() {
            crate::profile::default_theme().id.to_string()
        } else {
            id
        }
    }

    pub fn save_theme_id(&self, id: &str) -> Result<(), StorageError> {
        self.save(keys::JOURNAL_THEME, &id)
    }

    // ── Write-side operations ────────────────────────────────────────

    /// Hand-off target for a completed composer session: appends the
    /// entry and unions its badge into the collected set.
    pub fn save_entry(&self, entry: &JournalEntry) -> Result<(), StorageError> {
        let mut entries = self.entries();
        entries.push(entry.clone());
        self.save(keys::JOURNAL_ENTRIES, &entries)?;
        self.award_badge(entry.badge_name)
    }

    /// Union one badge into the collected set. Never removes.
    pub fn award_badge(&self, badge: Badge) -> Result<(), StorageError> {
        let mut badges = self.badges();
        badges.insert(badge);
        self.save(keys::COLLECTED_BADGES, &badges)
    }

    /// Persist everything a successful daily check-in produced.
    pub fn record_checkin(&self, outcome: &CheckinOutcome) -> Result<(), StorageError> {
        let mut moods = self.moods();
        moods.push(outcome.mood.clone());
        self.save(keys::MOOD_ENTRIES, &moods)?;

        let mut thoughts = self.daily_thoughts();
        thoughts.push(outcome.thought.clone());
        self.save(keys::DAILY_THOUGHTS, &thoughts)?;

        self.save(keys::STREAK_DATA, &outcome.streak)?;

        let mut badges = self.badges();
        badges.extend(outcome.awarded.iter().copied());
        self.save(keys::COLLECTED_BADGES, &badges)
    }

    // ── Composer session parking ─────────────────────────────────────

    /// The parked in-flight composer session, if any. A corrupt session
    /// is discarded rather than blocking a new one.
    pub fn composer_session(&self) -> Option<Composer> {
        let json = self.db.kv_get(keys::COMPOSER_SESSION).ok()??;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt composer session");
                None
            }
        }
    }

    pub fn save_composer_session(&self, session: &Composer) -> Result<(), StorageError> {
        self.save(keys::COMPOSER_SESSION, session)
    }

    pub fn clear_composer_session(&self) -> Result<(), StorageError> {
        self.db.kv_delete(keys::COMPOSER_SESSION)
    }

    // ── Bulk reset ───────────────────────────────────────────────────

    /// Clear the selected collections and report what was removed.
    pub fn reset(&self, options: DataResetOptions) -> Result<DataResetSummary, StorageError> {
        let mut summary = DataResetSummary::default();
        if options.entries {
            summary.deleted_entries = self.entries().len();
            self.db.kv_delete(keys::JOURNAL_ENTRIES)?;
        }
        if options.badges {
            summary.deleted_badges = self.badges().len();
            self.db.kv_delete(keys::COLLECTED_BADGES)?;
        }
        if options.moods {
            summary.deleted_moods = self.moods().len();
            self.db.kv_delete(keys::MOOD_ENTRIES)?;
        }
        if options.daily_thoughts {
            summary.deleted_thoughts = self.daily_thoughts().len();
            self.db.kv_delete(keys::DAILY_THOUGHTS)?;
        }
        if options.streak {
            self.db.kv_delete(keys::STREAK_DATA)?;
            summary.streak_cleared = true;
        }
        if options.profile {
            self.db.kv_delete(keys::AVATAR_CONFIG)?;
            self.db.kv_delete(keys::JOURNAL_THEME)?;
            summary.profile_cleared = true;
        }
        Ok(summary)
    }
}
