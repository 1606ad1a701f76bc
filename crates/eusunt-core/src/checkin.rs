//! Daily check-in and streak engine.
//!
//! One check-in per calendar date records the day's mood and the answer
//! to a rotating daily prompt, then recomputes the streak: a check-in on
//! the day after the previous one extends it, anything else resets it to
//! one. Streak milestones at 3, 7 and 30 days award badges; awards are a
//! set union, so a badge once earned is never revoked.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::badge::Badge;
use crate::error::CheckinError;

/// The rotating daily prompts, indexed by day-of-year.
pub const DAILY_PROMPTS: [&str; 10] = [
    "Ce lucru mărunt te-a făcut să zâmbești azi?",
    "Descrie un sunet pe care l-ai auzit azi și ți-a plăcut.",
    "Dacă ai avea o superputere pentru o zi, care ar fi și de ce?",
    "Ce culoare crezi că a avut ziua de azi? De ce?",
    "Scrie despre un lucru pe care l-ai învățat azi.",
    "Pentru ce ești recunoscător astăzi?",
    "Ce te-a făcut să te simți mândru de tine azi?",
    "Dacă ai putea oferi un cadou oricui din lume, ce ai oferi și cui?",
    "Care este cel mai frumos vis pe care ți-l amintești?",
    "Ce melodie ți-a rămas în minte astăzi?",
];

/// Streak lengths at which a badge is awarded.
pub const STREAK_MILESTONES: [(u32, Badge); 3] = [
    (3, Badge::Streak3),
    (7, Badge::Streak7),
    (30, Badge::Streak30),
];

/// How the user feels today. Serialized as the Romanian word, matching
/// the original mood records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "fericit")]
    Fericit,
    #[serde(rename = "liniștit")]
    Linistit,
    #[serde(rename = "îngrijorat")]
    Ingrijorat,
    #[serde(rename = "trist")]
    Trist,
    #[serde(rename = "entuziasmat")]
    Entuziasmat,
}

/// Display metadata for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodInfo {
    pub emoji: &'static str,
    pub color: &'static str,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Fericit,
        Mood::Linistit,
        Mood::Ingrijorat,
        Mood::Trist,
        Mood::Entuziasmat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Fericit => "fericit",
            Mood::Linistit => "liniștit",
            Mood::Ingrijorat => "îngrijorat",
            Mood::Trist => "trist",
            Mood::Entuziasmat => "entuziasmat",
        }
    }

    pub fn info(&self) -> MoodInfo {
        match self {
            Mood::Fericit => MoodInfo {
                emoji: "😊",
                color: "#fde047",
            },
            Mood::Linistit => MoodInfo {
                emoji: "😌",
                color: "#86efac",
            },
            Mood::Ingrijorat => MoodInfo {
                emoji: "😟",
                color: "#93c5fd",
            },
            Mood::Trist => MoodInfo {
                emoji: "😢",
                color: "#9ca3af",
            },
            Mood::Entuziasmat => MoodInfo {
                emoji: "🤩",
                color: "#fb923c",
            },
        }
    }
}

impl FromStr for Mood {
    type Err = CheckinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| CheckinError::UnknownMood(s.to_string()))
    }
}

/// One recorded mood, one expected per calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
}

/// One answered daily prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyThought {
    pub date: NaiveDate,
    pub prompt: String,
    pub answer: String,
}

/// Persisted streak record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakData {
    pub current_streak: u32,
    /// ISO date of the last check-in, empty when there never was one.
    pub last_checkin_date: String,
}

impl StreakData {
    pub fn last_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.last_checkin_date, "%Y-%m-%d").ok()
    }

    /// Whether today's check-in is still open.
    pub fn needs_checkin(&self, today: NaiveDate) -> bool {
        self.last_date() != Some(today)
    }
}

/// Everything produced by one successful check-in. The caller persists
/// the mood and thought (append), the streak (replace) and the badges
/// (set union).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckinOutcome {
    pub mood: MoodEntry,
    pub thought: DailyThought,
    pub streak: StreakData,
    pub awarded: Vec<Badge>,
}

/// The prompt for a given date, from the fixed rotation.
pub fn daily_prompt(date: NaiveDate) -> &'static str {
    DAILY_PROMPTS[date.ordinal0() as usize % DAILY_PROMPTS.len()]
}

/// Run the daily check-in.
///
/// Rejects a second check-in on the same date and an empty answer; both
/// leave the previous streak untouched.
pub fn check_in(
    previous: &StreakData,
    today: NaiveDate,
    mood: Mood,
    answer: &str,
) -> Result<CheckinOutcome, CheckinError> {
    if previous.last_date() == Some(today) {
        return Err(CheckinError::AlreadyCheckedIn { date: today });
    }
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(CheckinError::EmptyAnswer);
    }

    let extended = previous.last_date().is_some() && previous.last_date() == today.pred_opt();
    let current_streak = if extended {
        previous.current_streak + 1
    } else {
        1
    };

    let awarded = STREAK_MILESTONES
        .iter()
        .filter(|(threshold, _)| current_streak >= *threshold)
        .map(|(_, badge)| *badge)
        .collect();

    Ok(CheckinOutcome {
        mood: MoodEntry { date: today, mood },
        thought: DailyThought {
            date: today,
            prompt: daily_prompt(today).to_string(),
            answer: answer.to_string(),
        },
        streak: StreakData {
            current_streak,
            last_checkin_date: today.format("%Y-%m-%d").to_string(),
        },
        awarded,
    })
}
