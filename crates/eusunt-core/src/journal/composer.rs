//! Entry composer state machine.
//!
//! The composer drives one guided journal entry through four sequential
//! stages, then a submission step:
//!
//! ```text
//! Collecting -> Justifying -> Reflecting1 -> Reflecting2 -> Submitting -> Completed
//!      |                                                        |
//!      +-> Cancelled (back from Collecting)                     +-> (retry on failure)
//! ```
//!
//! Stage 1 collects 7..=15 affirmations. Stages 2-4 walk the same index
//! range `[0, N)` once each, filling one field of the per-item
//! [`ThoughtDraft`] record at a time. Navigation is strictly linear with
//! one-step-back: no jumps, no skipping.
//!
//! Commands operate on a draft input buffer (set via [`Composer::set_draft`])
//! and return an [`Event`] on success. Validation failures are `Err`
//! returns that mutate nothing, so already-entered data is never lost.
//! The whole session serializes, which lets a caller park an in-flight
//! entry between invocations and discard it on completion.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::badge::BadgeResolver;
use crate::error::ComposerError;
use crate::events::Event;
use crate::journal::entry::{JournalEntry, ThoughtPair};
use crate::journal::{REFLECTION1_PROMPT, REFLECTION2_PROMPT};
use crate::plan::Plan;

/// Fewest affirmations allowed past the collecting stage.
pub const MIN_AFFIRMATIONS: usize = 7;

/// Most affirmations one entry can hold.
pub const MAX_AFFIRMATIONS: usize = 15;

/// One growable per-item record. The affirmation is fixed when the item
/// is created; the remaining fields are filled one stage at a time, which
/// keeps the four answers for an item correlated by construction instead
/// of by four parallel arrays staying in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtDraft {
    pub affirmation: String,
    #[serde(default)]
    pub connector: Option<String>,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub reflection1: Option<String>,
    #[serde(default)]
    pub reflection2: Option<String>,
}

/// Discriminant-only view of [`Stage`], for events and displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Collecting,
    Justifying,
    Reflecting1,
    Reflecting2,
    Submitting,
    Completed,
    Cancelled,
}

/// Composer stage. The sequential variants carry only the item index
/// they are positioned at; an index can exist only in a stage that
/// iterates, so invalid combinations are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "lowercase")]
pub enum Stage {
    Collecting,
    Justifying { index: usize },
    Reflecting1 { index: usize },
    Reflecting2 { index: usize },
    Submitting,
    Completed,
    Cancelled,
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Collecting => StageKind::Collecting,
            Stage::Justifying { .. } => StageKind::Justifying,
            Stage::Reflecting1 { .. } => StageKind::Reflecting1,
            Stage::Reflecting2 { .. } => StageKind::Reflecting2,
            Stage::Submitting => StageKind::Submitting,
            Stage::Completed => StageKind::Completed,
            Stage::Cancelled => StageKind::Cancelled,
        }
    }

    /// The item index for sequential stages.
    pub fn index(&self) -> Option<usize> {
        match self {
            Stage::Justifying { index }
            | Stage::Reflecting1 { index }
            | Stage::Reflecting2 { index } => Some(*index),
            _ => None,
        }
    }

}

/// The entry composer.
///
/// Owns its working records exclusively until submission, at which point
/// a [`JournalEntry`] is constructed and handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composer {
    plan: Plan,
    stage: Stage,
    thoughts: Vec<ThoughtDraft>,
    #[serde(default)]
    draft: String,
}

impl Composer {
    /// Start a new session for the given plan, in the collecting stage.
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            stage: Stage::Collecting,
            thoughts: Vec::new(),
            draft: String::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn stage_kind(&self) -> StageKind {
        self.stage.kind()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn thoughts(&self) -> &[ThoughtDraft] {
        &self.thoughts
    }

    pub fn affirmation_count(&self) -> usize {
        self.thoughts.len()
    }

    /// How many more affirmations the collecting stage still needs.
    pub fn remaining_to_min(&self) -> usize {
        MIN_AFFIRMATIONS.saturating_sub(self.thoughts.len())
    }

    /// 1-based (position, total) within the current sequential stage.
    pub fn step_position(&self) -> Option<(usize, usize)> {
        self.stage.index().map(|i| (i + 1, self.thoughts.len()))
    }

    /// The question presented for the current input.
    pub fn step_prompt(&self) -> Option<&str> {
        match self.stage {
            Stage::Collecting => Some(self.plan.prompt1.as_str()),
            Stage::Justifying { .. } => {
                if self.plan.has_connectors() {
                    Some("...")
                } else {
                    Some(self.plan.prompt2.as_str())
                }
            }
            Stage::Reflecting1 { .. } => Some(REFLECTION1_PROMPT),
            Stage::Reflecting2 { .. } => Some(REFLECTION2_PROMPT),
            _ => None,
        }
    }

    /// The thought being worked on, rendered for display. In the
    /// justification stage this is the bare affirmation; in the
    /// reflection stages the completed thought. Computed on demand,
    /// never stored.
    pub fn thought_preview(&self) -> Option<String> {
        let index = self.stage.index()?;
        let item = self.thoughts.get(index)?;
        match self.stage {
            Stage::Justifying { .. } => {
                Some(format!("{} \"{}\"", self.plan.prompt1, item.affirmation))
            }
            Stage::Reflecting1 { .. } | Stage::Reflecting2 { .. } => {
                let justification = item.justification.as_deref().unwrap_or_default();
                Some(match &item.connector {
                    Some(connector) => format!(
                        "{} \"{}\" {} {}.",
                        self.plan.prompt1, item.affirmation, connector, justification
                    ),
                    None => format!(
                        "{} \"{}\". {} \"{}\".",
                        self.plan.prompt1, item.affirmation, self.plan.prompt2, justification
                    ),
                })
            }
            _ => None,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::ComposerSnapshot {
            plan_id: self.plan.id,
            stage: self.stage.kind(),
            index: self.stage.index(),
            affirmation_count: self.thoughts.len(),
            draft: self.draft.clone(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append the drafted affirmation (collecting stage only).
    pub fn add_affirmation(&mut self) -> Result<Event, ComposerError> {
        self.expect_stage(StageKind::Collecting)?;
        let text = self.draft.trim();
        if text.is_empty() {
            return Err(ComposerError::EmptyInput);
        }
        if self.thoughts.len() >= MAX_AFFIRMATIONS {
            return Err(ComposerError::AffirmationLimit {
                max: MAX_AFFIRMATIONS,
            });
        }
        self.thoughts.push(ThoughtDraft {
            affirmation: text.to_string(),
            ..ThoughtDraft::default()
        });
        self.draft.clear();
        Ok(Event::AffirmationAdded {
            index: self.thoughts.len() - 1,
            count: self.thoughts.len(),
            at: Utc::now(),
        })
    }

    /// Leave the collecting stage and start the sequential stages.
    ///
    /// Re-entering (after navigating back to collecting) starts the
    /// sequential stages over: stage answers reset and every item's
    /// connector returns to the plan default.
    pub fn begin_justifying(&mut self) -> Result<Event, ComposerError> {
        self.expect_stage(StageKind::Collecting)?;
        if self.thoughts.len() < MIN_AFFIRMATIONS {
            return Err(ComposerError::TooFewAffirmations {
                have: self.thoughts.len(),
                min: MIN_AFFIRMATIONS,
            });
        }
        let default_connector = self.plan.default_connector().map(str::to_string);
        for item in &mut self.thoughts {
            item.connector = default_connector.clone();
            item.justification = None;
            item.reflection1 = None;
            item.reflection2 = None;
        }
        self.stage = Stage::Justifying { index: 0 };
        self.draft.clear();
        Ok(Event::StageEntered {
            stage: StageKind::Justifying,
            item_count: self.thoughts.len(),
            at: Utc::now(),
        })
    }

    /// Override the connector for the current item (justification stage,
    /// connector plans only). Independent of the justification text.
    pub fn select_connector(&mut self, connector: &str) -> Result<(), ComposerError> {
        let Stage::Justifying { index } = self.stage else {
            return Err(ComposerError::WrongStage {
                expected: StageKind::Justifying,
                actual: self.stage.kind(),
            });
        };
        if !self.plan.has_connectors() {
            return Err(ComposerError::NoConnectors);
        }
        if !self.plan.connectors.iter().any(|c| c == connector) {
            return Err(ComposerError::UnknownConnector {
                value: connector.to_string(),
            });
        }
        self.thoughts[index].connector = Some(connector.to_string());
        Ok(())
    }

    /// Commit the drafted answer for the current sequential step.
    ///
    /// Writes the trimmed draft into the record at the current index,
    /// then moves to the next item, or to the next stage at the last
    /// item. The last reflection commit enters `Submitting` with the
    /// in-flight value already recorded, so finalization reads complete
    /// records and never a stale buffer.
    pub fn commit_step(&mut self) -> Result<Event, ComposerError> {
        let (kind, index) = match self.stage {
            Stage::Justifying { index } => (StageKind::Justifying, index),
            Stage::Reflecting1 { index } => (StageKind::Reflecting1, index),
            Stage::Reflecting2 { index } => (StageKind::Reflecting2, index),
            _ => {
                return Err(ComposerError::WrongStage {
                    expected: StageKind::Justifying,
                    actual: self.stage.kind(),
                })
            }
        };
        let text = self.draft.trim();
        if text.is_empty() {
            return Err(ComposerError::EmptyInput);
        }
        let text = text.to_string();
        match kind {
            StageKind::Justifying => self.thoughts[index].justification = Some(text),
            StageKind::Reflecting1 => self.thoughts[index].reflection1 = Some(text),
            _ => self.thoughts[index].reflection2 = Some(text),
        }
        self.draft.clear();

        let at = Utc::now();
        let last = self.thoughts.len() - 1;
        if index < last {
            self.stage = match kind {
                StageKind::Justifying => Stage::Justifying { index: index + 1 },
                StageKind::Reflecting1 => Stage::Reflecting1 { index: index + 1 },
                _ => Stage::Reflecting2 { index: index + 1 },
            };
            return Ok(Event::StepCommitted {
                stage: kind,
                index,
                item_count: self.thoughts.len(),
                at,
            });
        }

        // Last item of the stage: promote.
        let next = match kind {
            StageKind::Justifying => Stage::Reflecting1 { index: 0 },
            StageKind::Reflecting1 => Stage::Reflecting2 { index: 0 },
            _ => Stage::Submitting,
        };
        self.stage = next;
        Ok(Event::StageEntered {
            stage: next.kind(),
            item_count: self.thoughts.len(),
            at,
        })
    }

    /// One-step-back navigation.
    ///
    /// Within a sequential stage, steps back one item and repopulates the
    /// draft with the value recorded there, so previous answers can be
    /// edited and recommitted. At index 0 it drops to the previous
    /// stage's last item (to collecting from the justification stage).
    /// From collecting it cancels the session entirely.
    pub fn back(&mut self) -> Result<Event, ComposerError> {
        let at = Utc::now();
        let last = self.thoughts.len().saturating_sub(1);
        let (stage, draft) = match self.stage {
            Stage::Completed | Stage::Cancelled => {
                return Err(ComposerError::WrongStage {
                    expected: StageKind::Collecting,
                    actual: self.stage.kind(),
                });
            }
            Stage::Collecting => {
                self.stage = Stage::Cancelled;
                return Ok(Event::ComposerCancelled { at });
            }
            Stage::Justifying { index: 0 } => (Stage::Collecting, String::new()),
            Stage::Justifying { index } => (
                Stage::Justifying { index: index - 1 },
                self.recorded(StageKind::Justifying, index - 1),
            ),
            Stage::Reflecting1 { index: 0 } => (
                Stage::Justifying { index: last },
                self.recorded(StageKind::Justifying, last),
            ),
            Stage::Reflecting1 { index } => (
                Stage::Reflecting1 { index: index - 1 },
                self.recorded(StageKind::Reflecting1, index - 1),
            ),
            Stage::Reflecting2 { index: 0 } => (
                Stage::Reflecting1 { index: last },
                self.recorded(StageKind::Reflecting1, last),
            ),
            Stage::Reflecting2 { index } => (
                Stage::Reflecting2 { index: index - 1 },
                self.recorded(StageKind::Reflecting2, index - 1),
            ),
            // After a failed submission, reopen the last reflection.
            Stage::Submitting => (
                Stage::Reflecting2 { index: last },
                self.recorded(StageKind::Reflecting2, last),
            ),
        };
        self.stage = stage;
        self.draft = draft;
        Ok(Event::SteppedBack {
            stage: stage.kind(),
            index: stage.index().unwrap_or(0),
            at,
        })
    }

    /// Resolve the badge and construct the final [`JournalEntry`]
    /// (submitting stage only).
    ///
    /// On resolver failure the stage stays `Submitting` with every record
    /// intact, so submission can be retried without retyping. On success
    /// the session is `Completed` and ownership of the data passes to the
    /// returned entry.
    pub fn finalize(
        &mut self,
        resolver: &dyn BadgeResolver,
    ) -> Result<JournalEntry, ComposerError> {
        self.expect_stage(StageKind::Submitting)?;
        let mut pairs = Vec::with_capacity(self.thoughts.len());
        for (index, item) in self.thoughts.iter().enumerate() {
            let (Some(part2), Some(reflection1), Some(reflection2)) = (
                item.justification.as_ref(),
                item.reflection1.as_ref(),
                item.reflection2.as_ref(),
            ) else {
                return Err(ComposerError::IncompleteThought { index });
            };
            pairs.push(ThoughtPair {
                part1: item.affirmation.clone(),
                connector: item.connector.clone(),
                part2: part2.clone(),
                reflection1: reflection1.clone(),
                reflection2: reflection2.clone(),
            });
        }
        let badge = resolver
            .resolve(self.plan.badge)
            .map_err(|e| ComposerError::BadgeResolution(e.to_string()))?;
        let now = Utc::now();
        let entry = JournalEntry {
            id: now.to_rfc3339(),
            plan_title: self.plan.title.clone(),
            prompt1: self.plan.prompt1.clone(),
            prompt2: self.plan.prompt2.clone(),
            thought_pairs: pairs,
            badge_name: badge,
            timestamp: now.format("%d.%m.%Y").to_string(),
        };
        self.stage = Stage::Completed;
        Ok(entry)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn expect_stage(&self, expected: StageKind) -> Result<(), ComposerError> {
        if self.stage.kind() == expected {
            Ok(())
        } else {
            Err(ComposerError::WrongStage {
                expected,
                actual: self.stage.kind(),
            })
        }
    }

    /// The recorded answer for (stage, index), used to repopulate the
    /// draft when navigating back onto an already-answered step.
    fn recorded(&self, kind: StageKind, index: usize) -> String {
        let Some(item) = self.thoughts.get(index) else {
            return String::new();
        };
        let value = match kind {
            StageKind::Justifying => &item.justification,
            StageKind::Reflecting1 => &item.reflection1,
            _ => &item.reflection2,
        };
        value.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::{Badge, PlanBadgeResolver};
    use crate::plan::plan_by_id;

    /// "Eu sunt..." -- connectors ["datorită", "din cauza"].
    fn connector_plan() -> Plan {
        plan_by_id(1).unwrap()
    }

    /// "Mama" -- two prompts, no connectors.
    fn two_prompt_plan() -> Plan {
        plan_by_id(3).unwrap()
    }

    fn add(composer: &mut Composer, text: &str) {
        composer.set_draft(text);
        composer.add_affirmation().unwrap();
    }

    fn commit(composer: &mut Composer, text: &str) {
        composer.set_draft(text);
        composer.commit_step().unwrap();
    }

    /// Collect `n` numbered affirmations and advance to justifying.
    fn collected(plan: Plan, n: usize) -> Composer {
        let mut composer = Composer::new(plan);
        for i in 0..n {
            add(&mut composer, &format!("gând {i}"));
        }
        composer.begin_justifying().unwrap();
        composer
    }

    /// Run stages 2-4 with per-index inputs and finalize.
    fn complete(composer: &mut Composer) -> JournalEntry {
        let n = composer.affirmation_count();
        for prefix in ["just", "refl1", "refl2"] {
            for i in 0..n {
                commit(composer, &format!("{prefix} {i}"));
            }
        }
        assert_eq!(composer.stage_kind(), StageKind::Submitting);
        composer.finalize(&PlanBadgeResolver).unwrap()
    }

    #[test]
    fn affirmations_are_trimmed_and_empty_rejected() {
        let mut composer = Composer::new(connector_plan());
        composer.set_draft("  curajos  ");
        composer.add_affirmation().unwrap();
        assert_eq!(composer.thoughts()[0].affirmation, "curajos");

        composer.set_draft("   ");
        assert_eq!(composer.add_affirmation(), Err(ComposerError::EmptyInput));
        assert_eq!(composer.affirmation_count(), 1);
    }

    #[test]
    fn adding_past_max_is_a_no_op() {
        let mut composer = Composer::new(connector_plan());
        for i in 0..MAX_AFFIRMATIONS {
            add(&mut composer, &format!("gând {i}"));
        }
        composer.set_draft("unul în plus");
        assert_eq!(
            composer.add_affirmation(),
            Err(ComposerError::AffirmationLimit {
                max: MAX_AFFIRMATIONS
            })
        );
        assert_eq!(composer.affirmation_count(), MAX_AFFIRMATIONS);
    }

    #[test]
    fn advancing_below_min_is_rejected_without_mutation() {
        let mut composer = Composer::new(connector_plan());
        for i in 0..MIN_AFFIRMATIONS - 1 {
            add(&mut composer, &format!("gând {i}"));
        }
        let before = composer.thoughts().to_vec();
        assert_eq!(
            composer.begin_justifying(),
            Err(ComposerError::TooFewAffirmations {
                have: MIN_AFFIRMATIONS - 1,
                min: MIN_AFFIRMATIONS,
            })
        );
        assert_eq!(composer.stage_kind(), StageKind::Collecting);
        assert_eq!(composer.thoughts(), before.as_slice());
    }

    #[test]
    fn connectors_default_to_the_plans_first() {
        let composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        assert!(composer
            .thoughts()
            .iter()
            .all(|t| t.connector.as_deref() == Some("datorită")));

        let composer = collected(two_prompt_plan(), MIN_AFFIRMATIONS);
        assert!(composer.thoughts().iter().all(|t| t.connector.is_none()));
    }

    #[test]
    fn connector_override_is_per_index_and_validated() {
        let mut composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        composer.select_connector("din cauza").unwrap();
        assert_eq!(
            composer.select_connector("pentru"),
            Err(ComposerError::UnknownConnector {
                value: "pentru".to_string()
            })
        );
        commit(&mut composer, "ajutorul primit");
        // Only index 0 was overridden.
        assert_eq!(composer.thoughts()[0].connector.as_deref(), Some("din cauza"));
        assert_eq!(composer.thoughts()[1].connector.as_deref(), Some("datorită"));

        let mut composer = collected(two_prompt_plan(), MIN_AFFIRMATIONS);
        assert_eq!(
            composer.select_connector("datorită"),
            Err(ComposerError::NoConnectors)
        );
    }

    #[test]
    fn empty_input_never_mutates_sequential_state() {
        let mut composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        for _ in 0..3 {
            let before = composer.clone();
            composer.set_draft("  \t ");
            assert_eq!(composer.commit_step(), Err(ComposerError::EmptyInput));
            composer.set_draft(String::new());
            let mut expected = before;
            expected.set_draft(String::new());
            assert_eq!(composer, expected);
            composer.set_draft("valid");
            composer.commit_step().unwrap();
        }
    }

    #[test]
    fn full_flow_produces_index_correlated_pairs() {
        let mut composer = collected(two_prompt_plan(), 9);
        let entry = complete(&mut composer);
        assert_eq!(entry.thought_pairs.len(), 9);
        for (i, pair) in entry.thought_pairs.iter().enumerate() {
            assert_eq!(pair.part1, format!("gând {i}"));
            assert_eq!(pair.part2, format!("just {i}"));
            assert_eq!(pair.reflection1, format!("refl1 {i}"));
            assert_eq!(pair.reflection2, format!("refl2 {i}"));
            assert_eq!(pair.connector, None);
        }
        assert_eq!(entry.badge_name, Badge::RecunostintaMama);
        assert_eq!(composer.stage_kind(), StageKind::Completed);
    }

    #[test]
    fn seven_affirmations_default_connector_everywhere() {
        // Plan with connectors ["datorită", "din cauza"], 7 affirmations,
        // connector left at default, every answer "x".
        let mut composer = collected(connector_plan(), 7);
        for _ in 0..21 {
            commit(&mut composer, "x");
        }
        let entry = composer.finalize(&PlanBadgeResolver).unwrap();
        assert_eq!(entry.thought_pairs.len(), 7);
        for pair in &entry.thought_pairs {
            assert_eq!(pair.connector.as_deref(), Some("datorită"));
            assert_eq!(pair.part2, "x");
        }
    }

    #[test]
    fn back_within_a_stage_repopulates_the_previous_answer() {
        let mut composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        commit(&mut composer, "primul răspuns");
        assert_eq!(composer.stage(), Stage::Justifying { index: 1 });
        composer.back().unwrap();
        assert_eq!(composer.stage(), Stage::Justifying { index: 0 });
        assert_eq!(composer.draft(), "primul răspuns");

        // Edit and recommit: the record is replaced verbatim.
        commit(&mut composer, "răspuns corectat");
        assert_eq!(
            composer.thoughts()[0].justification.as_deref(),
            Some("răspuns corectat")
        );
    }

    #[test]
    fn back_at_index_zero_lands_on_previous_stage_last_item() {
        let n = MIN_AFFIRMATIONS;
        let mut composer = collected(two_prompt_plan(), n);
        for i in 0..n {
            commit(&mut composer, &format!("just {i}"));
        }
        assert_eq!(composer.stage(), Stage::Reflecting1 { index: 0 });

        composer.back().unwrap();
        assert_eq!(composer.stage(), Stage::Justifying { index: n - 1 });
        assert_eq!(composer.draft(), format!("just {}", n - 1));

        // The round-trip preserves the recorded value verbatim.
        composer.commit_step().unwrap();
        assert_eq!(composer.stage(), Stage::Reflecting1 { index: 0 });
        assert_eq!(
            composer.thoughts()[n - 1].justification.as_deref(),
            Some(format!("just {}", n - 1).as_str())
        );
    }

    #[test]
    fn back_from_justifying_start_returns_to_collecting() {
        let mut composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        composer.back().unwrap();
        assert_eq!(composer.stage_kind(), StageKind::Collecting);
        assert_eq!(composer.draft(), "");
        assert_eq!(composer.affirmation_count(), MIN_AFFIRMATIONS);
    }

    #[test]
    fn back_from_collecting_cancels() {
        let mut composer = Composer::new(connector_plan());
        let event = composer.back().unwrap();
        assert!(matches!(event, Event::ComposerCancelled { .. }));
        assert_eq!(composer.stage_kind(), StageKind::Cancelled);
        assert!(composer.back().is_err());
    }

    #[test]
    fn reentering_justifying_resets_answers_and_connectors() {
        let mut composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        composer.select_connector("din cauza").unwrap();
        commit(&mut composer, "un răspuns");
        composer.back().unwrap();
        composer.back().unwrap();
        assert_eq!(composer.stage_kind(), StageKind::Collecting);

        add(&mut composer, "gând nou");
        composer.begin_justifying().unwrap();
        assert_eq!(composer.affirmation_count(), MIN_AFFIRMATIONS + 1);
        assert!(composer.thoughts().iter().all(|t| {
            t.justification.is_none() && t.connector.as_deref() == Some("datorită")
        }));
    }

    #[test]
    fn failed_resolution_keeps_the_session_for_retry() {
        struct FailingResolver;
        impl BadgeResolver for FailingResolver {
            fn resolve(
                &self,
                _plan_badge: Badge,
            ) -> Result<Badge, Box<dyn std::error::Error + Send + Sync>> {
                Err("resolver offline".into())
            }
        }

        let mut composer = collected(connector_plan(), 7);
        for _ in 0..21 {
            commit(&mut composer, "x");
        }
        let err = composer.finalize(&FailingResolver).unwrap_err();
        assert!(matches!(err, ComposerError::BadgeResolution(_)));
        assert_eq!(composer.stage_kind(), StageKind::Submitting);
        assert_eq!(composer.affirmation_count(), 7);

        // Retry with a working resolver succeeds without retyping.
        let entry = composer.finalize(&PlanBadgeResolver).unwrap();
        assert_eq!(entry.thought_pairs.len(), 7);
    }

    #[test]
    fn finalize_outside_submitting_is_rejected() {
        let mut composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        assert!(matches!(
            composer.finalize(&PlanBadgeResolver),
            Err(ComposerError::WrongStage { .. })
        ));
    }

    #[test]
    fn preview_renders_connector_and_two_prompt_layouts() {
        let mut composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        assert_eq!(
            composer.thought_preview().unwrap(),
            "Eu sunt... \"gând 0\""
        );
        for i in 0..MIN_AFFIRMATIONS {
            commit(&mut composer, &format!("just {i}"));
        }
        assert_eq!(
            composer.thought_preview().unwrap(),
            "Eu sunt... \"gând 0\" datorită just 0."
        );

        let mut composer = collected(two_prompt_plan(), MIN_AFFIRMATIONS);
        for i in 0..MIN_AFFIRMATIONS {
            commit(&mut composer, &format!("just {i}"));
        }
        assert_eq!(
            composer.thought_preview().unwrap(),
            "Mama mă ajută să... \"gând 0\". Fără mama aș fi... \"just 0\"."
        );
    }

    #[test]
    fn session_serializes_and_resumes() {
        let mut composer = collected(connector_plan(), MIN_AFFIRMATIONS);
        commit(&mut composer, "just 0");
        composer.set_draft("în lucru");

        let json = serde_json::to_string(&composer).unwrap();
        let mut resumed: Composer = serde_json::from_str(&json).unwrap();
        assert_eq!(resumed, composer);

        commit(&mut resumed, "just 1");
        assert_eq!(resumed.stage(), Stage::Justifying { index: 2 });
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Completing the flow with any valid N yields exactly N
            /// correlated thought pairs.
            #[test]
            fn any_valid_count_completes(n in MIN_AFFIRMATIONS..=MAX_AFFIRMATIONS) {
                let mut composer = collected(connector_plan(), n);
                let entry = complete(&mut composer);
                prop_assert_eq!(entry.thought_pairs.len(), n);
                for (i, pair) in entry.thought_pairs.iter().enumerate() {
                    prop_assert_eq!(&pair.part1, &format!("gând {i}"));
                    prop_assert_eq!(&pair.part2, &format!("just {i}"));
                    prop_assert_eq!(&pair.reflection1, &format!("refl1 {i}"));
                    prop_assert_eq!(&pair.reflection2, &format!("refl2 {i}"));
                }
            }

            /// Whitespace-only input is rejected at every sequential step
            /// without mutating the records.
            #[test]
            fn blank_input_is_always_rejected(
                n in MIN_AFFIRMATIONS..=MAX_AFFIRMATIONS,
                blank in "[ \\t]{0,4}",
            ) {
                let mut composer = collected(connector_plan(), n);
                for step in 0..3 * n {
                    let before = composer.thoughts().to_vec();
                    composer.set_draft(blank.clone());
                    prop_assert_eq!(
                        composer.commit_step(),
                        Err(ComposerError::EmptyInput)
                    );
                    prop_assert_eq!(composer.thoughts(), before.as_slice());
                    composer.set_draft(format!("răspuns {step}"));
                    composer.commit_step().unwrap();
                }
                prop_assert_eq!(composer.stage_kind(), StageKind::Submitting);
            }
        }
    }
}
