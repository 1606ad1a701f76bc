//! The guided entry composer, driven one command at a time.
//!
//! The in-flight session is parked in the store between invocations and
//! removed once the entry is saved or the session is cancelled.

use chrono::Utc;
use clap::Subcommand;
use eusunt_core::storage::Store;
use eusunt_core::{plan_by_id, Composer, Event, PlanBadgeResolver, StageKind, MIN_AFFIRMATIONS};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Start a new guided entry for a plan
    Start {
        /// Plan id (see `plan list`)
        plan_id: u32,
    },
    /// Add an affirmation (collecting stage)
    Add { text: String },
    /// Leave the collecting stage and start the per-thought steps
    Continue,
    /// Answer the current step; the last answer submits the entry
    Next {
        text: String,
        /// Connector override for the current thought (connector plans)
        #[arg(long)]
        connector: Option<String>,
    },
    /// Go back one step (from the collecting stage this cancels)
    Back,
    /// Print the session state
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Discard the in-flight session
    Cancel,
}

fn load_session(store: &Store) -> Result<Composer, Box<dyn std::error::Error>> {
    store.composer_session().ok_or_else(|| {
        "no journal session in progress (run `eusunt-cli journal start <plan-id>`)".into()
    })
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

/// Where the session stands and what to type next.
fn print_guidance(composer: &Composer) {
    match composer.stage_kind() {
        StageKind::Collecting => {
            println!(
                "Gândurile tale: {}/{} (minim {MIN_AFFIRMATIONS}).",
                composer.affirmation_count(),
                eusunt_core::MAX_AFFIRMATIONS
            );
            for thought in composer.thoughts() {
                println!("  - {}", thought.affirmation);
            }
            if composer.remaining_to_min() > 0 {
                println!(
                    "Mai adaugă {} gânduri pentru a continua.",
                    composer.remaining_to_min()
                );
            } else {
                println!("Poți continua cu `journal continue`.");
            }
        }
        StageKind::Justifying | StageKind::Reflecting1 | StageKind::Reflecting2 => {
            if let (Some((position, total)), Some(prompt)) =
                (composer.step_position(), composer.step_prompt())
            {
                if let Some(preview) = composer.thought_preview() {
                    println!("{preview}");
                }
                if composer.stage_kind() == StageKind::Justifying
                    && composer.plan().has_connectors()
                {
                    println!(
                        "Cuvinte de legătură: {} (implicit: {})",
                        composer.plan().connectors.join(", "),
                        composer.plan().default_connector().unwrap_or_default()
                    );
                }
                println!("({position}/{total}) {prompt}");
                if !composer.draft().is_empty() {
                    println!("Răspunsul anterior: {}", composer.draft());
                }
            }
        }
        StageKind::Submitting => {
            println!("Totul este completat; ultimul `journal next` salvează jurnalul.")
        }
        _ => {}
    }
}

fn finalize_and_save(
    store: &Store,
    composer: &mut Composer,
) -> Result<Event, Box<dyn std::error::Error>> {
    let plan_id = composer.plan().id;
    let entry = composer.finalize(&PlanBadgeResolver)?;
    store.save_entry(&entry)?;
    Ok(Event::EntryCompleted {
        entry_id: entry.id,
        plan_id,
        badge: entry.badge_name,
        thought_count: entry.thought_pairs.len(),
        at: Utc::now(),
    })
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        JournalAction::Start { plan_id } => {
            if store.composer_session().is_some() {
                return Err(
                    "a journal session is already in progress (see `journal status`, or run `journal cancel`)"
                        .into(),
                );
            }
            let plan = plan_by_id(plan_id).ok_or_else(|| format!("unknown plan id: {plan_id}"))?;
            let composer = Composer::new(plan);
            store.save_composer_session(&composer)?;
            println!("{}", composer.plan().title);
            println!("{}", composer.plan().prompt1);
            print_guidance(&composer);
        }
        JournalAction::Add { text } => {
            let mut composer = load_session(&store)?;
            composer.set_draft(text);
            let event = composer.add_affirmation()?;
            store.save_composer_session(&composer)?;
            print_event(&event)?;
            print_guidance(&composer);
        }
        JournalAction::Continue => {
            let mut composer = load_session(&store)?;
            let event = composer.begin_justifying()?;
            store.save_composer_session(&composer)?;
            print_event(&event)?;
            print_guidance(&composer);
        }
        JournalAction::Next { text, connector } => {
            let mut composer = load_session(&store)?;
            if let Some(connector) = &connector {
                composer.select_connector(connector)?;
            }
            composer.set_draft(text);
            let event = composer.commit_step()?;
            if composer.stage_kind() == StageKind::Submitting {
                // Keep the pre-submission state around: a failed badge
                // resolution or save must stay retryable.
                let checkpoint = composer.clone();
                match finalize_and_save(&store, &mut composer) {
                    Ok(completed) => {
                        store.clear_composer_session()?;
                        print_event(&completed)?;
                        println!("Jurnalul a fost salvat. Vezi `entries list`.");
                    }
                    Err(e) => {
                        store.save_composer_session(&checkpoint)?;
                        return Err(e);
                    }
                }
            } else {
                store.save_composer_session(&composer)?;
                print_event(&event)?;
                print_guidance(&composer);
            }
        }
        JournalAction::Back => {
            let mut composer = load_session(&store)?;
            let event = composer.back()?;
            if composer.stage_kind() == StageKind::Cancelled {
                store.clear_composer_session()?;
                print_event(&event)?;
            } else {
                store.save_composer_session(&composer)?;
                print_event(&event)?;
                print_guidance(&composer);
            }
        }
        JournalAction::Status { json } => {
            let composer = load_session(&store)?;
            if json {
                print_event(&composer.snapshot())?;
            } else {
                println!("Plan: {}", composer.plan().title);
                println!("Etapă: {:?}", composer.stage_kind());
                print_guidance(&composer);
            }
        }
        JournalAction::Cancel => {
            if store.composer_session().is_none() {
                println!("no journal session in progress");
            } else {
                store.clear_composer_session()?;
                println!("session discarded");
            }
        }
    }
    Ok(())
}
