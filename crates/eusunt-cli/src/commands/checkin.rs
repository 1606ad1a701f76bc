use chrono::{Local, Utc};
use clap::Subcommand;
use eusunt_core::storage::Store;
use eusunt_core::{check_in, daily_prompt, Event, Mood};

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Record today's check-in (once per day)
    Record {
        /// One of: fericit, liniștit, îngrijorat, trist, entuziasmat
        mood: String,
        /// Answer to today's prompt
        answer: String,
    },
    /// Current streak and whether today's check-in is still open
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Print today's prompt
    Prompt,
}

pub fn run(action: CheckinAction) -> Result<(), Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();

    match action {
        CheckinAction::Record { mood, answer } => {
            let store = Store::open()?;
            let mood: Mood = mood.parse()?;
            let collected_before = store.badges();
            let outcome = check_in(&store.streak(), today, mood, &answer)?;
            store.record_checkin(&outcome)?;
            let event = Event::CheckinRecorded {
                date: outcome.mood.date,
                mood: outcome.mood.mood,
                streak: outcome.streak.current_streak,
                awarded: outcome.awarded.clone(),
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
            for badge in outcome
                .awarded
                .iter()
                .filter(|b| !collected_before.contains(b))
            {
                let awarded = Event::BadgeAwarded {
                    badge: *badge,
                    at: Utc::now(),
                };
                println!("{}", serde_json::to_string_pretty(&awarded)?);
                println!("Insignă nouă: {} {}", badge.info().icon, badge);
            }
        }
        CheckinAction::Status { json } => {
            let store = Store::open()?;
            let streak = store.streak();
            if json {
                println!("{}", serde_json::to_string_pretty(&streak)?);
            } else {
                println!("Serie curentă: {} zile", streak.current_streak);
                if streak.needs_checkin(today) {
                    println!("Nu te-ai înregistrat azi. Gândul zilei:");
                    println!("  {}", daily_prompt(today));
                } else {
                    println!("Te-ai înregistrat deja azi. Pe mâine!");
                }
            }
        }
        CheckinAction::Prompt => {
            println!("{}", daily_prompt(today));
        }
    }
    Ok(())
}
