use clap::Subcommand;
use eusunt_core::export::{format_entry, format_journal};
use eusunt_core::storage::Store;

#[derive(Subcommand)]
pub enum EntriesAction {
    /// List saved entries, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one entry in full
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Print an entry (or the whole journal) as share text
    Share {
        /// Entry id; omit for the whole journal
        id: Option<String>,
    },
}

pub fn run(action: EntriesAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let entries = store.entries();

    match action {
        EntriesAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("Jurnalul tău este gol. Alege un plan cu `plan list`.");
            } else {
                for entry in entries.iter().rev() {
                    println!(
                        "{}  {}  {} ({} gânduri)  {} {}",
                        entry.id,
                        entry.timestamp,
                        entry.plan_title,
                        entry.thought_pairs.len(),
                        entry.badge_name.info().icon,
                        entry.badge_name,
                    );
                }
            }
        }
        EntriesAction::Show { id, json } => {
            let entry = entries
                .iter()
                .find(|e| e.id == id)
                .ok_or_else(|| format!("no journal entry with id '{id}'"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(entry)?);
            } else {
                println!("{}", format_entry(entry));
            }
        }
        EntriesAction::Share { id } => match id {
            Some(id) => {
                let entry = entries
                    .iter()
                    .find(|e| e.id == id)
                    .ok_or_else(|| format!("no journal entry with id '{id}'"))?;
                println!("{}", format_entry(entry));
            }
            None => {
                if entries.is_empty() {
                    return Err("Jurnalul tău este gol".into());
                }
                println!("{}", format_journal(&entries));
            }
        },
    }
    Ok(())
}
