use std::path::PathBuf;

use clap::Subcommand;
use eusunt_core::export::{export_all_to_pdf, export_entry_to_pdf, format_entry, format_journal};
use eusunt_core::storage::{Config, Store};
use eusunt_core::JournalEntry;

#[derive(Subcommand)]
pub enum ExportAction {
    /// Write share text to a file (or stdout)
    Text {
        /// Entry id; omit for the whole journal
        #[arg(long)]
        entry: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a paginated A4 PDF
    Pdf {
        /// Entry id; omit for the whole journal
        #[arg(long)]
        entry: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn find_entry<'a>(
    entries: &'a [JournalEntry],
    id: &str,
) -> Result<&'a JournalEntry, Box<dyn std::error::Error>> {
    entries
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| format!("no journal entry with id '{id}'").into())
}

/// Default output path from the export config: prefix plus the entry's
/// display date, or "Complet" for the whole journal.
fn default_path(config: &Config, suffix: &str, extension: &str) -> PathBuf {
    let dir = if config.export.directory.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.export.directory)
    };
    dir.join(format!(
        "{}-{}.{}",
        config.export.file_prefix, suffix, extension
    ))
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let config = Config::load_or_default();
    let entries = store.entries();

    match action {
        ExportAction::Text { entry, out } => {
            let text = match &entry {
                Some(id) => format_entry(find_entry(&entries, id)?),
                None => {
                    if entries.is_empty() {
                        return Err("Jurnalul tău este gol".into());
                    }
                    format_journal(&entries)
                }
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    println!("wrote {}", path.display());
                }
                None => println!("{text}"),
            }
        }
        ExportAction::Pdf { entry, out } => {
            let path = match (&entry, out) {
                (_, Some(path)) => path,
                (Some(id), None) => {
                    let found = find_entry(&entries, id)?;
                    default_path(&config, &found.timestamp, "pdf")
                }
                (None, None) => default_path(&config, "Complet", "pdf"),
            };
            match &entry {
                Some(id) => export_entry_to_pdf(find_entry(&entries, id)?, &path)?,
                None => export_all_to_pdf(&entries, &path)?,
            }
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
