//! Mood calendar: a Monday-first month grid of recorded moods.

use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;
use eusunt_core::storage::Store;
use eusunt_core::Mood;

#[derive(Subcommand)]
pub enum MoodAction {
    /// Render one month as a grid
    Calendar {
        /// Month to show, YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// All recorded moods
    List {
        #[arg(long)]
        json: bool,
    },
}

const MONTH_NAMES: [&str; 12] = [
    "ianuarie",
    "februarie",
    "martie",
    "aprilie",
    "mai",
    "iunie",
    "iulie",
    "august",
    "septembrie",
    "octombrie",
    "noiembrie",
    "decembrie",
];

fn parse_month(input: &str) -> Result<(i32, u32), Box<dyn std::error::Error>> {
    let (year, month) = input
        .split_once('-')
        .ok_or_else(|| format!("invalid month '{input}', expected YYYY-MM"))?;
    let year: i32 = year.parse()?;
    let month: u32 = month.parse()?;
    if !(1..=12).contains(&month) {
        return Err(format!("invalid month '{input}', expected YYYY-MM").into());
    }
    Ok((year, month))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map_or(30, |d| d.day())
}

fn render_calendar(year: i32, month: u32, moods: &HashMap<NaiveDate, Mood>) {
    println!("{} {}", MONTH_NAMES[(month - 1) as usize], year);
    println!("   L    Ma    Mi     J     V     S     D");

    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return,
    };
    let offset = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec!["      ".to_string(); offset];
    for day in 1..=days_in_month(year, month) {
        let date = NaiveDate::from_ymd_opt(year, month, day);
        let emoji = date
            .and_then(|d| moods.get(&d))
            .map(|m| m.info().emoji)
            .unwrap_or("  ");
        cells.push(format!("{day:>3} {emoji}"));
    }
    for week in cells.chunks(7) {
        println!("{}", week.join(" "));
    }

    println!();
    for mood in Mood::ALL {
        print!("{} {}  ", mood.info().emoji, mood.name());
    }
    println!();
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let entries = store.moods();

    match action {
        MoodAction::Calendar { month } => {
            let (year, month) = match month {
                Some(input) => parse_month(&input)?,
                None => {
                    let today = Local::now().date_naive();
                    (today.year(), today.month())
                }
            };
            // Later records win, mirroring one-expected-per-date data.
            let by_date: HashMap<NaiveDate, Mood> =
                entries.iter().map(|e| (e.date, e.mood)).collect();
            render_calendar(year, month, &by_date);
        }
        MoodAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in &entries {
                    println!(
                        "{}  {} {}",
                        entry.date,
                        entry.mood.info().emoji,
                        entry.mood.name()
                    );
                }
            }
        }
    }
    Ok(())
}
