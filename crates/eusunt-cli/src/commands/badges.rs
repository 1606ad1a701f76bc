use clap::Subcommand;
use eusunt_core::storage::Store;
use eusunt_core::Badge;

#[derive(Subcommand)]
pub enum BadgesAction {
    /// The badge gallery with collected status
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: BadgesAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let collected = store.badges();

    match action {
        BadgesAction::List { json } => {
            if json {
                let gallery: Vec<serde_json::Value> = Badge::ALL
                    .iter()
                    .map(|badge| {
                        serde_json::json!({
                            "name": badge.name(),
                            "icon": badge.info().icon,
                            "description": badge.info().description,
                            "collected": collected.contains(badge),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&gallery)?);
            } else {
                println!(
                    "Insigne colectate: {}/{}",
                    collected.len(),
                    Badge::ALL.len()
                );
                for badge in Badge::ALL {
                    let info = badge.info();
                    let marker = if collected.contains(&badge) {
                        info.icon
                    } else {
                        "🔒"
                    };
                    println!("{marker}  {badge} -- {}", info.description);
                }
            }
        }
    }
    Ok(())
}
