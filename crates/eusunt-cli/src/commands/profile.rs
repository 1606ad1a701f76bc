use std::path::PathBuf;

use clap::Subcommand;
use eusunt_core::profile::{avatar_items, select_theme, themes, AvatarPart, ColorSlot};
use eusunt_core::storage::Store;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Current avatar and theme
    Show {
        #[arg(long)]
        json: bool,
    },
    /// List avatar items with their unlock status
    Items {
        /// Filter by slot: base, hair, eyes, mouth, top, accessory
        #[arg(long)]
        part: Option<String>,
    },
    /// Equip an avatar item
    SetPart { item_id: String },
    /// Pick a palette color: <slot> <hex>, slot one of base, hair, top
    SetColor { slot: String, color: String },
    /// Render the avatar as an SVG file
    Render {
        #[arg(long, default_value = "avatar.svg")]
        out: PathBuf,
    },
    /// List journal themes with their unlock status
    Themes,
    /// Activate a journal theme
    SetTheme { id: String },
}

fn parse_part(input: &str) -> Result<AvatarPart, Box<dyn std::error::Error>> {
    serde_json::from_value(serde_json::Value::String(input.to_string()))
        .map_err(|_| format!("unknown avatar slot: '{input}'").into())
}

fn parse_slot(input: &str) -> Result<ColorSlot, Box<dyn std::error::Error>> {
    serde_json::from_value(serde_json::Value::String(input.to_string()))
        .map_err(|_| format!("unknown color slot: '{input}' (base, hair, top)").into())
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let collected = store.badges();

    match action {
        ProfileAction::Show { json } => {
            let avatar = store.avatar();
            let theme_id = store.theme_id();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "avatar": avatar,
                        "theme": theme_id,
                    }))?
                );
            } else {
                println!("Temă: {theme_id}");
                for (part, item_id) in &avatar.parts {
                    println!("{:<10} {item_id}", part.label());
                }
            }
        }
        ProfileAction::Items { part } => {
            let filter = part.map(|p| parse_part(&p)).transpose()?;
            for item in avatar_items() {
                if let Some(part) = filter {
                    if item.part != part {
                        continue;
                    }
                }
                let status = match item.unlocked_by {
                    Some(badge) if !collected.contains(&badge) => {
                        format!("blocat -- insigna: {badge}")
                    }
                    _ => "disponibil".to_string(),
                };
                println!(
                    "{:<18} {:<10} {:<18} {status}",
                    item.id,
                    item.part.label(),
                    item.name
                );
            }
        }
        ProfileAction::SetPart { item_id } => {
            let mut avatar = store.avatar();
            avatar.set_part(&item_id, &collected)?;
            store.save_avatar(&avatar)?;
            println!("equipped {item_id}");
        }
        ProfileAction::SetColor { slot, color } => {
            let slot = parse_slot(&slot)?;
            let mut avatar = store.avatar();
            avatar.set_color(slot, &color)?;
            store.save_avatar(&avatar)?;
            println!("color set");
        }
        ProfileAction::Render { out } => {
            let avatar = store.avatar();
            std::fs::write(&out, avatar.to_svg())?;
            println!("wrote {}", out.display());
        }
        ProfileAction::Themes => {
            let active = store.theme_id();
            for theme in themes() {
                let marker = if theme.id == active { "*" } else { " " };
                let status = match theme.unlocked_by {
                    Some(badge) if !collected.contains(&badge) => {
                        format!("blocată -- insigna: {badge}")
                    }
                    _ => "disponibilă".to_string(),
                };
                println!("{marker} {:<10} {:<18} {status}", theme.id, theme.name);
            }
        }
        ProfileAction::SetTheme { id } => {
            let theme = select_theme(&id, &collected)?;
            store.save_theme_id(theme.id)?;
            println!("theme set to {}", theme.name);
        }
    }
    Ok(())
}
