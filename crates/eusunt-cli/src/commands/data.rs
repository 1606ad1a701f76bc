use clap::Subcommand;
use eusunt_core::storage::Store;
use eusunt_core::DataResetOptions;

#[derive(Subcommand)]
pub enum DataAction {
    /// Permanently delete stored collections
    Reset {
        /// Delete saved journal entries
        #[arg(long)]
        entries: bool,
        /// Delete collected badges
        #[arg(long)]
        badges: bool,
        /// Delete recorded moods
        #[arg(long)]
        moods: bool,
        /// Delete daily-thought answers
        #[arg(long)]
        thoughts: bool,
        /// Clear the streak
        #[arg(long)]
        streak: bool,
        /// Clear avatar and theme customization
        #[arg(long)]
        profile: bool,
        /// Delete everything
        #[arg(long)]
        all: bool,
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DataAction::Reset {
            entries,
            badges,
            moods,
            thoughts,
            streak,
            profile,
            all,
            yes,
        } => {
            let options = if all {
                DataResetOptions::everything()
            } else {
                DataResetOptions {
                    entries,
                    badges,
                    moods,
                    daily_thoughts: thoughts,
                    streak,
                    profile,
                }
            };
            if options == DataResetOptions::default() {
                return Err("nothing selected; pass --all or one of the collection flags".into());
            }
            if !yes {
                return Err("data reset is irreversible; re-run with --yes to confirm".into());
            }
            let store = Store::open()?;
            let summary = store.reset(options)?;
            println!(
                "deleted: {} entries, {} badges, {} moods, {} thoughts{}{}",
                summary.deleted_entries,
                summary.deleted_badges,
                summary.deleted_moods,
                summary.deleted_thoughts,
                if summary.streak_cleared {
                    ", streak cleared"
                } else {
                    ""
                },
                if summary.profile_cleared {
                    ", profile cleared"
                } else {
                    ""
                },
            );
        }
    }
    Ok(())
}
