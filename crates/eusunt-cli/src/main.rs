use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "eusunt-cli", version, about = "Eu Sunt journaling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Journaling plan catalog
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Guided journal entry composer
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Daily mood and thought check-in
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Saved journal entries
    Entries {
        #[command(subcommand)]
        action: commands::entries::EntriesAction,
    },
    /// Badge gallery
    Badges {
        #[command(subcommand)]
        action: commands::badges::BadgesAction,
    },
    /// Mood calendar
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Avatar and journal theme customization
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Export entries as text or PDF
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Stored data management
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Checkin { action } => commands::checkin::run(action),
        Commands::Entries { action } => commands::entries::run(action),
        Commands::Badges { action } => commands::badges::run(action),
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Export { action } => commands::export::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "eusunt-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
