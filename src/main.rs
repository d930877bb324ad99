use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rolodex::config::{paths::RolodexPaths, settings::Settings};
use rolodex::export::{export_contacts_csv, export_full_json};
use rolodex::storage::BookRepository;

#[derive(Parser)]
#[command(
    name = "rolodex",
    version,
    about = "Command-line contact manager with birthday reminders",
    long_about = "rolodex is a command-line contact manager. It stores names, \
                  phone numbers, and birthdays, reports birthdays coming up in \
                  the next week, and keeps everything in a local JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive assistant (default)
    Repl,

    /// Show current configuration and paths
    Config,

    /// Export the address book
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Destination file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
}

fn main() -> Result<()> {
    // Log to stderr so the assistant's stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = RolodexPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let repo = BookRepository::new(paths.contacts_file());
    let mut book = repo
        .load()
        .with_context(|| format!("failed to load {}", repo.path().display()))?;

    match cli.command {
        None | Some(Commands::Repl) => {
            rolodex::repl::run(&mut book, &repo, &settings)?;
        }

        Some(Commands::Config) => {
            println!("rolodex configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.contacts_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Upcoming window (days): {}", settings.upcoming_window_days);
            println!();
            println!("Contacts stored: {}", book.len());
        }

        Some(Commands::Export { format, output }) => {
            let mut writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?,
                ),
                None => Box::new(io::stdout().lock()),
            };

            match format {
                ExportFormat::Json => export_full_json(&book, &mut writer)?,
                ExportFormat::Csv => export_contacts_csv(&book, &mut writer)?,
            }

            if let Some(path) = output {
                eprintln!("Exported {} contacts to {}", book.len(), path.display());
            }
        }
    }

    Ok(())
}
