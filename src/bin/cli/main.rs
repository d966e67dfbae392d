mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gnosis", about = "Problem-bank study dashboard", version)]
struct Cli {
    /// Use a specific problems folder (default: from config)
    #[arg(long, global = true)]
    vault: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config and scaffold the subject folders
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// List configured subjects with their problem counts
    Subjects,

    /// Render a chapter's mastery grid
    Grid {
        /// Subject name (case-insensitive prefix match)
        subject: String,
        /// Chapter number
        chapter: u32,
        /// Override the configured grid capacity
        #[arg(long)]
        capacity: Option<u32>,
    },

    /// Subject-wide progress summary
    Stats {
        /// Subject name (case-insensitive prefix match)
        subject: String,
    },

    /// Today's goal standing and target-date countdown
    Today,

    /// Create a problem note
    New {
        subject: String,
        chapter: u32,
        /// Slot number within the chapter
        number: u32,
        /// Title (defaults to "Problem <number>")
        title: Option<String>,
        /// Difficulty 1-5
        #[arg(long, default_value_t = 3)]
        difficulty: u8,
    },

    /// Create every missing slot in a number range
    Bulk {
        subject: String,
        chapter: u32,
        start: u32,
        end: u32,
    },

    /// Record a self-rated understanding score (0-100)
    Record {
        subject: String,
        chapter: u32,
        number: u32,
        score: u32,
        /// Solve duration as HH:MM:SS
        #[arg(long)]
        time: Option<String>,
    },

    /// Check off the next review step of a problem
    Check {
        subject: String,
        chapter: u32,
        number: u32,
    },

    /// Show one problem's details
    Show {
        subject: String,
        chapter: u32,
        number: u32,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    match cli.command {
        Command::Init { force } => {
            commands::init::run(cli.vault.as_deref(), force)?;
        }
        Command::Subjects => {
            let app = app::App::new(cli.vault.clone())?;
            commands::subjects::run(&app, &cli.format)?;
        }
        Command::Grid { subject, chapter, capacity } => {
            let app = app::App::new(cli.vault.clone())?;
            commands::grid::run(&app, &subject, chapter, capacity, &cli.format, use_color)?;
        }
        Command::Stats { subject } => {
            let app = app::App::new(cli.vault.clone())?;
            commands::stats::run(&app, &subject, &cli.format)?;
        }
        Command::Today => {
            let app = app::App::new(cli.vault.clone())?;
            commands::today::run(&app, &cli.format)?;
        }
        Command::New { subject, chapter, number, title, difficulty } => {
            let app = app::App::new(cli.vault.clone())?;
            commands::new::run(&app, &subject, chapter, number, title.as_deref(), difficulty)?;
        }
        Command::Bulk { subject, chapter, start, end } => {
            let app = app::App::new(cli.vault.clone())?;
            commands::bulk::run(&app, &subject, chapter, start, end)?;
        }
        Command::Record { subject, chapter, number, score, time } => {
            let app = app::App::new(cli.vault.clone())?;
            commands::record::run(&app, &subject, chapter, number, score, time.as_deref())?;
        }
        Command::Check { subject, chapter, number } => {
            let app = app::App::new(cli.vault.clone())?;
            commands::check::run(&app, &subject, chapter, number)?;
        }
        Command::Show { subject, chapter, number } => {
            let app = app::App::new(cli.vault.clone())?;
            commands::show::run(&app, &subject, chapter, number, &cli.format)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
