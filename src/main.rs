use anyhow::Result;
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use examcal::client::BackendClient;
use examcal::commands;
use examcal::config;

#[derive(Parser)]
#[command(name = "examcal")]
#[command(about = "Browse government exam schedules from an exam-listing backend")]
struct Cli {
    /// Conducting-body filter (e.g. "UPSC"), overriding the config default
    #[arg(short, long, global = true)]
    category: Option<String>,

    /// Show debug logging (per-bucket fetch detail)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the calendar for one month (current month by default)
    Month {
        /// Year to show (e.g. 2026)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show (1-12)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Show exams in an arbitrary date window
    Events {
        /// Window start (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Window end, exclusive (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },
    /// List exams coming up soon
    Upcoming {
        /// How many days ahead to look
        #[arg(short, long, default_value_t = commands::DEFAULT_UPCOMING_DAYS)]
        days: u32,
    },
    /// Search exams by name
    Search {
        query: String,

        /// How many days ahead to look
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Show the full detail card for one exam
    Show {
        /// Exam id as reported by the backend
        id: i64,

        /// Year of the exam's month (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month of the exam (1-12, defaults to the current month)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Show backend exam statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let cfg = config::load_config()?;
    let client = BackendClient::new(&cfg.server_url);

    // Filter read once per invocation; the flag wins over the config default.
    let category = cli.category.or(cfg.default_category);
    let category = category.as_deref().filter(|c| !c.is_empty());

    match cli.command {
        Commands::Month { year, month } => {
            commands::month::run(&client, year, month, category).await
        }
        Commands::Events { from, to } => {
            commands::events::run(&client, &from, &to, category).await
        }
        Commands::Upcoming { days } => commands::upcoming::run(&client, days, category).await,
        Commands::Search { query, days } => {
            commands::search::run(&client, &query, category, days).await
        }
        Commands::Show { id, year, month } => {
            commands::show::run(&client, id, year, month).await
        }
        Commands::Stats => commands::stats::run(&client).await,
    }
}
