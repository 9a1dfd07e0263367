//! typecycle: typewriter-style word cycling for terminals and status files

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "typecycle")]
#[command(about = "Typewriter text cycling animator", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the word list until Ctrl-C
    Run {
        /// Word to cycle (repeatable, replaces the configured list)
        #[arg(short, long = "word")]
        words: Vec<String>,

        /// Write frames to a file instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop after this many words have been typed and deleted
        #[arg(short, long)]
        cycles: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print the tick sequence without waiting
    Trace {
        /// Word to cycle (repeatable, replaces the configured list)
        #[arg(short, long = "word")]
        words: Vec<String>,

        /// Number of ticks (default: one pass over the word list)
        #[arg(short = 'n', long)]
        ticks: Option<usize>,

        /// Output format: table or json (default: table)
        #[arg(long, short, default_value = "table")]
        format: String,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,

    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Log to stderr so the animated line on stdout stays intact
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            words,
            output,
            cycles,
            no_color,
        } => {
            let options = commands::run::RunOptions {
                words,
                config: cli.config,
                output,
                cycles,
                no_color,
            };
            commands::run::execute(options).await?;
        }

        Commands::Trace {
            words,
            ticks,
            format,
        } => {
            let format = commands::trace::TraceFormat::from_str(&format)
                .context("Invalid format. Use 'table' or 'json'")?;
            let options = commands::trace::TraceOptions {
                words,
                config: cli.config,
                ticks,
                format,
            };
            commands::trace::execute(options)?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(cli.config.as_deref())?,
            ConfigAction::Show => commands::config::show(cli.config.as_deref())?,
            ConfigAction::Init { force } => {
                let path = commands::config::init(cli.config.as_deref(), force)?;
                println!("Wrote {}", path.display());
            }
        },
    }

    Ok(())
}
