//! Run command - Animate the word list until interrupted

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use typecycle::animator::{
    Animator, FileSink, RunSummary, StopReason, TerminalSink, TextSink, Typewriter,
};
use typecycle::config::Config;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub words: Vec<String>,
    pub config: Option<PathBuf>,
    /// Write frames to this file instead of the terminal
    pub output: Option<PathBuf>,
    /// Stop after this many words have been typed and deleted
    pub cycles: Option<u64>,
    pub no_color: bool,
}

pub async fn execute(options: RunOptions) -> Result<()> {
    let config =
        Config::load(options.config.as_deref())?.with_overrides(options.words, options.no_color);
    let words = config.word_list().context("Invalid word list")?;
    let animator = Animator::new(words, config.timings());

    // Targets are opened before the loop starts so a bad path fails here
    let sink: Box<dyn TextSink + Send> = match &options.output {
        Some(path) => Box::new(FileSink::open(path)?),
        None => Box::new(TerminalSink::stdout(config.color)),
    };

    let handle = Typewriter::new(animator, sink)
        .with_max_cycles(options.cycles)
        .start();

    tokio::spawn(cancel_on_signal(
        tokio::signal::ctrl_c(),
        handle.cancellation_token(),
    ));

    let summary = handle.join().await?;

    if let Some(path) = &options.output {
        println!("{}", format_summary(&summary));
        println!("  Target: {}", path.display().dimmed());
    }

    Ok(())
}

/// Cancel `token` once `signal` fires; warn if the listener fails
async fn cancel_on_signal<F>(signal: F, token: CancellationToken)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            tracing::info!("Interrupt received, stopping");
            token.cancel();
        }
        Err(e) => tracing::warn!(error = %e, "Failed to listen for Ctrl-C"),
    }
}

pub fn format_summary(summary: &RunSummary) -> String {
    let reason = match summary.reason {
        StopReason::Cancelled => "interrupted",
        StopReason::CycleLimit => "cycle limit reached",
    };
    format!(
        "Stopped ({}) after {} tick(s), {} cycle(s)",
        reason, summary.ticks, summary.cycles
    )
}
