//! Trace command - Print the tick sequence without waiting

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde::Serialize;
use std::path::PathBuf;
use typecycle::animator::{Animator, Phase, Transition, WordList};
use typecycle::config::Config;

use super::utils;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Table,
    Json,
}

impl TraceFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TraceOptions {
    pub words: Vec<String>,
    pub config: Option<PathBuf>,
    /// Defaults to one pass over the word list
    pub ticks: Option<usize>,
    pub format: TraceFormat,
}

/// One row of the trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRow {
    pub tick: usize,
    pub word_index: usize,
    /// Phase the tick ran in
    pub phase: Phase,
    pub text: String,
    pub delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

/// Run `ticks` ticks of a fresh animator
pub fn trace(mut animator: Animator, ticks: usize) -> Vec<TraceRow> {
    (1..=ticks)
        .map(|tick| {
            let before = animator.state();
            let t = animator.tick();
            TraceRow {
                tick,
                word_index: before.word_index,
                phase: before.phase(),
                text: t.text,
                delay_ms: t.delay.as_millis() as u64,
                transition: t.transition,
            }
        })
        .collect()
}

pub fn format_table(rows: &[TraceRow], words: &WordList) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Word", "Phase", "Text", "Delay", "Transition"]);

    for row in rows {
        let phase = match row.phase {
            Phase::Typing => "typing",
            Phase::Deleting => "deleting",
        };
        table.add_row(vec![
            Cell::new(row.tick),
            Cell::new(row.word_index),
            Cell::new(phase),
            Cell::new(format!("\"{}\"", row.text)),
            Cell::new(utils::format_delay(std::time::Duration::from_millis(
                row.delay_ms,
            ))),
            Cell::new(utils::describe_transition(row.transition, words)),
        ]);
    }

    table.to_string()
}

pub fn execute(options: TraceOptions) -> Result<()> {
    let config = Config::load(options.config.as_deref())?.with_overrides(options.words, false);
    let words = config.word_list().context("Invalid word list")?;
    let ticks = options
        .ticks
        .unwrap_or_else(|| utils::ticks_per_pass(&words));

    let rows = trace(Animator::new(words.clone(), config.timings()), ticks);

    let output = match options.format {
        TraceFormat::Table => format_table(&rows, &words),
        TraceFormat::Json => {
            serde_json::to_string_pretty(&rows).context("Failed to serialize trace")?
        }
    };
    println!("{}", output);
    Ok(())
}
