//! Tick loop driving an [`Animator`] into a [`TextSink`]
//!
//! Each tick writes one frame and then sleeps for the delay the tick asked
//! for. The loop runs until its cancellation token fires or, if a cycle limit
//! is set, until that many words have been typed and deleted.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::sink::TextSink;
use super::state::{Animator, Transition};
use crate::error::{Error, Result};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    CycleLimit,
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Words fully typed and deleted
    pub cycles: u64,
    pub reason: StopReason,
}

/// An animator bound to its display target
pub struct Typewriter<S> {
    animator: Animator,
    sink: S,
    max_cycles: Option<u64>,
}

impl<S: TextSink> Typewriter<S> {
    pub fn new(animator: Animator, sink: S) -> Self {
        Self {
            animator,
            sink,
            max_cycles: None,
        }
    }

    /// Stop after `cycles` words have been typed and deleted
    pub fn with_max_cycles(mut self, cycles: Option<u64>) -> Self {
        self.max_cycles = cycles.filter(|&n| n > 0);
        self
    }

    /// Run the loop on the current task until cancelled or the cycle limit hits
    pub async fn run(mut self, cancel: CancellationToken) -> Result<RunSummary> {
        info!(
            words = self.animator.words().len(),
            max_cycles = ?self.max_cycles,
            "Typewriter started"
        );

        let result = self.run_loop(&cancel).await;

        if let Err(e) = self.sink.finish() {
            warn!(error = %e, "Failed to finalize display target");
        }

        match &result {
            Ok(summary) => info!(
                ticks = summary.ticks,
                cycles = summary.cycles,
                reason = ?summary.reason,
                "Typewriter stopped"
            ),
            Err(e) => warn!(error = %e, "Typewriter aborted"),
        }
        result
    }

    async fn run_loop(&mut self, cancel: &CancellationToken) -> Result<RunSummary> {
        let mut ticks = 0;
        let mut cycles = 0;
        let summary = |ticks: u64, cycles: u64, reason: StopReason| RunSummary {
            ticks,
            cycles,
            reason,
        };

        loop {
            if cancel.is_cancelled() {
                return Ok(summary(ticks, cycles, StopReason::Cancelled));
            }

            let tick = self.animator.tick();
            self.sink.set_text(&tick.text).map_err(Error::Sink)?;
            ticks += 1;

            match tick.transition {
                Some(Transition::StartDeleting) => {
                    debug!(text = %tick.text, "Word revealed, holding");
                }
                Some(Transition::NextWord { next_word }) => {
                    cycles += 1;
                    debug!(next_word, cycles, "Word deleted, advancing");
                    if self.max_cycles.is_some_and(|max| cycles >= max) {
                        return Ok(summary(ticks, cycles, StopReason::CycleLimit));
                    }
                }
                None => trace!(text = %tick.text, delay_ms = tick.delay.as_millis() as u64),
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    return Ok(summary(ticks, cycles, StopReason::Cancelled));
                }
                _ = tokio::time::sleep(tick.delay) => {}
            }
        }
    }
}

impl<S: TextSink + Send + 'static> Typewriter<S> {
    /// Spawn the loop on the tokio runtime
    pub fn start(self) -> TypewriterHandle {
        let token = CancellationToken::new();
        let task = tokio::spawn(self.run(token.clone()));
        TypewriterHandle { token, task }
    }
}

/// Handle to a spawned typewriter
pub struct TypewriterHandle {
    token: CancellationToken,
    task: JoinHandle<Result<RunSummary>>,
}

impl TypewriterHandle {
    /// Ask the loop to stop at its next await point
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the loop to end
    pub async fn join(self) -> Result<RunSummary> {
        self.task.await?
    }
}
