//! Typewriter text cycling
//!
//! [`WordList`] holds the words, [`Animator`] is the per-tick state machine,
//! [`TextSink`] is where frames go and [`Typewriter`] runs the timed loop.

pub mod runner;
pub mod sink;
pub mod state;
pub mod word_list;

pub use runner::{RunSummary, StopReason, Typewriter, TypewriterHandle};
pub use sink::{FileSink, MemorySink, TerminalSink, TextSink};
pub use state::{Animator, AnimatorState, Phase, Tick, Timings, Transition};
pub use word_list::WordList;
