//! Typewriter state machine
//!
//! One tick reveals or retracts a single character of the current word and
//! reports how long to wait before the next tick. The machine has two
//! phases, typing and deleting, and never terminates on its own.

use std::time::Duration;

use super::word_list::{prefix, WordList};

/// Delays between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// After a typing tick
    pub type_delay: Duration,
    /// After a deleting tick
    pub delete_delay: Duration,
    /// After the word has been fully revealed
    pub hold_delay: Duration,
    /// After the word has been fully deleted
    pub next_word_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(150),
            delete_delay: Duration::from_millis(50),
            hold_delay: Duration::from_millis(2000),
            next_word_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Typing,
    Deleting,
}

/// Phase change caused by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Transition {
    /// Word fully revealed, deletion starts after the hold
    StartDeleting,
    /// Word fully deleted, typing resumes on `next_word`
    NextWord { next_word: usize },
}

/// Outcome of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Text to show until the next tick
    pub text: String,
    /// Wait before the next tick
    pub delay: Duration,
    pub transition: Option<Transition>,
}

/// Position within the word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimatorState {
    pub word_index: usize,
    pub char_index: usize,
    pub is_deleting: bool,
}

impl AnimatorState {
    pub fn phase(&self) -> Phase {
        if self.is_deleting {
            Phase::Deleting
        } else {
            Phase::Typing
        }
    }
}

/// Word list, timings and state for one display target
#[derive(Debug, Clone)]
pub struct Animator {
    words: WordList,
    timings: Timings,
    state: AnimatorState,
}

impl Animator {
    pub fn new(words: WordList, timings: Timings) -> Self {
        Self {
            words,
            timings,
            state: AnimatorState::default(),
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Advance by one character and return what to display
    pub fn tick(&mut self) -> Tick {
        let state = &mut self.state;
        let word = self.words.word(state.word_index);
        let word_len = self.words.char_len(state.word_index);

        let text = if state.is_deleting {
            state.char_index -= 1;
            prefix(word, state.char_index).to_string()
        } else {
            state.char_index += 1;
            prefix(word, state.char_index).to_string()
        };

        let mut delay = if state.is_deleting {
            self.timings.delete_delay
        } else {
            self.timings.type_delay
        };

        let mut transition = None;
        if !state.is_deleting && state.char_index == word_len {
            state.is_deleting = true;
            delay = self.timings.hold_delay;
            transition = Some(Transition::StartDeleting);
        } else if state.is_deleting && state.char_index == 0 {
            state.is_deleting = false;
            state.word_index = self.words.next_index(state.word_index);
            delay = self.timings.next_word_delay;
            transition = Some(Transition::NextWord {
                next_word: state.word_index,
            });
        }

        Tick {
            text,
            delay,
            transition,
        }
    }
}
