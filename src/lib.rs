//! typecycle library
//!
//! A typewriter effect that types a word one character per tick, holds it,
//! deletes it, and moves on to the next word forever (or until cancelled).
//!
//! ```
//! use typecycle::animator::{Animator, Timings, WordList};
//!
//! let words = WordList::new(["Hi"]).unwrap();
//! let mut animator = Animator::new(words, Timings::default());
//! assert_eq!(animator.tick().text, "H");
//! assert_eq!(animator.tick().text, "Hi");
//! ```

pub mod animator;
pub mod config;
pub mod error;

pub use error::{Error, Result};
