//! Shared utilities for commands

use std::time::Duration;
use typecycle::animator::{Transition, WordList};

/// Format a delay as milliseconds, or seconds from one second up
pub fn format_delay(delay: Duration) -> String {
    let ms = delay.as_millis();
    if ms >= 1000 {
        format!("{:.1} s", delay.as_secs_f64())
    } else {
        format!("{} ms", ms)
    }
}

/// Short human label for a transition
pub fn describe_transition(transition: Option<Transition>, words: &WordList) -> String {
    match transition {
        None => String::new(),
        Some(Transition::StartDeleting) => "hold, start deleting".to_string(),
        Some(Transition::NextWord { next_word }) => {
            format!("next word: {}", words.word(next_word))
        }
    }
}

/// Ticks needed to type and delete every word once
pub fn ticks_per_pass(words: &WordList) -> usize {
    (0..words.len()).map(|i| 2 * words.char_len(i)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_delay() {
        assert_eq!(format_delay(Duration::from_millis(0)), "0 ms");
        assert_eq!(format_delay(Duration::from_millis(150)), "150 ms");
        assert_eq!(format_delay(Duration::from_millis(2000)), "2.0 s");
        assert_eq!(format_delay(Duration::from_millis(2500)), "2.5 s");
    }

    #[test]
    fn test_describe_transition() {
        let words = WordList::new(["A", "Bb"]).unwrap();
        assert_eq!(describe_transition(None, &words), "");
        assert_eq!(
            describe_transition(Some(Transition::NextWord { next_word: 1 }), &words),
            "next word: Bb"
        );
    }

    #[test]
    fn test_ticks_per_pass() {
        let words = WordList::new(["A", "Bb"]).unwrap();
        assert_eq!(ticks_per_pass(&words), 6);
    }
}
