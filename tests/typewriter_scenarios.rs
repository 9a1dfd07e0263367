//! End-to-end typewriter scenarios
//!
//! Runs the spawned loop under a paused tokio clock and checks both the
//! frames written and the time between them.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use typecycle::animator::{
    Animator, MemorySink, StopReason, TextSink, Timings, Typewriter, WordList,
};

/// Records each frame with the (virtual) time it was written
#[derive(Clone, Default)]
struct TimedSink {
    frames: Arc<Mutex<Vec<(Instant, String)>>>,
}

impl TextSink for TimedSink {
    fn set_text(&mut self, text: &str) -> io::Result<()> {
        self.frames
            .lock()
            .unwrap()
            .push((Instant::now(), text.to_string()));
        Ok(())
    }
}

impl TimedSink {
    /// Frame texts paired with the gap since the previous frame
    fn gaps(&self) -> Vec<(String, Duration)> {
        let frames = self.frames.lock().unwrap();
        frames
            .windows(2)
            .map(|w| (w[1].1.clone(), w[1].0 - w[0].0))
            .collect()
    }
}

fn animator(words: &[&str]) -> Animator {
    Animator::new(
        WordList::new(words.iter().copied()).unwrap(),
        Timings::default(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_hi_frames_and_delays() {
    let sink = TimedSink::default();
    let summary = Typewriter::new(animator(&["Hi"]), sink.clone())
        .with_max_cycles(Some(2))
        .start()
        .join()
        .await
        .unwrap();
    assert_eq!(summary.reason, StopReason::CycleLimit);

    let gaps = sink.gaps();
    let expected = [
        ("Hi", 150),
        ("H", 2000),
        ("", 50),
        ("H", 500),
        ("Hi", 150),
        ("H", 2000),
        ("", 50),
    ];
    assert_eq!(gaps.len(), expected.len());
    for ((text, gap), (want_text, want_ms)) in gaps.iter().zip(expected) {
        assert_eq!(text, want_text);
        assert_eq!(*gap, Duration::from_millis(want_ms));
    }
}

#[tokio::test(start_paused = true)]
async fn test_two_words_wrap_around() {
    let sink = MemorySink::new();
    let summary = Typewriter::new(animator(&["A", "Bb"]), sink.clone())
        .with_max_cycles(Some(3))
        .run(tokio_util::sync::CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(summary.cycles, 3);
    assert_eq!(
        sink.frames(),
        vec!["A", "", "B", "Bb", "B", "", "A", ""]
    );
}

#[tokio::test(start_paused = true)]
async fn test_full_cycle_leaves_empty_display() {
    let sink = MemorySink::new();
    Typewriter::new(animator(&["Back-End Developer"]), sink.clone())
        .with_max_cycles(Some(1))
        .start()
        .join()
        .await
        .unwrap();

    assert_eq!(sink.current(), "");
    assert_eq!(sink.frames().len(), 2 * "Back-End Developer".len());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_during_hold() {
    let sink = MemorySink::new();
    let handle = Typewriter::new(animator(&["Hi"]), sink.clone()).start();

    // Two typing ticks land by 150 ms; the 2000 ms hold follows
    tokio::time::sleep(Duration::from_millis(1000)).await;
    handle.cancel();
    let summary = handle.join().await.unwrap();

    assert_eq!(summary.reason, StopReason::Cancelled);
    assert_eq!(summary.ticks, 2);
    assert_eq!(sink.current(), "Hi");
}

#[tokio::test(start_paused = true)]
async fn test_independent_animators() {
    let first = MemorySink::new();
    let second = MemorySink::new();

    let a = Typewriter::new(animator(&["One"]), first.clone())
        .with_max_cycles(Some(1))
        .start();
    let b = Typewriter::new(animator(&["Two", "Three"]), second.clone())
        .with_max_cycles(Some(2))
        .start();

    a.join().await.unwrap();
    b.join().await.unwrap();

    assert!(first.frames().iter().all(|f| "One".starts_with(f.as_str())));
    assert!(second.frames().contains(&"Three".to_string()));
    assert!(!second.frames().contains(&"One".to_string()));
}
