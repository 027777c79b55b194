//! Unit tests for the gesture tracker through its public API.

use snapsheet::input::GestureTracker;
use snapsheet::{SheetConfig, SnapOffsets};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn offsets() -> SnapOffsets {
    SnapOffsets::new(48.0, 400.0, 704.0).unwrap()
}

#[test]
fn test_steady_drag_velocity() {
    let mut tracker = GestureTracker::new(&SheetConfig::default());
    tracker.begin(400.0, ms(1000), 400.0, &offsets());

    // 8px every 16ms: 500px/s downward
    for k in 1..=12u64 {
        tracker.update(400.0 + 8.0 * k as f32, ms(1000 + 16 * k));
    }
    let release = tracker.end(400.0 + 8.0 * 12.0, ms(1000 + 16 * 12));

    assert!((release.velocity - 500.0).abs() < 1.0);
    assert_eq!(release.displacement, 96.0);
}

#[test]
fn test_pause_before_release_kills_velocity() {
    let mut tracker = GestureTracker::new(&SheetConfig::default());
    tracker.begin(400.0, ms(0), 400.0, &offsets());
    tracker.update(200.0, ms(30));

    let release = tracker.end(200.0, ms(400));
    assert_eq!(release.velocity, 0.0);
    assert_eq!(release.displacement, -200.0);
}

#[test]
fn test_simultaneous_samples_do_not_produce_infinity() {
    let mut tracker = GestureTracker::new(&SheetConfig::default());
    tracker.begin(400.0, ms(50), 400.0, &offsets());
    tracker.update(100.0, ms(50));
    let release = tracker.end(50.0, ms(50));
    assert_eq!(release.velocity, 0.0);
    assert!(release.displacement.is_finite());
}

#[test]
fn test_custom_window() {
    let config = SheetConfig {
        velocity_window_ms: 40,
        ..Default::default()
    };
    let mut tracker = GestureTracker::new(&config);
    tracker.begin(400.0, ms(0), 400.0, &offsets());
    // Fast start, slow finish: only the slow tail is within 40ms
    tracker.update(300.0, ms(10));
    tracker.update(298.0, ms(60));
    tracker.update(296.0, ms(80));

    assert!((tracker.velocity() - -100.0).abs() < 0.5);
    assert!(tracker.elapsed() >= ms(80));
}
