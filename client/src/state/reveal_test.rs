use super::*;

#[test]
fn new_tracker_is_all_hidden() {
    let tracker = RevealTracker::new(3);
    assert_eq!(tracker.len(), 3);
    assert!((0..3).all(|i| !tracker.is_visible(i)));
    assert!(!tracker.all_visible());
}

#[test]
fn below_threshold_stays_hidden() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.record(0, 0.0));
    assert!(!tracker.record(0, 0.09));
    assert!(!tracker.is_visible(0));
}

#[test]
fn crossing_threshold_reveals_once() {
    let mut tracker = RevealTracker::new(2);
    assert!(tracker.record(1, 0.1));
    assert!(tracker.is_visible(1));
    assert!(!tracker.record(1, 0.8));
    assert!(!tracker.is_visible(0));
}

#[test]
fn visible_never_reverts() {
    let mut tracker = RevealTracker::new(1);
    tracker.record(0, 0.5);
    for ratio in [0.0, 0.05, 1.0, 0.0] {
        tracker.record(0, ratio);
        assert!(tracker.is_visible(0));
    }
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.record(7, 1.0));
    assert!(!tracker.is_visible(7));
}

#[test]
fn reveal_all_returns_only_hidden_indices() {
    let mut tracker = RevealTracker::new(4);
    tracker.record(2, 1.0);
    assert_eq!(tracker.reveal_all(), vec![0, 1, 3]);
    assert!(tracker.all_visible());
    assert!(tracker.reveal_all().is_empty());
}

#[test]
fn empty_tracker() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.is_empty());
    assert!(tracker.all_visible());
    assert!(tracker.reveal_all().is_empty());
}
