use super::*;

#[test]
fn should_reveal_uses_offset_from_viewport_bottom() {
    assert!(should_reveal(599.0, 700.0));
    assert!(!should_reveal(600.0, 700.0));
    assert!(should_reveal(-50.0, 700.0));
}

#[test]
fn observe_reports_first_reveal_only() {
    let mut tracker = RevealTracker::new(2);
    assert!(!tracker.observe(0, 900.0, 700.0));
    assert!(tracker.observe(0, 100.0, 700.0));
    assert!(!tracker.observe(0, 100.0, 700.0));
    assert!(tracker.is_revealed(0));
    assert!(!tracker.is_revealed(1));
}

#[test]
fn revealed_elements_stay_revealed_after_scrolling_back() {
    let mut tracker = RevealTracker::new(1);
    tracker.observe(0, 10.0, 700.0);
    tracker.observe(0, 5000.0, 700.0);
    assert!(tracker.is_revealed(0));
    assert_eq!(tracker.pending().count(), 0);
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.observe(3, 0.0, 700.0));
    assert!(!tracker.is_revealed(3));
}
