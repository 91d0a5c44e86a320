use super::*;

// =============================================================
// VisibilityTracker
// =============================================================

#[test]
fn tracker_fires_once_at_threshold() {
    let mut tracker = VisibilityTracker::new(0.5);
    tracker.observe(1_u32);
    assert!(!tracker.on_visible(&1, Some(0.49)));
    assert!(tracker.on_visible(&1, Some(0.5)));
    assert!(!tracker.on_visible(&1, Some(1.0)));
    assert!(tracker.is_empty());
}

#[test]
fn tracker_ignores_unobserved_keys() {
    let mut tracker = VisibilityTracker::new(0.5);
    tracker.observe("a");
    assert!(!tracker.on_visible(&"b", Some(1.0)));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn tracker_at_zero_threshold_waits_for_intersection() {
    let mut tracker = VisibilityTracker::new(0.0);
    tracker.observe(3_u32);
    assert!(!tracker.on_visible(&3, None));
    assert_eq!(tracker.len(), 1);
    assert!(tracker.on_visible(&3, Some(0.0)));
    assert!(tracker.is_empty());
}

#[test]
fn tracker_never_fires_for_off_screen_entries() {
    let mut tracker = VisibilityTracker::new(0.5);
    tracker.observe(0_u32);
    for _ in 0..3 {
        assert!(!tracker.on_visible(&0, None));
    }
    assert_eq!(tracker.len(), 1);
}

// =============================================================
// LoadSequencer
// =============================================================

#[test]
fn sequencer_waits_for_load() {
    let mut seq = LoadSequencer::<u32>::new(1000, 0.5);
    assert_eq!(seq.phase(), LoaderPhase::Waiting);
    seq.hide_loader();
    assert!(!seq.is_loader_hidden());
    assert_eq!(seq.phase(), LoaderPhase::Waiting);
}

#[test]
fn loader_hides_when_timer_fires() {
    let mut seq = LoadSequencer::<u32>::new(1000, 0.5);
    seq.on_load([]);
    assert_eq!(seq.phase(), LoaderPhase::Delaying);
    assert!(!seq.is_loader_hidden());
    seq.hide_loader();
    assert_eq!(seq.phase(), LoaderPhase::Hidden);
    seq.hide_loader();
    assert!(seq.is_loader_hidden());
}

#[test]
fn zero_delay_hides_immediately() {
    let mut seq = LoadSequencer::<u32>::new(0, 0.5);
    seq.on_load([]);
    assert!(seq.is_loader_hidden());
}

#[test]
fn each_counter_triggers_exactly_once() {
    let mut seq = LoadSequencer::new(1000, 0.5);
    seq.on_load([0_usize, 1, 2]);
    assert_eq!(seq.observed_count(), 3);

    assert_eq!(seq.on_visible(&1, Some(0.2)), None);
    assert_eq!(seq.on_visible(&1, Some(0.75)), Some(1));
    assert_eq!(seq.on_visible(&1, Some(0.75)), None);
    assert_eq!(seq.observed_count(), 2);

    assert_eq!(seq.on_visible(&0, Some(0.5)), Some(0));
    assert_eq!(seq.on_visible(&2, Some(1.0)), Some(2));
    assert_eq!(seq.observed_count(), 0);
}

#[test]
fn zero_threshold_does_not_start_off_screen_counters() {
    let config = SiteConfig::from_json(r#"{ "counter_threshold": 0 }"#).expect("threshold 0 is valid");
    let mut seq = LoadSequencer::from_config(&config);
    seq.on_load([0_usize, 1]);

    // Initial observer callback reports both counters, neither intersecting.
    assert_eq!(seq.on_visible(&0, None), None);
    assert_eq!(seq.on_visible(&1, None), None);
    assert_eq!(seq.observed_count(), 2);

    assert_eq!(seq.on_visible(&1, Some(0.01)), Some(1));
    assert_eq!(seq.observed_count(), 1);
}

#[test]
fn no_counters_is_noop() {
    let mut seq = LoadSequencer::<usize>::new(1000, 0.5);
    seq.on_load(Vec::new());
    assert_eq!(seq.observed_count(), 0);
    assert_eq!(seq.on_visible(&0, Some(1.0)), None);
}

#[test]
fn repeated_load_does_not_rearm() {
    let mut seq = LoadSequencer::new(1000, 0.5);
    seq.on_load([7_u32]);
    assert_eq!(seq.on_visible(&7, Some(1.0)), Some(7));
    seq.on_load([7_u32]);
    assert_eq!(seq.on_visible(&7, Some(1.0)), None);
}

#[test]
fn from_config_reads_delay_and_threshold() {
    let config = SiteConfig { loader_delay_ms: 250, counter_threshold: 0.9, ..SiteConfig::default() };
    let seq = LoadSequencer::<u32>::from_config(&config);
    assert_eq!(seq.delay_ms(), 250);
    assert_eq!(seq.threshold(), 0.9);
}
