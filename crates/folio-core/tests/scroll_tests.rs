use folio_core::{EngineError, ScrollConfig, ScrollDirection, ScrollTracker};

fn tracker(smoothing: f32) -> ScrollTracker {
    ScrollTracker::new(ScrollConfig {
        scroll_distance: 4000.0,
        smoothing,
        inertia_decay: 0.9,
    })
    .unwrap()
}

#[test]
fn rejects_non_positive_scroll_distance() {
    for bad in [0.0, -10.0, f32::NAN, f32::INFINITY] {
        let cfg = ScrollConfig {
            scroll_distance: bad,
            ..ScrollConfig::default()
        };
        assert!(matches!(
            ScrollTracker::new(cfg),
            Err(EngineError::InvalidScrollDistance(_))
        ));
    }
}

#[test]
fn rejects_smoothing_and_decay_outside_unit_interval() {
    let cfg = ScrollConfig {
        smoothing: 0.0,
        ..ScrollConfig::default()
    };
    assert_eq!(
        ScrollTracker::new(cfg).err(),
        Some(EngineError::InvalidSmoothing(0.0))
    );
    let cfg = ScrollConfig {
        inertia_decay: 1.5,
        ..ScrollConfig::default()
    };
    assert_eq!(
        ScrollTracker::new(cfg).err(),
        Some(EngineError::InvalidInertiaDecay(1.5))
    );
}

#[test]
fn raw_progress_follows_accumulated_delta() {
    let mut t = tracker(0.1);
    t.on_raw_input(1000.0, 0.0);
    assert!((t.state().raw_target_progress - 0.25).abs() < 1e-6);
    t.on_raw_input(-400.0, 16.0);
    assert!((t.state().raw_target_progress - 0.15).abs() < 1e-6);
    // Input alone never moves the smoothed value.
    assert_eq!(t.smooth_progress(), 0.0);
}

#[test]
fn raw_progress_stays_clamped_for_any_sequence() {
    let mut t = tracker(0.1);
    let deltas = [
        -500.0, 9000.0, 120.0, -1e7, 3.5, 1e9, -0.25, 4000.0, -4000.0, -1.0,
    ];
    let mut now = 0.0;
    for _ in 0..20 {
        for d in deltas {
            now += 7.0;
            t.on_raw_input(d, now);
            let p = t.state().raw_target_progress;
            assert!((0.0..=1.0).contains(&p), "progress {p} escaped after delta {d}");
        }
    }
}

#[test]
fn direction_tracks_sign_of_latest_delta() {
    let mut t = tracker(0.1);
    t.on_raw_input(10.0, 0.0);
    assert_eq!(t.state().direction, ScrollDirection::Forward);
    t.on_raw_input(-10.0, 5.0);
    assert_eq!(t.state().direction, ScrollDirection::Backward);
    t.on_raw_input(0.0, 9.0);
    assert_eq!(t.state().direction, ScrollDirection::Idle);
    assert_eq!(ScrollDirection::Backward.signum(), -1);
}

#[test]
fn velocity_uses_elapsed_time_with_floor() {
    let mut t = tracker(0.1);
    // First input measures from construction.
    t.on_raw_input(100.0, 1000.0);
    assert!((t.state().velocity - 0.1).abs() < 1e-6);
    t.on_raw_input(100.0, 1010.0);
    assert!((t.state().velocity - 10.0).abs() < 1e-4);
    // Same timestamp: elapsed floors to 1ms instead of dividing by zero.
    t.on_raw_input(50.0, 1010.0);
    assert!((t.state().velocity - 50.0).abs() < 1e-4);
    assert!(t.state().velocity.is_finite());
}

#[test]
fn velocity_decays_every_tick_without_input() {
    let mut t = tracker(0.1);
    t.on_raw_input(100.0, 0.0);
    t.on_raw_input(100.0, 10.0);
    let v0 = t.state().velocity;
    for _ in 0..5 {
        t.tick();
    }
    let expected = v0 * 0.9_f32.powi(5);
    assert!((t.state().velocity - expected).abs() < 1e-5);
}

#[test]
fn smoothing_decays_geometrically() {
    let s = 0.2_f32;
    let mut t = tracker(s);
    t.scroll_to_progress(0.8);
    let initial_gap = 0.8_f32;
    let mut prev_gap = initial_gap;
    for n in 1..=30 {
        t.tick();
        let gap = (0.8 - t.smooth_progress()).abs();
        let expected = (1.0 - s).powi(n) * initial_gap;
        assert!((gap - expected).abs() < 1e-5, "tick {n}: {gap} vs {expected}");
        assert!(gap < prev_gap, "not monotonic at tick {n}");
        prev_gap = gap;
    }
}

#[test]
fn scroll_to_progress_clamps_and_does_not_animate() {
    let mut t = tracker(0.5);
    t.scroll_to_progress(1.7);
    assert_eq!(t.state().raw_target_progress, 1.0);
    assert_eq!(t.smooth_progress(), 0.0);
    t.scroll_to_progress(-3.0);
    assert_eq!(t.state().raw_target_progress, 0.0);

    // The accumulator moved with it: a later delta continues from there.
    t.scroll_to_progress(0.5);
    t.on_raw_input(400.0, 0.0);
    assert!((t.state().raw_target_progress - 0.6).abs() < 1e-6);
}

#[test]
fn non_finite_input_is_ignored() {
    let mut t = tracker(0.5);
    t.on_raw_input(800.0, 0.0);
    t.on_raw_input(f32::NAN, 1.0);
    t.scroll_to_progress(f32::NAN);
    assert!((t.state().raw_target_progress - 0.2).abs() < 1e-6);
}

#[test]
fn first_input_registers_velocity() {
    let mut t = tracker(0.1);
    t.on_raw_input(80.0, 20.0);
    assert!((t.state().velocity - 4.0).abs() < 1e-5);
    // Right at construction the elapsed floor still applies.
    let mut t = tracker(0.1);
    t.on_raw_input(-30.0, 0.0);
    assert!((t.state().velocity + 30.0).abs() < 1e-5);
}
