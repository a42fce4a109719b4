use folio_core::{
    default_anchors, scatter_placements, EngineConfig, EngineError, NavCommand, ScrollConfig,
    ScrollDirection, SpatialEngine,
};

fn engine() -> SpatialEngine {
    let mut e = SpatialEngine::new(EngineConfig::default(), default_anchors()).unwrap();
    e.start();
    e
}

fn settle(e: &mut SpatialEngine, frames: usize) {
    for _ in 0..frames {
        e.frame();
    }
}

#[test]
fn invalid_config_fails_at_construction() {
    let cfg = EngineConfig {
        scroll: ScrollConfig {
            scroll_distance: 0.0,
            ..ScrollConfig::default()
        },
        ..EngineConfig::default()
    };
    assert_eq!(
        SpatialEngine::new(cfg, default_anchors()).err(),
        Some(EngineError::InvalidScrollDistance(0.0))
    );
}

#[test]
fn scroll_to_half_lands_between_about_and_projects() {
    let mut e = engine();
    e.scroll_to_progress(0.5);
    settle(&mut e, 400);
    let out = e.output();
    assert!((out.scroll.smooth_progress - 0.5).abs() < 1e-4);
    assert!((out.camera_z + 33.5).abs() < 1e-2);
    assert_eq!(out.focus.active_section_id.as_deref(), Some("projects"));
    assert_eq!(out.focus.active_index, Some(2));
}

#[test]
fn wheel_input_moves_camera_forward_over_frames() {
    let mut e = engine();
    let z0 = e.output().camera_z;
    e.on_raw_input(800.0, 0.0);
    e.on_raw_input(800.0, 16.0);
    let first = e.frame().camera_z;
    assert!(first < z0);
    settle(&mut e, 400);
    assert!((e.output().scroll.smooth_progress - 0.4).abs() < 1e-4);
    assert_eq!(e.output().scroll.direction, ScrollDirection::Forward);
}

#[test]
fn section_navigation_targets_anchor_positions() {
    let mut e = engine();
    assert!(e.scroll_to_section("skills"));
    settle(&mut e, 400);
    assert_eq!(e.output().focus.active_section_id.as_deref(), Some("skills"));
    assert!((e.output().camera_z + 60.0).abs() < 1e-2);

    e.step_section(ScrollDirection::Forward);
    settle(&mut e, 400);
    assert_eq!(e.output().focus.active_section_id.as_deref(), Some("contact"));

    // Already at the end.
    e.step_section(ScrollDirection::Forward);
    settle(&mut e, 400);
    assert_eq!(e.output().focus.active_section_id.as_deref(), Some("contact"));

    e.step_section(ScrollDirection::Backward);
    settle(&mut e, 400);
    assert_eq!(e.output().focus.active_section_id.as_deref(), Some("skills"));

    assert!(!e.scroll_to_section("blog"));
}

#[test]
fn hover_through_engine_uses_placements_and_resets() {
    let mut e = engine();
    e.on_section_hover(Some("about"));
    settle(&mut e, 60);
    {
        let g = &e.output().gravity;
        assert_eq!(g.hovered_section_id.as_deref(), Some("about"));
        assert!(g.camera_offset.length() > 0.0);
        assert!(g.focus_intensity > 1.0);
        assert!(g.displacement("home").length() > 0.0);
    }
    let hovered_panel = e.output().panels.iter().find(|p| p.id == "about").unwrap();
    assert!(hovered_panel.hovered);

    e.on_section_hover(None);
    settle(&mut e, 600);
    let g = &e.output().gravity;
    assert!(g.camera_offset.length() < 1e-4);
    assert!(g.section_displacements.values().all(|d| d.length() < 1e-4));

    e.on_section_hover(Some("nowhere"));
    assert!(e.output().gravity.hovered_section_id.is_none());
}

#[test]
fn panels_follow_focus() {
    let mut e = engine();
    e.scroll_to_section("projects");
    settle(&mut e, 400);
    let panels = &e.output().panels;
    assert_eq!(panels.len(), 6);
    let projects = &panels[2];
    assert!(projects.active);
    assert!(projects.opacity > 0.99);
    assert!(projects.scale > 0.99);
    let home = &panels[0];
    assert!(!home.active);
    assert!(home.opacity < projects.opacity);
    assert!(!panels[5].visible, "contact is far outside the falloff");
}

#[test]
fn stopped_engine_ignores_everything() {
    let mut e = engine();
    e.scroll_to_progress(0.3);
    settle(&mut e, 10);
    let before = e.output().scroll;
    e.stop();
    assert!(!e.is_running());

    e.on_raw_input(2000.0, 0.0);
    e.scroll_to_progress(1.0);
    e.on_section_hover(Some("home"));
    assert!(!e.scroll_to_section("contact"));
    settle(&mut e, 50);
    assert_eq!(e.output().scroll, before);
    assert!(e.output().gravity.hovered_section_id.is_none());
}

#[test]
fn reshuffle_is_deterministic_per_seed() {
    let anchors = default_anchors();
    assert_eq!(scatter_placements(&anchors, 7), scatter_placements(&anchors, 7));
    assert_ne!(scatter_placements(&anchors, 7), scatter_placements(&anchors, 8));
    for (p, a) in scatter_placements(&anchors, 7).iter().zip(&anchors) {
        assert_eq!(p.id, a.id);
        assert_eq!(p.position.z, a.z_position);
    }

    let mut e = engine();
    e.reshuffle(7);
    assert_eq!(e.placements(), scatter_placements(&anchors, 7).as_slice());
}

#[test]
fn empty_section_list_is_not_a_crash() {
    let mut e = SpatialEngine::new(EngineConfig::default(), Vec::new()).unwrap();
    e.start();
    e.step_section(ScrollDirection::Forward);
    e.on_section_hover(Some("home"));
    let out = e.frame();
    assert!(out.focus.active_section_id.is_none());
    assert!(out.panels.is_empty());
}

#[test]
fn navigate_resolves_commands_against_active_section() {
    let mut e = engine();
    assert!(e.navigate(NavCommand::Last));
    settle(&mut e, 400);
    assert_eq!(e.output().focus.active_section_id.as_deref(), Some("contact"));

    assert!(e.navigate(NavCommand::Previous));
    settle(&mut e, 400);
    assert_eq!(e.output().focus.active_section_id.as_deref(), Some("skills"));

    assert!(!e.navigate(NavCommand::Section(6)));
    assert!(e.navigate(NavCommand::Section(1)));
    settle(&mut e, 400);
    assert_eq!(e.output().focus.active_section_id.as_deref(), Some("about"));

    e.stop();
    assert!(!e.navigate(NavCommand::First));
}

#[test]
fn new_placements_release_a_hover_on_a_removed_section() {
    let mut e = engine();
    e.on_section_hover(Some("projects"));
    settle(&mut e, 30);
    e.reshuffle(11);
    e.frame();
    assert_eq!(
        e.output().gravity.hovered_section_id.as_deref(),
        Some("projects")
    );

    let remaining: Vec<_> = default_anchors()
        .into_iter()
        .filter(|a| a.id != "projects")
        .collect();
    e.update_displacements(scatter_placements(&remaining, 11));
    settle(&mut e, 600);
    let g = &e.output().gravity;
    assert!(g.hovered_section_id.is_none());
    assert!(g.camera_offset.length() < 1e-4);
    assert!(g.section_displacements.values().all(|d| d.length() < 1e-4));
}
