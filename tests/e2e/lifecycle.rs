use crate::common::harness::MenuHarness;
use menu_positioner::config::MenuConfig;
use menu_positioner::event::MenuEvent;
use menu_positioner::menu::MenuState;
use menu_positioner::types::{EdgeValue, Vert};
use menu_positioner::view::scene::SceneSpec;

/// Resolving a direction resets the anchored edges to `auto` before any
/// offset is applied.
#[test]
fn test_direction_reset_before_offsets() {
    let config = MenuConfig {
        top: true,
        left: true,
        ..MenuConfig::default()
    };
    let mut harness = MenuHarness::new(SceneSpec::default(), config);
    assert!(harness.menu.activate(&mut harness.scene));

    let pos = harness.position();
    assert!(pos.top.is_auto());
    assert!(pos.left.is_auto());
    assert_eq!(pos.bottom, EdgeValue::Px(0.0));
    assert_eq!(pos.right, EdgeValue::Px(0.0));
    assert_eq!(harness.menu.state(), MenuState::Measuring);
}

#[test]
fn test_flip_resets_new_anchor_before_corrected_pass() {
    let mut spec = MenuHarness::with_activator(800.0, 900.0, 100.0, 40.0);
    spec.rows = 5;
    let mut harness = MenuHarness::new(spec, MenuConfig::default());
    assert!(harness.menu.activate(&mut harness.scene));
    harness.tick();

    // Between the two passes only the baseline of the new direction is set
    assert!(harness.menu.has_pending_pass());
    assert_eq!(harness.menu.direction().vert, Vert::Top);
    let pos = harness.position();
    assert!(pos.top.is_auto());
    assert_eq!(pos.bottom, EdgeValue::Px(0.0));
    assert!(!harness.menu.is_content_active());
    assert!(!harness.scene.is_shown());
}

#[test]
fn test_close_drops_pending_pass() {
    let mut spec = MenuHarness::with_activator(800.0, 900.0, 100.0, 40.0);
    spec.rows = 5;
    let mut harness = MenuHarness::new(spec, MenuConfig::default());
    assert!(harness.menu.activate(&mut harness.scene));
    harness.tick();
    assert!(harness.menu.has_pending_pass());

    assert!(harness
        .menu
        .handle_event(MenuEvent::EscapePressed, &mut harness.scene));
    assert!(!harness.menu.has_pending_pass());

    let before = harness.position();
    harness.tick();
    assert_eq!(harness.menu.state(), MenuState::Closed);
    assert_eq!(harness.position(), before);
}

#[test]
fn test_activate_while_open_is_ignored() {
    let mut harness = MenuHarness::new(SceneSpec::default(), MenuConfig::default());
    harness.open();
    let flushes = harness.scene.flush_count();

    assert!(!harness.menu.activate(&mut harness.scene));
    harness.tick();
    assert_eq!(harness.menu.state(), MenuState::Visible);
    // Only the host's own flush, no pass ran
    assert_eq!(harness.scene.flush_count(), flushes + 1);
}

#[test]
fn test_click_toggles() {
    let mut harness = MenuHarness::new(SceneSpec::default(), MenuConfig::default());

    assert!(harness
        .menu
        .handle_event(MenuEvent::ActivatorClicked, &mut harness.scene));
    harness.tick();
    harness.tick();
    assert_eq!(harness.menu.state(), MenuState::Visible);
    assert!(harness.scene.is_shown());

    assert!(harness
        .menu
        .handle_event(MenuEvent::ContentClicked, &mut harness.scene));
    harness.tick();
    assert_eq!(harness.menu.state(), MenuState::Closed);
    assert!(!harness.scene.is_shown());

    // Clicking outside a closed menu changes nothing
    assert!(!harness
        .menu
        .handle_event(MenuEvent::ClickedOutside, &mut harness.scene));
}

#[test]
fn test_click_preferences() {
    let config = MenuConfig {
        open_on_click: false,
        close_on_click: false,
        ..MenuConfig::default()
    };
    let mut harness = MenuHarness::new(SceneSpec::default(), config);

    assert!(!harness
        .menu
        .handle_event(MenuEvent::ActivatorClicked, &mut harness.scene));
    assert_eq!(harness.menu.state(), MenuState::Closed);

    harness.open();
    assert!(!harness
        .menu
        .handle_event(MenuEvent::ContentClicked, &mut harness.scene));
    assert!(harness.menu.is_open());
    assert!(harness
        .menu
        .handle_event(MenuEvent::ClickedOutside, &mut harness.scene));
    assert!(!harness.menu.is_open());
}

#[test]
fn test_min_width_follows_activator() {
    let spec = SceneSpec {
        content_width: 80.0,
        ..MenuHarness::with_activator(100.0, 100.0, 200.0, 36.0)
    };
    let mut harness = MenuHarness::new(spec, MenuConfig::default());
    harness.open();

    assert_eq!(harness.scene.min_width(), 200.0);
    assert_eq!(harness.content().width, 200.0);
    assert_eq!(harness.menu.dimensions().content.width, 200.0);
}

#[test]
fn test_content_width_matches_activator_by_default() {
    let mut harness = MenuHarness::new(SceneSpec::default(), MenuConfig::default());
    harness.open();

    let activator = harness.scene.activator_box();
    assert_eq!(harness.scene.width(), Some(activator.width));
    assert_eq!(harness.content().width, activator.width);
    assert_eq!(harness.menu.dimensions().content.width, 120.0);
}

#[test]
fn test_explicit_width_wins_over_activator() {
    let config = MenuConfig::default().with_width(250.0);
    let mut harness = MenuHarness::new(SceneSpec::default(), config);
    harness.open();

    assert_eq!(harness.scene.width(), Some(250.0));
    assert_eq!(harness.content().width, 250.0);
    assert_eq!(harness.menu.dimensions().content.width, 250.0);
}

/// Scroll is written while the panel is still hidden; it only becomes
/// active on the following tick.
#[test]
fn test_positioned_before_visible() {
    let spec = SceneSpec {
        selected: Some(6),
        ..MenuHarness::with_activator(100.0, 400.0, 120.0, 36.0)
    };
    let mut harness = MenuHarness::new(spec, MenuConfig::auto().with_max_height(200.0));
    assert!(harness.menu.activate(&mut harness.scene));
    harness.tick();

    assert_eq!(harness.menu.state(), MenuState::Positioned);
    assert!(harness.menu.has_pending_pass());
    assert!(!harness.menu.is_content_active());
    assert!(!harness.scene.is_shown());
    assert!(harness.menu.scroll_top().is_some());
    assert!(harness.scene.scroll_top() > 0.0);

    let position = harness.position();
    harness.tick();
    assert_eq!(harness.menu.state(), MenuState::Visible);
    assert!(harness.scene.is_shown());
    assert_eq!(harness.position(), position);
    assert_eq!(harness.scene.position(), position);
}

#[test]
fn test_deactivate_keeps_direction() {
    let mut spec = MenuHarness::with_activator(800.0, 900.0, 100.0, 40.0);
    spec.rows = 5;
    let mut harness = MenuHarness::new(spec, MenuConfig::default());
    harness.open();
    harness.menu.deactivate();

    assert_eq!(harness.menu.state(), MenuState::Closed);
    assert_eq!(harness.menu.direction().vert, Vert::Top);
    assert!(!harness.menu.is_content_active());
}

#[test]
fn test_transition_origin() {
    let config = MenuConfig {
        origin: "bottom right".to_string(),
        ..MenuConfig::default()
    };
    let harness = MenuHarness::new(SceneSpec::default(), config);
    assert_eq!(harness.menu.transition_origin(), "bottom right");
}
