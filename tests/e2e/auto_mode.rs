use crate::common::harness::MenuHarness;
use menu_positioner::config::MenuConfig;
use menu_positioner::types::{EdgeValue, Vert};
use menu_positioner::view::scene::SceneSpec;

fn center(top: f64, height: f64) -> f64 {
    top + height / 2.0
}

/// 25 rows of 20px: list height 500, selected row 12 at offsetTop 240,
/// content clamped to 200. The scroll target is 240 - 90 = 150.
#[test]
fn test_scroll_centers_selected_row() {
    let spec = SceneSpec {
        rows: 25,
        row_height: 20.0,
        list_padding: 0.0,
        selected: Some(12),
        ..MenuHarness::with_activator(100.0, 400.0, 120.0, 20.0)
    };
    let config = MenuConfig::auto().with_max_height(200.0);
    let mut harness = MenuHarness::new(spec, config);
    harness.open();

    assert_eq!(harness.menu.scroll_top(), Some(150.0));
    assert_eq!(harness.scene.scroll_top(), 150.0);
    assert_eq!(harness.position().top, EdgeValue::Px(-90.0));

    // The selected row ends up over the activator
    let row = harness.scene.row_box(12);
    let activator = harness.scene.activator_box();
    assert_eq!(
        center(row.top, row.height),
        center(activator.top, activator.height)
    );
}

#[test]
fn test_first_row_selected_pulls_panel_down() {
    let spec = SceneSpec {
        selected: Some(0),
        ..MenuHarness::with_activator(100.0, 400.0, 120.0, 36.0)
    };
    let mut harness = MenuHarness::new(spec, MenuConfig::auto().with_max_height(200.0));
    harness.open();

    assert_eq!(harness.position().top, EdgeValue::Px(-14.0));
    // Negative target is written as is; the host clamps it
    assert_eq!(harness.menu.scroll_top(), Some(-68.0));
    assert_eq!(harness.scene.scroll_top(), 0.0);

    let row = harness.scene.row_box(0);
    let activator = harness.scene.activator_box();
    assert_eq!(
        center(row.top, row.height),
        center(activator.top, activator.height)
    );
}

/// A panel that would overrun the right edge is pulled back so its right
/// edge lands exactly on the viewport boundary.
#[test]
fn test_containment_at_right_edge() {
    let spec = SceneSpec {
        rows: 0,
        content_height: 200.0,
        ..MenuHarness::with_activator(900.0, 100.0, 60.0, 36.0)
    };
    let mut harness = MenuHarness::new(spec, MenuConfig::auto().with_width(300.0));
    harness.open();

    assert_eq!(harness.position().left, EdgeValue::Px(-200.0));
    assert_eq!(harness.menu.overflow().horiz, 200.0);
    let c = harness.content();
    assert_eq!(c.right, 1000.0);
    assert_eq!(c.left, 700.0);
}

#[test]
fn test_null_selection_uses_manual_nudge() {
    let spec = MenuHarness::with_activator(100.0, 100.0, 120.0, 36.0);
    let config = MenuConfig::auto().with_nudge(5.0, 7.0);
    let mut harness = MenuHarness::new(spec, config);
    harness.open();

    assert_eq!(harness.position().left, EdgeValue::Px(5.0));
    assert_eq!(harness.position().top, EdgeValue::Px(7.0));
    assert_eq!(harness.menu.scroll_top(), None);
    assert_eq!(harness.content().left, 105.0);
    assert_eq!(harness.content().top, 107.0);
}

#[test]
fn test_auto_pulls_back_instead_of_flipping() {
    let spec = MenuHarness::with_activator(100.0, 950.0, 120.0, 36.0);
    let mut harness = MenuHarness::new(spec, MenuConfig::auto());

    assert_eq!(harness.open(), 2);
    assert_eq!(harness.menu.direction().vert, Vert::Bottom);
    assert_eq!(harness.content().bottom, 1000.0);
    assert_eq!(harness.scene.max_height(), None);
    harness.assert_content_inside_viewport();
}
