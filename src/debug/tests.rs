//! Debug domain: tests for the info overlay.

use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;

use super::{
    DebugInfoOverlay, DebugState, OVERLAY_TOGGLE, debug_info_text, toggle_debug_info,
    update_debug_info_overlay,
};
use crate::movement::{Body, Player};

fn overlay_app() -> App {
    let mut app = App::new();
    app.init_resource::<DebugState>()
        .init_resource::<DiagnosticsStore>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_systems(Update, (toggle_debug_info, update_debug_info_overlay).chain());
    app
}

fn overlay_texts(app: &mut App) -> Vec<String> {
    app.world_mut()
        .query_filtered::<&Text, With<DebugInfoOverlay>>()
        .iter(app.world())
        .map(|text| text.0.clone())
        .collect()
}

#[test]
fn test_debug_info_text_without_samples_or_player() {
    assert_eq!(debug_info_text(None, None), "FPS: --");
}

#[test]
fn test_debug_info_text_shows_fps_and_kinematics() {
    let mut body = Body::new(Vec2::new(4.1, 22.2), Vec2::splat(0.8));
    body.velocity = Vec2::new(0.02, -0.3);

    let text = debug_info_text(Some(59.6), Some(&body));

    assert_eq!(text, "FPS: 60\nPos: (4.10, 22.20)\nVel: (0.020, -0.300)");
}

#[test]
fn test_overlay_visible_by_default_and_tracks_player() {
    let mut app = overlay_app();
    let player = app
        .world_mut()
        .spawn((Player, Body::new(Vec2::new(1.0, 2.0), Vec2::splat(0.8))))
        .id();

    app.update();
    assert_eq!(overlay_texts(&mut app).len(), 1);

    app.world_mut().get_mut::<Body>(player).unwrap().position = Vec2::new(3.5, 2.0);
    app.update();

    let texts = overlay_texts(&mut app);
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("Pos: (3.50, 2.00)"), "{}", texts[0]);
}

#[test]
fn test_toggle_key_hides_and_shows_overlay() {
    let mut app = overlay_app();
    app.update();
    assert_eq!(overlay_texts(&mut app).len(), 1);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(OVERLAY_TOGGLE);
    app.update();
    assert!(!app.world().resource::<DebugState>().show_info);
    assert!(overlay_texts(&mut app).is_empty());

    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(OVERLAY_TOGGLE);
    keyboard.clear();
    keyboard.press(OVERLAY_TOGGLE);
    app.update();
    assert!(app.world().resource::<DebugState>().show_info);
    assert_eq!(overlay_texts(&mut app).len(), 1);
}
