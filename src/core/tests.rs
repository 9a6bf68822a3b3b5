//! Core domain: tests for the quit hotkey.

use bevy::prelude::*;

use super::quit_on_escape;

fn quit_app() -> App {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .add_systems(Update, quit_on_escape);
    app
}

#[test]
fn test_escape_requests_clean_exit() {
    let mut app = quit_app();
    app.update();
    assert!(app.should_exit().is_none());

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();

    assert_eq!(app.should_exit(), Some(AppExit::Success));
}

#[test]
fn test_other_keys_do_not_quit() {
    let mut app = quit_app();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    app.update();

    assert!(app.should_exit().is_none());
}
