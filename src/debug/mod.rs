//! Debug domain: developer overlay with the frame rate and player kinematics.
//!
//! Only compiled with the `dev-tools` feature.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::movement::{Body, Player};

#[cfg(test)]
mod tests;

/// Shows and hides the info overlay.
pub const OVERLAY_TOGGLE: KeyCode = KeyCode::F10;

#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the info overlay (FPS, position, velocity) is visible
    pub show_info: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_info: true }
    }
}

/// Marker for the info overlay text.
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, update_debug_info_overlay).chain(),
        );
    }
}

fn toggle_debug_info(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(OVERLAY_TOGGLE) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "Debug info {}",
            if debug_state.show_info { "shown" } else { "hidden" }
        );
    }
}

/// Overlay contents for one frame. The FPS reading is missing until the
/// diagnostic has a few samples.
pub fn debug_info_text(fps: Option<f64>, body: Option<&Body>) -> String {
    let mut text = match fps {
        Some(fps) => format!("FPS: {:.0}", fps),
        None => "FPS: --".to_string(),
    };
    if let Some(body) = body {
        text.push_str(&format!(
            "\nPos: ({:.2}, {:.2})\nVel: ({:.3}, {:.3})",
            body.position.x, body.position.y, body.velocity.x, body.velocity.y
        ));
    }
    text
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    diagnostics: Res<DiagnosticsStore>,
    player: Query<&Body, With<Player>>,
    mut overlay: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in &overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    let contents = debug_info_text(fps, player.iter().next());

    match overlay.single_mut() {
        Ok((_, mut text)) => {
            if text.0 != contents {
                text.0 = contents;
            }
        }
        Err(_) => spawn_debug_info_overlay(&mut commands, contents),
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands, contents: String) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(contents),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.5, 0.9, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}
