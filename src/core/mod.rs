//! Core domain: game state, tick rate, camera and the quit hotkey.

mod state;

#[cfg(test)]
mod tests;

pub use state::GameState;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

/// Fixed simulation rate. Every movement tuning value is expressed per tick
/// at this rate.
pub const TICK_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, quit_on_escape);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn quit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, quitting");
        exit.write(AppExit::Success);
    }
}
