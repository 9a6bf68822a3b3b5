//! Movement domain: player spawn at level start.

use bevy::prelude::*;

use crate::map::Level;
use crate::movement::{Abilities, Body, MovementTuning, Player};

/// Spawn the player at the level's spawn point. Runs on entering
/// `GameState::Running`, once the level and tuning are loaded.
pub(crate) fn spawn_player(
    mut commands: Commands,
    level: Res<Level>,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player at ({}, {}) with size {}x{}",
        level.spawn.x, level.spawn.y, tuning.width, tuning.height
    );

    commands.spawn((
        Player,
        Body::new(level.spawn, tuning.body_size()),
        Abilities::default(),
    ));
}
