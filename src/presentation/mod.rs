//! Presentation domain: sprites for the level and player, and the follow camera.
//!
//! World units are grid cells with y growing down; screen space is pixels
//! with y growing up.

use bevy::prelude::*;

#[cfg(test)]
mod tests;

use crate::core::GameState;
use crate::map::{CellState, Level};
use crate::movement::{Abilities, Body, DashCharge, Player};
#[cfg(feature = "dev-tools")]
use crate::movement::MovementTuning;

#[derive(Resource, Debug, Clone)]
pub struct PresentationConfig {
    /// Pixels per world unit.
    pub cell_size: f32,
    /// Fraction of the remaining distance the camera closes each frame.
    pub camera_ease: f32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            cell_size: 32.0,
            camera_ease: 0.1,
        }
    }
}

/// Marker for tile sprites.
#[derive(Component, Debug)]
pub struct TileSprite;

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PresentationConfig>()
            .add_systems(OnEnter(GameState::Running), spawn_level_sprites)
            .add_systems(
                Update,
                (attach_player_sprite, sync_player_sprite, follow_camera)
                    .chain()
                    .run_if(in_state(GameState::Running)),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, draw_probes.run_if(in_state(GameState::Running)));
    }
}

/// Screen position of a world point.
pub fn world_to_screen(point: Vec2, cell_size: f32) -> Vec2 {
    Vec2::new(point.x * cell_size, -point.y * cell_size)
}

/// Spawn one sprite per non-empty cell, replacing any tiles left from an
/// earlier level.
fn spawn_level_sprites(
    mut commands: Commands,
    level: Res<Level>,
    config: Res<PresentationConfig>,
    existing: Query<Entity, With<TileSprite>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let size = Vec2::splat(config.cell_size);
    let mut count = 0;

    for (x, y, cell) in level.grid.cells() {
        let color = match cell {
            CellState::Empty => continue,
            CellState::Solid => Color::srgb(0.15, 0.15, 0.2),
            CellState::Special => Color::srgb(0.95, 0.8, 0.2),
        };
        let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        commands.spawn((
            TileSprite,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(world_to_screen(center, config.cell_size).extend(0.0)),
        ));
        count += 1;
    }

    info!("Spawned {} tile sprites", count);
}

fn player_color(abilities: &Abilities) -> Color {
    match abilities.dash {
        DashCharge::Ready => Color::srgb(0.9, 0.2, 0.2),
        DashCharge::Consumed => Color::srgb(0.55, 0.3, 0.3),
    }
}

/// Give a freshly spawned player its sprite.
fn attach_player_sprite(
    mut commands: Commands,
    config: Res<PresentationConfig>,
    query: Query<(Entity, &Body, &Abilities), (With<Player>, Without<Sprite>)>,
) {
    for (entity, body, abilities) in &query {
        commands.entity(entity).insert((
            Sprite {
                color: player_color(abilities),
                custom_size: Some(body.size() * config.cell_size),
                ..default()
            },
            Transform::from_translation(
                world_to_screen(body.center(), config.cell_size).extend(1.0),
            ),
        ));
    }
}

fn sync_player_sprite(
    config: Res<PresentationConfig>,
    mut query: Query<(&Body, &Abilities, &mut Transform, &mut Sprite), With<Player>>,
) {
    for (body, abilities, mut transform, mut sprite) in &mut query {
        let screen = world_to_screen(body.center(), config.cell_size);
        transform.translation.x = screen.x;
        transform.translation.y = screen.y;
        sprite.color = player_color(abilities);
    }
}

fn follow_camera(
    config: Res<PresentationConfig>,
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let target = target.translation.truncate();
    let current = camera.translation.truncate();
    let eased = current + (target - current) * config.camera_ease;
    camera.translation.x = eased.x;
    camera.translation.y = eased.y;
}

/// Draw the movement sample points, red where the sampled cell is solid.
#[cfg(feature = "dev-tools")]
fn draw_probes(
    mut gizmos: Gizmos,
    level: Res<Level>,
    tuning: Res<MovementTuning>,
    config: Res<PresentationConfig>,
    query: Query<&Body, With<Player>>,
) {
    for body in &query {
        let eps = tuning.epsilon;
        let probes = body
            .feet(eps)
            .into_iter()
            .chain(body.head(eps))
            .chain(body.left_side(eps))
            .chain(body.right_side(eps));

        for point in probes {
            let color = if level.grid.is_solid_at(point) {
                Color::srgb(1.0, 0.1, 0.1)
            } else {
                Color::srgb(0.2, 1.0, 0.4)
            };
            gizmos.circle_2d(world_to_screen(point, config.cell_size), 2.0, color);
        }
    }
}
