//! Presentation domain: tests for level sprites and coordinate mapping.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::{PresentationConfig, TileSprite, spawn_level_sprites, world_to_screen};
use crate::map::{Level, TileGrid};

fn tile_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<TileSprite>>()
        .iter(app.world())
        .count()
}

#[test]
fn test_world_to_screen_flips_y() {
    assert_eq!(world_to_screen(Vec2::new(2.0, 3.0), 32.0), Vec2::new(64.0, -96.0));
}

#[test]
fn test_level_sprites_cover_non_empty_cells_once() {
    let mut app = App::new();
    app.init_resource::<PresentationConfig>().insert_resource(Level {
        grid: TileGrid::from_rows(&["####", "#.$#", "####"]),
        spawn: Vec2::new(1.1, 1.1),
    });

    app.world_mut().run_system_once(spawn_level_sprites).unwrap();
    assert_eq!(tile_count(&mut app), 11);

    // Re-entering replaces the tiles instead of stacking a second set
    app.world_mut().run_system_once(spawn_level_sprites).unwrap();
    assert_eq!(tile_count(&mut app), 11);
}
