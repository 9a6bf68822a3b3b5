//! Core domain: top-level game state.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Level and tuning are being loaded. Nothing simulates.
    #[default]
    Loading,
    Running,
}
