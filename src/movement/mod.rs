//! Movement domain: grid-collided platformer kinematics for the player.
//!
//! Each fixed tick runs two stages in order on the same `Body`:
//! [`resolve_intent`] turns held keys into velocity and ability changes, then
//! [`integrate`] sweeps the body through the tile grid. [`step`] runs both.

mod bootstrap;
mod components;
mod intent;
mod probes;
mod resources;
mod step;
mod sweep;
mod systems;


pub use components::{Abilities, Body, DashCharge, Player, Side, Trigger};
pub use intent::{Action, IntentReport, resolve_intent};
pub use resources::{InputIntent, MovementTuning, TuningError};
pub use step::{TickReport, step};
pub use sweep::{Contacts, MAX_SUBSTEP, SweepReport, integrate};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{advance_player, sample_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<InputIntent>()
            .add_systems(OnEnter(GameState::Running), spawn_player)
            .add_systems(
                FixedUpdate,
                (sample_input, advance_player)
                    .chain()
                    .run_if(in_state(GameState::Running)),
            );
    }
}
