//! Movement domain: turning a tick's held keys into velocity changes.

use bevy::prelude::*;

use crate::map::TileGrid;
use crate::movement::{Abilities, Body, DashCharge, InputIntent, MovementTuning, Side, Trigger};

/// Ability fired during intent resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    /// Launched away from the wall on this side.
    WallJump(Side),
    /// Dashed toward this side.
    Dash(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentReport {
    pub grounded: bool,
    pub action: Option<Action>,
}

/// Apply one tick of input to the body's velocity and the ability state.
/// Must run exactly once per tick, before [`integrate`](super::integrate).
pub fn resolve_intent(
    body: &mut Body,
    abilities: &mut Abilities,
    input: InputIntent,
    grid: &TileGrid,
    tuning: &MovementTuning,
) -> IntentReport {
    // Releasing a key re-arms its buffer, on the ground or in the air
    abilities.jump.rearm_unless(input.jump);
    abilities.dash_left.rearm_unless(input.dash_left);
    abilities.dash_right.rearm_unless(input.dash_right);

    let grounded = grid.any_solid(body.feet(tuning.epsilon));
    let action = if grounded {
        resolve_grounded(body, abilities, input, tuning)
    } else {
        resolve_airborne(body, abilities, input, grid, tuning)
    };

    IntentReport { grounded, action }
}

fn resolve_grounded(
    body: &mut Body,
    abilities: &mut Abilities,
    input: InputIntent,
    tuning: &MovementTuning,
) -> Option<Action> {
    // Dashes pressed on the ground never carry over into the air
    abilities.dash_left = Trigger::Spent;
    abilities.dash_right = Trigger::Spent;
    abilities.dash = DashCharge::Ready;

    let v = &mut body.velocity;
    let axis = input.axis();
    if axis != 0.0 {
        if v.x * axis < 0.0 {
            v.x *= tuning.grounded_decay;
        }
        v.x += axis * tuning.ground_speed;
    } else {
        v.x *= tuning.grounded_decay;
    }

    let mut action = None;
    if abilities.jump.fire(input.jump) {
        v.y = -tuning.jump_power;
        action = Some(Action::Jump);
    }

    if v.x.abs() > tuning.max_speed {
        let cap = v.x.signum() * tuning.max_speed;
        v.x += (cap - v.x) * tuning.max_x_decay;
    }

    action
}

fn resolve_airborne(
    body: &mut Body,
    abilities: &mut Abilities,
    input: InputIntent,
    grid: &TileGrid,
    tuning: &MovementTuning,
) -> Option<Action> {
    let wall_left = grid.any_solid(body.left_side(tuning.epsilon));
    let wall_right = grid.any_solid(body.right_side(tuning.epsilon));
    let wall = match (wall_left, wall_right) {
        (true, false) => Some(Side::Left),
        (false, true) => Some(Side::Right),
        _ => None,
    };

    let v = &mut body.velocity;
    let mut action = None;

    if let Some(side) = wall
        && abilities.jump.fire(input.jump)
    {
        v.x = -side.sign() * tuning.wall_jump_power_x;
        v.y = -tuning.wall_jump_power_y;
        action = Some(Action::WallJump(side));
    } else if abilities.dash == DashCharge::Ready {
        let left = input.dash_left && abilities.dash_left.is_armed() && !wall_left;
        let right = input.dash_right && abilities.dash_right.is_armed() && !wall_right;
        let side = match (left, right) {
            (true, false) => Some(Side::Left),
            (false, true) => Some(Side::Right),
            _ => None,
        };
        if let Some(side) = side {
            match side {
                Side::Left => abilities.dash_left = Trigger::Spent,
                Side::Right => abilities.dash_right = Trigger::Spent,
            }
            abilities.dash = DashCharge::Consumed;
            v.x = side.sign() * tuning.dash_power;
            v.y -= tuning.dash_power_y_bump;
            action = Some(Action::Dash(side));
        }
    }

    if action.is_none() {
        if input.jump || v.y > 0.0 {
            v.y += tuning.gravity;
        } else {
            v.y += tuning.gravity * tuning.heavy_gravity;
        }
    }

    let sliding =
        (wall_left && input.holds(Side::Left)) || (wall_right && input.holds(Side::Right));
    if sliding && v.y > tuning.wall_slide_speed {
        v.y += (tuning.wall_slide_speed - v.y) * tuning.wall_slide_decay;
    }
    v.x += input.axis() * tuning.air_speed;

    v.x *= 1.0 - tuning.air_speed_decay;

    if (wall_left || wall_right) && v.x.abs() < tuning.wall_stick_threshold {
        v.x = 0.0;
    }

    action
}
