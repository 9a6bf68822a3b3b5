//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Side;

/// Movement constants. Velocities are in world units (cells) per tick at the
/// fixed 60 Hz rate; decay values are interpolation weights in `[0, 1]`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Player box size in cells. Must not exceed one cell on either axis.
    pub width: f32,
    pub height: f32,
    /// Probe offset keeping edge samples off exact cell boundaries.
    pub epsilon: f32,

    pub gravity: f32,
    /// Gravity multiplier while rising without holding jump.
    pub heavy_gravity: f32,

    pub ground_speed: f32,
    /// Fraction of horizontal velocity kept per grounded tick when braking or idle.
    pub grounded_decay: f32,
    pub max_speed: f32,
    /// Weight pulling grounded speed back toward `max_speed`.
    pub max_x_decay: f32,

    pub air_speed: f32,
    /// Fraction of horizontal velocity lost per airborne tick.
    pub air_speed_decay: f32,

    pub jump_power: f32,
    pub wall_jump_power_x: f32,
    pub wall_jump_power_y: f32,

    pub dash_power: f32,
    pub dash_power_y_bump: f32,

    pub wall_slide_speed: f32,
    pub wall_slide_decay: f32,
    /// Horizontal speeds below this are zeroed while airborne against a wall.
    pub wall_stick_threshold: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            width: 0.8,
            height: 0.8,
            epsilon: 0.01,
            gravity: 0.015,
            heavy_gravity: 2.0,
            ground_speed: 0.02,
            grounded_decay: 0.85,
            max_speed: 0.2,
            max_x_decay: 0.2,
            air_speed: 0.006,
            air_speed_decay: 0.02,
            jump_power: 0.3,
            wall_jump_power_x: 0.2,
            wall_jump_power_y: 0.28,
            dash_power: 0.45,
            dash_power_y_bump: 0.1,
            wall_slide_speed: 0.08,
            wall_slide_decay: 0.3,
            wall_stick_threshold: 0.0175,
        }
    }
}

/// A tuning value outside its accepted range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tuning field '{}' = {} (expected {})",
            self.field, self.value, self.expected
        )
    }
}

impl MovementTuning {
    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check every value against the range the collision sweep relies on.
    pub fn validate(&self) -> Vec<TuningError> {
        let mut errors = Vec::new();

        let mut check = |field: &'static str, value: f32, ok: bool, expected: &'static str| {
            if !value.is_finite() || !ok {
                errors.push(TuningError {
                    field,
                    value,
                    expected,
                });
            }
        };

        check("width", self.width, self.width > 0.0 && self.width <= 1.0, "0 < width <= 1");
        check(
            "height",
            self.height,
            self.height > 0.0 && self.height <= 1.0,
            "0 < height <= 1",
        );
        check(
            "epsilon",
            self.epsilon,
            self.epsilon > 0.0 && self.epsilon < self.width.min(self.height) / 4.0,
            "0 < epsilon < min(width, height) / 4",
        );

        for (field, value) in [
            ("grounded_decay", self.grounded_decay),
            ("max_x_decay", self.max_x_decay),
            ("air_speed_decay", self.air_speed_decay),
            ("wall_slide_decay", self.wall_slide_decay),
        ] {
            check(field, value, (0.0..=1.0).contains(&value), "0 <= value <= 1");
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("heavy_gravity", self.heavy_gravity),
            ("ground_speed", self.ground_speed),
            ("max_speed", self.max_speed),
            ("air_speed", self.air_speed),
            ("jump_power", self.jump_power),
            ("wall_jump_power_x", self.wall_jump_power_x),
            ("wall_jump_power_y", self.wall_jump_power_y),
            ("dash_power", self.dash_power),
            ("dash_power_y_bump", self.dash_power_y_bump),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_stick_threshold", self.wall_stick_threshold),
        ] {
            check(field, value, value >= 0.0, "value >= 0");
        }

        errors
    }
}

/// Held keys for the current tick. Sampled fresh every tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash_left: bool,
    pub dash_right: bool,
}

impl InputIntent {
    /// Net horizontal direction: -1, 0 or +1. Opposing keys cancel.
    pub fn axis(&self) -> f32 {
        let mut x = 0.0;
        if self.left {
            x -= 1.0;
        }
        if self.right {
            x += 1.0;
        }
        x
    }

    /// Whether the player is holding toward `side`.
    pub fn holds(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
