//! Movement domain: player components and ability state.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Kinematic state of an axis-aligned box moving through the tile grid.
///
/// `position` is the top-left corner in world units (y down) and `velocity`
/// is in world units per tick. The size is fixed at construction.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

/// Edge-triggered input buffer. Armed while the key is up, spent by the
/// action it triggers, and only re-armed by releasing the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    #[default]
    Armed,
    Spent,
}

impl Trigger {
    pub fn is_armed(self) -> bool {
        self == Trigger::Armed
    }

    /// Re-arm when the key is not held this tick.
    pub fn rearm_unless(&mut self, held: bool) {
        if !held {
            *self = Trigger::Armed;
        }
    }

    /// Fire if the key is held and armed, spending the trigger.
    pub fn fire(&mut self, held: bool) -> bool {
        if held && self.is_armed() {
            *self = Trigger::Spent;
            true
        } else {
            false
        }
    }
}

/// One dash per airborne session, recharged by standing on ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashCharge {
    #[default]
    Ready,
    Consumed,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Abilities {
    pub jump: Trigger,
    pub dash_left: Trigger,
    pub dash_right: Trigger,
    pub dash: DashCharge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}
