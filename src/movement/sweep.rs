//! Movement domain: swept integration of velocity against the tile grid.

use bevy::prelude::*;

use crate::map::TileGrid;
use crate::movement::{Body, MovementTuning};

/// Largest displacement applied on one axis before collision is re-tested.
/// Keeps a sub-cell body from skipping over a one-cell wall.
pub const MAX_SUBSTEP: f32 = 1.0;

/// Which sides stopped the body during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub floor: bool,
    pub ceiling: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Loop iterations taken. Each iteration moves both axes at most
    /// [`MAX_SUBSTEP`].
    pub substeps: u32,
    pub contacts: Contacts,
}

/// Advance the body by its velocity, vertical axis first within each
/// sub-step. On contact the axis's remaining displacement and velocity are
/// zeroed and the body is snapped flush against the cell it hit.
pub fn integrate(body: &mut Body, grid: &TileGrid, tuning: &MovementTuning) -> SweepReport {
    let mut report = SweepReport::default();

    if !body.velocity.is_finite() {
        warn!(
            "Discarding non-finite velocity {:?} at {:?}",
            body.velocity, body.position
        );
        body.velocity = Vec2::ZERO;
        return report;
    }

    let epsilon = tuning.epsilon;
    let size = body.size();
    let mut remaining = body.velocity;

    while remaining != Vec2::ZERO {
        report.substeps += 1;

        if remaining.y != 0.0 {
            let step = remaining.y.clamp(-MAX_SUBSTEP, MAX_SUBSTEP);
            body.position.y += step;
            remaining.y -= step;

            let corners = body.corners(epsilon);
            let snapped = if step > 0.0 {
                nearest_hit(grid, corners.into_iter().chain(body.feet(epsilon)), |p| p.y)
                    .map(|hit| hit.y.floor() - size.y)
            } else {
                nearest_hit(grid, corners.into_iter().chain(body.head(epsilon)), |p| -p.y)
                    .map(|hit| hit.y.floor() + 1.0)
            };

            if let Some(y) = snapped {
                body.position.y = y;
                body.velocity.y = 0.0;
                remaining.y = 0.0;
                if step > 0.0 {
                    report.contacts.floor = true;
                } else {
                    report.contacts.ceiling = true;
                }
            }
        }

        if remaining.x != 0.0 {
            let step = remaining.x.clamp(-MAX_SUBSTEP, MAX_SUBSTEP);
            body.position.x += step;
            remaining.x -= step;

            let corners = body.corners(epsilon);
            let snapped = if step > 0.0 {
                nearest_hit(grid, corners.into_iter().chain(body.right_side(epsilon)), |p| p.x)
                    .map(|hit| hit.x.floor() - size.x)
            } else {
                nearest_hit(grid, corners.into_iter().chain(body.left_side(epsilon)), |p| -p.x)
                    .map(|hit| hit.x.floor() + 1.0)
            };

            if let Some(x) = snapped {
                body.position.x = x;
                body.velocity.x = 0.0;
                remaining.x = 0.0;
                if step > 0.0 {
                    report.contacts.right = true;
                } else {
                    report.contacts.left = true;
                }
            }
        }
    }

    report
}

/// The solid sample point met first along the direction of travel, i.e. the
/// one with the smallest `distance`.
fn nearest_hit(
    grid: &TileGrid,
    points: impl IntoIterator<Item = Vec2>,
    distance: impl Fn(Vec2) -> f32,
) -> Option<Vec2> {
    points
        .into_iter()
        .filter(|p| grid.is_solid_at(*p))
        .min_by(|a, b| distance(*a).total_cmp(&distance(*b)))
}
