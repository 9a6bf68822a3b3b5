//! Movement domain: the per-tick pipeline.

use crate::map::TileGrid;
use crate::movement::{
    Abilities, Body, InputIntent, IntentReport, MovementTuning, SweepReport, integrate,
    resolve_intent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub intent: IntentReport,
    pub sweep: SweepReport,
    /// Touched down this tick after starting it airborne.
    pub landed: bool,
}

/// Run one full tick: intent resolution, then swept integration against the
/// velocity it produced.
pub fn step(
    body: &mut Body,
    abilities: &mut Abilities,
    input: InputIntent,
    grid: &TileGrid,
    tuning: &MovementTuning,
) -> TickReport {
    let intent = resolve_intent(body, abilities, input, grid, tuning);
    let sweep = integrate(body, grid, tuning);
    TickReport {
        intent,
        sweep,
        landed: !intent.grounded && sweep.contacts.floor,
    }
}
