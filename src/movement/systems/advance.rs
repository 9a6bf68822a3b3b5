//! Movement domain: fixed-tick player update.

use bevy::prelude::*;

use crate::map::Level;
use crate::movement::{Abilities, Action, Body, InputIntent, MovementTuning, Player, step};

pub(crate) fn advance_player(
    input: Res<InputIntent>,
    level: Res<Level>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Body, &mut Abilities), With<Player>>,
) {
    for (mut body, mut abilities) in &mut query {
        let report = step(&mut body, &mut abilities, *input, &level.grid, &tuning);

        match report.intent.action {
            Some(Action::Jump) => {
                debug!("Jump from ({:.2}, {:.2})", body.position.x, body.position.y)
            }
            Some(Action::WallJump(side)) => debug!("Wall jump off {:?} wall", side),
            Some(Action::Dash(side)) => debug!("Dash {:?}, dash charge consumed", side),
            None => {}
        }
        if report.landed {
            debug!(
                "Landed at ({:.2}, {:.2}), dash recharges",
                body.position.x, body.position.y
            );
        }
    }
}
