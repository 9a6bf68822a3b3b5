//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::InputIntent;

pub(crate) fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputIntent>) {
    let held = |keys: &[KeyCode]| keys.iter().any(|key| keyboard.pressed(*key));

    *input = InputIntent {
        left: held(&[KeyCode::ArrowLeft, KeyCode::KeyA]),
        right: held(&[KeyCode::ArrowRight, KeyCode::KeyD]),
        jump: held(&[KeyCode::Space, KeyCode::ArrowUp, KeyCode::KeyW]),
        dash_left: held(&[KeyCode::KeyZ, KeyCode::KeyQ]),
        dash_right: held(&[KeyCode::KeyX, KeyCode::KeyE]),
    };
}
