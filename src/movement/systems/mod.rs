//! Movement domain: system modules for locomotion updates.

pub(crate) mod advance;
pub(crate) mod input;

pub(crate) use advance::advance_player;
pub(crate) use input::sample_input;
