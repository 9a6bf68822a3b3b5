//! Content domain: loading the level and movement tuning at startup.

mod data;
mod loader;
mod validation;


pub use data::{CELL_EMPTY, CELL_SOLID, CELL_SPECIAL, MapLayoutDef};
pub use loader::{ContentLoadError, load_level, load_tuning, parse_level, parse_tuning};
pub use validation::{LayoutError, build_level, validate_layout};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::PathBuf;

use crate::core::GameState;
use crate::map::Level;
use crate::movement::{MovementTuning, TuningError};

/// Where the content files live.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub level: PathBuf,
    pub tuning: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            level: PathBuf::from("assets/data/level.json"),
            tuning: PathBuf::from("assets/data/movement.ron"),
        }
    }
}

/// Any failure that keeps the simulation from starting.
#[derive(Debug)]
pub enum ContentError {
    Load(ContentLoadError),
    Tuning(TuningError),
    Layout(LayoutError),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Load(e) => write!(f, "{}", e),
            ContentError::Tuning(e) => write!(f, "Invalid movement tuning: {}", e),
            ContentError::Layout(e) => write!(f, "Invalid level layout: {}", e),
        }
    }
}

/// Load, validate and build everything the simulation needs. Both files are
/// read before failing, so a missing level and a missing tuning file are
/// reported together.
pub fn load_all_content(
    paths: &ContentPaths,
) -> Result<(Level, MovementTuning), Vec<ContentError>> {
    let tuning = load_tuning(&paths.tuning).map_err(ContentError::Load);
    let layout = load_level(&paths.level).map_err(ContentError::Load);

    match (tuning, layout) {
        (Ok(tuning), Ok(layout)) => {
            let tuning_errors = tuning.validate();
            if !tuning_errors.is_empty() {
                return Err(tuning_errors.into_iter().map(ContentError::Tuning).collect());
            }
            build_level(&layout, &tuning)
                .map(|level| (level, tuning))
                .map_err(|errors| errors.into_iter().map(ContentError::Layout).collect())
        }
        (tuning, layout) => Err(tuning.err().into_iter().chain(layout.err()).collect()),
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(Startup, load_content);
    }
}

fn load_content(
    mut commands: Commands,
    paths: Res<ContentPaths>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    match load_all_content(&paths) {
        Ok((level, tuning)) => {
            info!(
                "Loaded level {}x{} from {}, spawn at ({}, {})",
                level.grid.width(),
                level.grid.height(),
                paths.level.display(),
                level.spawn.x,
                level.spawn.y
            );
            commands.insert_resource(level);
            commands.insert_resource(tuning);
            next_state.set(GameState::Running);
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            error!(
                "Content failed to load ({} errors), not starting the simulation",
                errors.len()
            );
            exit.write(AppExit::error());
        }
    }
}
