//! Loader for the level layout (JSON) and movement tuning (RON).

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::MapLayoutDef;
use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a level layout from JSON text.
pub fn parse_level(file: &str, contents: &str) -> Result<MapLayoutDef, ContentLoadError> {
    serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Parse movement tuning from RON text. Omitted fields keep their defaults.
pub fn parse_tuning(file: &str, contents: &str) -> Result<MovementTuning, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_level(path: &Path) -> Result<MapLayoutDef, ContentLoadError> {
    let contents = read_file(path)?;
    parse_level(&path.display().to_string(), &contents)
}

pub fn load_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let contents = read_file(path)?;
    parse_tuning(&path.display().to_string(), &contents)
}
