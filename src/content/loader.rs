//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelDef;
use super::validation::validate_level;
use crate::core::GameTuning;

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

/// Parse a single RON struct; `file` is only used for error context.
pub fn parse_ron<T>(contents: &str, file: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse and validate a level definition.
pub fn parse_level(contents: &str, file: &str) -> Result<LevelDef, ContentLoadError> {
    let level: LevelDef = parse_ron(contents, file)?;

    let errors = validate_level(&level);
    if !errors.is_empty() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!("Validation failed: {}", message),
        });
    }

    Ok(level)
}

/// Load `data/tuning.ron` under `base_path`.
pub fn load_tuning(base_path: &Path) -> Result<GameTuning, ContentLoadError> {
    let path = base_path.join("data").join("tuning.ron");
    let contents = read_file(&path)?;
    parse_ron(&contents, &path.display().to_string())
}

/// Load `levels/<name>.ron` under `base_path`.
pub fn load_level(base_path: &Path, name: &str) -> Result<LevelDef, ContentLoadError> {
    let path = base_path.join("levels").join(format!("{}.ron", name));
    let contents = read_file(&path)?;
    parse_level(&contents, &path.display().to_string())
}
