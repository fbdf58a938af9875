//! Centralized layout/animation options with TOML preset support.
//!
//! Every tweakable constant (formation spacing and radii, transition
//! duration and easing, scatter extent, ingest column mapping) lives here.
//! Options serialize to/from TOML so presets can be stored next to the
//! data they are used with.

mod animation;
mod ingest;
mod layout;
mod scatter;

use std::path::Path;

pub use animation::AnimationOptions;
pub use ingest::IngestOptions;
pub use layout::{
    GridOptions, HelixOptions, HelixVariant, LayoutOptions, SphereOptions,
    TableOptions,
};
pub use scatter::ScatterOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TilescapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[layout.table]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Formation geometry.
    pub layout: LayoutOptions,
    /// Transition timing.
    pub animation: AnimationOptions,
    /// Initial random placement.
    pub scatter: ScatterOptions,
    /// Row-to-tile column mapping.
    #[schemars(skip)]
    pub ingest: IngestOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TilescapeError> {
        let content =
            std::fs::read_to_string(path).map_err(TilescapeError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TilescapeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TilescapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TilescapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TilescapeError::Io)?;
        }
        std::fs::write(path, content).map_err(TilescapeError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
