//! Level catalog.
//!
//! Per-level spawn and asset configuration, deserialized from JSON:
//!
//! ```json
//! {
//!   "levels": [
//!     { "name": "paint", "phase": "painting", "spawn": [0, 0.5, 0], "asset_group": "level1" },
//!     { "name": "race", "phase": "sorting", "spawn": [0, 0.5, 0], "asset_group": "level2" }
//!   ]
//! }
//! ```
//!
//! The level count is the catalog length.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::resources::level::LevelPhase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub phase: LevelPhase,
    /// Spawn point of the controlled actor.
    pub spawn: Vec3,
    /// Name of the group holding this level's assets.
    pub asset_group: String,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCatalog {
    pub levels: Vec<LevelDef>,
}

impl Default for LevelCatalog {
    /// One painting level followed by one sorting level.
    fn default() -> Self {
        Self {
            levels: vec![
                LevelDef {
                    name: "paint".into(),
                    phase: LevelPhase::Painting,
                    spawn: Vec3::new(0.0, 0.5, 0.0),
                    asset_group: "level1".into(),
                },
                LevelDef {
                    name: "race".into(),
                    phase: LevelPhase::Sorting,
                    spawn: Vec3::new(0.0, 0.5, 0.0),
                    asset_group: "level2".into(),
                },
            ],
        }
    }
}

impl LevelCatalog {
    pub fn from_json(text: &str) -> Result<Self, SetupError> {
        let catalog: LevelCatalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.levels.is_empty() {
            return Err(SetupError::EmptyCatalog);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Definition of a 1-based level. Out-of-range indices are clamped.
    pub fn get(&self, level: usize) -> Option<&LevelDef> {
        if self.levels.is_empty() {
            return None;
        }
        let index = level.clamp(1, self.levels.len()) - 1;
        self.levels.get(index)
    }

    pub fn phase_for(&self, level: usize) -> LevelPhase {
        self.get(level).map(|def| def.phase).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_catalog() {
        let catalog = LevelCatalog::from_json(
            r#"{"levels": [
                {"name": "a", "phase": "painting", "spawn": [0, 1, 2], "asset_group": "g1"},
                {"name": "b", "phase": "sorting", "spawn": [0, 1, 3], "asset_group": "g2"},
                {"name": "c", "phase": "sorting", "spawn": [0, 1, 4], "asset_group": "g3"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.phase_for(2), LevelPhase::Sorting);
        assert_eq!(catalog.get(3).unwrap().spawn, Vec3::new(0.0, 1.0, 4.0));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            LevelCatalog::from_json(r#"{"levels": []}"#),
            Err(SetupError::EmptyCatalog)
        ));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        assert!(matches!(
            LevelCatalog::from_json("{ not json"),
            Err(SetupError::Catalog(_))
        ));
    }

    #[test]
    fn lookup_clamps_level_index() {
        let catalog = LevelCatalog::default();
        assert_eq!(catalog.get(0).unwrap().name, "paint");
        assert_eq!(catalog.get(7).unwrap().name, "race");
    }
}
