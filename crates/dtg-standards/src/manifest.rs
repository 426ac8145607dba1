#![deny(unsafe_code)]

//! TOML brand manifest: the declarative description of a brand, its
//! collections, and its palette tables.
//!
//! ```toml
//! [brand]
//! id = "acme"
//! name = "Acme"
//!
//! [[collections]]
//! name = "Primitives"
//! kind = "primitives"
//! modes = ["Value"]
//!
//! [collections.palettes]
//! Grey = "Grey-palette"
//!
//! [palettes.Grey-palette.2500]
//! surface = "#FFFFFF"
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use dtg_model::{Brand, Collection, CollectionId, CollectionKind, Mode, ModeId};

use crate::error::StandardsError;
use crate::palette::PaletteTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandManifest {
    pub brand: BrandHeader,
    pub collections: Vec<CollectionEntry>,
    /// Palette id -> step -> scale key -> hex.
    #[serde(default)]
    pub palettes: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandHeader {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub name: String,
    pub kind: CollectionKind,
    pub modes: Vec<String>,
    #[serde(default)]
    pub default_mode: Option<String>,
    /// Group name -> palette id (primitives and semi-semantics).
    #[serde(default)]
    pub palettes: BTreeMap<String, String>,
}

impl BrandManifest {
    /// Build the declared brand, minting deterministic ids from the brand id
    /// and entity names.
    pub fn to_brand(&self) -> Result<Brand, StandardsError> {
        let mut seen = BTreeSet::new();
        let mut collections = Vec::with_capacity(self.collections.len());
        for entry in &self.collections {
            if !seen.insert(entry.name.as_str()) {
                return Err(StandardsError::DuplicateCollection {
                    name: entry.name.clone(),
                });
            }
            collections.push(entry.to_collection(&self.brand.id)?);
        }
        Ok(Brand {
            id: self.brand.id.clone(),
            name: self.brand.name.clone(),
            collections,
        })
    }

    pub fn palette_table(&self) -> PaletteTable {
        PaletteTable::from(self.palettes.clone())
    }
}

impl CollectionEntry {
    fn to_collection(&self, brand_id: &str) -> Result<Collection, StandardsError> {
        if self.modes.is_empty() {
            return Err(StandardsError::NoModes {
                collection: self.name.clone(),
            });
        }
        let id = CollectionId::derived(brand_id, &self.name);
        let modes: Vec<Mode> = self
            .modes
            .iter()
            .map(|name| Mode {
                id: ModeId::derived(&id, name),
                name: name.clone(),
            })
            .collect();
        let default_mode_id = match &self.default_mode {
            Some(name) => {
                let mode = modes
                    .iter()
                    .find(|mode| mode.name.eq_ignore_ascii_case(name))
                    .ok_or_else(|| StandardsError::UnknownDefaultMode {
                        collection: self.name.clone(),
                        mode: name.clone(),
                    })?;
                mode.id.clone()
            }
            None => modes[0].id.clone(),
        };
        Ok(Collection {
            id,
            name: self.name.clone(),
            kind: self.kind,
            modes,
            default_mode_id,
            palette_assignments: self.palettes.clone(),
        })
    }
}

pub fn load_brand_manifest(path: &Path) -> Result<BrandManifest, StandardsError> {
    let text = fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })
}
