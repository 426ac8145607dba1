use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scales::ScaleType;

/// The color collaborator: given a palette, a ladder step, and a scale key,
/// produce an uppercase 6-digit hex color. Implementations may decline a
/// combination by returning `None`; generation skips those variables.
pub trait PaletteSource {
    fn color(&self, palette_id: &str, step: u16, scale: ScaleType) -> Option<String>;
}

/// A table-backed palette source, loaded from the brand manifest's palette
/// tables. The host plugin substitutes its own computing implementation in
/// production; this one serves tests and offline configurations.
///
/// Step keys are strings because the tables arrive from TOML/JSON maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteTable {
    palettes: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>,
}

impl PaletteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        palette_id: impl Into<String>,
        step: u16,
        scale: ScaleType,
        hex: impl Into<String>,
    ) {
        self.palettes
            .entry(palette_id.into())
            .or_default()
            .entry(step.to_string())
            .or_default()
            .insert(scale.key().to_string(), hex.into());
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn palette_ids(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>> for PaletteTable {
    fn from(palettes: BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>) -> Self {
        Self { palettes }
    }
}

impl PaletteSource for PaletteTable {
    fn color(&self, palette_id: &str, step: u16, scale: ScaleType) -> Option<String> {
        self.palettes
            .get(palette_id)?
            .get(&step.to_string())?
            .get(scale.key())
            .cloned()
    }
}
