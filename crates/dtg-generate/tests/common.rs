//! Shared fixtures for generation tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeMap;

use dtg_model::{
    Collection, CollectionId, CollectionKind, GroupId, Mode, ModeId, ResolvedType, Variable,
    VariableId, VariableValue,
};
use dtg_standards::ScaleType;
use dtg_standards::palette::PaletteSource;

pub const BRAND_ID: &str = "brand-test";

pub fn collection(name: &str, kind: CollectionKind, mode_names: &[&str]) -> Collection {
    collection_with_palettes(name, kind, mode_names, &[])
}

pub fn collection_with_palettes(
    name: &str,
    kind: CollectionKind,
    mode_names: &[&str],
    palettes: &[(&str, &str)],
) -> Collection {
    let id = CollectionId::derived(BRAND_ID, name);
    let modes: Vec<Mode> = mode_names
        .iter()
        .map(|mode_name| Mode {
            id: ModeId::derived(&id, mode_name),
            name: (*mode_name).to_string(),
        })
        .collect();
    let default_mode_id = modes[0].id.clone();
    Collection {
        id,
        name: name.to_string(),
        kind,
        modes,
        default_mode_id,
        palette_assignments: palettes
            .iter()
            .map(|(group, palette)| ((*group).to_string(), (*palette).to_string()))
            .collect(),
    }
}

/// A literal color variable under the collection's default mode, for
/// hand-building upstream layers.
pub fn literal_variable(owner: &Collection, name: &str) -> Variable {
    let mut values_by_mode = BTreeMap::new();
    values_by_mode.insert(
        owner.default_mode_id.clone(),
        VariableValue::Color("#123456".to_string()),
    );
    Variable {
        id: VariableId::derived(&owner.id, name),
        name: name.to_string(),
        resolved_type: ResolvedType::Color,
        group_id: GroupId::derived(&owner.id, &owner.group_name_for_variable(name)),
        values_by_mode,
    }
}

/// Palette source that answers every query with the same color.
pub struct SolidSource(pub &'static str);

impl PaletteSource for SolidSource {
    fn color(&self, _palette_id: &str, _step: u16, _scale: ScaleType) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Palette source that counts how many times it is queried.
#[derive(Default)]
pub struct CountingSource {
    pub calls: Cell<usize>,
}

impl PaletteSource for CountingSource {
    fn color(&self, _palette_id: &str, _step: u16, _scale: ScaleType) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        Some("#808080".to_string())
    }
}
