//! Variable name construction for every generated layer.
//!
//! Names are slash-structured paths; downstream layers find their alias
//! targets by rebuilding the upstream name and looking it up, so these
//! helpers are the single source of truth for the shapes.

use crate::interaction::{BackgroundLevel, FillEmphasis};
use crate::scales::ScaleType;
use crate::steps::{offset_step, root_segment, root_step};

/// Fixed primitives step the appearance layer references.
pub const APPEARANCE_REFERENCE_STEP: u16 = 2500;

/// Primitive and semi-semantic variables: `"{group}/{step}/{Scale}"`.
pub fn primitive_variable_name(group: &str, step: u16, scale: ScaleType) -> String {
    format!("{}/{}/{}", group, step, scale.label())
}

/// Appearance variables: `"[Appearance] {Scale}"`. The appearance roles are
/// the collection's modes, so the name carries only the scale.
pub fn appearance_variable_name(scale: ScaleType) -> String {
    format!("[Appearance] {}", scale.label())
}

/// The primitives variable an appearance role aliases to.
pub fn appearance_target_name(role: &str, scale: ScaleType) -> String {
    primitive_variable_name(role, APPEARANCE_REFERENCE_STEP, scale)
}

/// Color-mode ("root") variables:
/// `"{family}/Semi semantics/{Root segment}/[Colour Mode] {Scale}"`.
pub fn root_variable_name(family: &str, offset: i32, scale: ScaleType) -> String {
    format!(
        "{}/Semi semantics/{}/[Colour Mode] {}",
        family,
        root_segment(offset),
        scale.label()
    )
}

/// The semi-semantic variable a root offset resolves to for one polarity.
pub fn root_target_variable_name(
    family: &str,
    offset: i32,
    scale: ScaleType,
    is_light: bool,
) -> String {
    let step = offset_step(root_step(is_light), offset, is_light);
    primitive_variable_name(family, step, scale)
}

/// Interaction-state variables:
/// `"{family}/{Background}/{Emphasis}/[Interaction] {Scale}"`.
pub fn interaction_variable_name(
    family: &str,
    background: BackgroundLevel,
    emphasis: FillEmphasis,
    scale: ScaleType,
) -> String {
    format!(
        "{}/{}/{}/[Interaction] {}",
        family,
        background.label(),
        emphasis.label(),
        scale.label()
    )
}
