//! Primitive layer generation: the only layer whose variables hold literal
//! colors. Every (assigned family, ladder step, scale type) combination
//! resolves one color through the palette source.
//!
//! Semi-semantics collections are generated by the same routine; the kinds
//! differ in what downstream layers may depend on, not in how their
//! variables are produced.

use std::collections::BTreeMap;

use dtg_model::{Collection, GroupId, ResolvedType, Variable, VariableId, VariableValue};
use dtg_standards::ScaleType;
use dtg_standards::naming::primitive_variable_name;
use dtg_standards::palette::PaletteSource;
use dtg_standards::steps::STEP_LADDER;

pub fn generate_primitive_variables(
    collection: &Collection,
    source: &dyn PaletteSource,
) -> Vec<Variable> {
    let Some(mode) = collection.default_mode().or_else(|| collection.first_mode()) else {
        tracing::warn!(
            collection = %collection.name,
            "collection declares no modes, nothing to generate"
        );
        return Vec::new();
    };
    let mode_id = mode.id.clone();

    let mut variables = Vec::new();
    for (family, palette_id) in &collection.palette_assignments {
        for step in STEP_LADDER {
            for scale in ScaleType::ALL {
                let Some(hex) = source.color(palette_id, step, scale) else {
                    tracing::warn!(
                        palette = %palette_id,
                        step,
                        scale = scale.key(),
                        "palette source has no color for this combination, skipping"
                    );
                    continue;
                };
                let name = primitive_variable_name(family, step, scale);
                let mut values_by_mode = BTreeMap::new();
                values_by_mode.insert(mode_id.clone(), VariableValue::Color(hex));
                variables.push(Variable {
                    id: VariableId::derived(&collection.id, &name),
                    group_id: GroupId::derived(
                        &collection.id,
                        &collection.group_name_for_variable(&name),
                    ),
                    name,
                    resolved_type: ResolvedType::Color,
                    values_by_mode,
                });
            }
        }
    }
    variables
}
