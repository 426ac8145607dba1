//! Color-mode layer: per-family "root" variables that pick a different
//! semi-semantic rung per polarity. Light and Dark targets are resolved
//! independently by rebuilding the upstream name for each polarity; a
//! variable is only created when both resolve.

use std::collections::BTreeMap;

use dtg_model::{
    AliasRef, Collection, GroupId, NameIndex, ResolvedType, Variable, VariableId, VariableValue,
};
use dtg_standards::ScaleType;
use dtg_standards::naming::{root_target_variable_name, root_variable_name};
use dtg_standards::steps::ROOT_OFFSET_MAX;

use crate::resolve::resolve_target_mode;

pub fn generate_color_mode_variables(
    collection: &Collection,
    semi_semantics: &Collection,
    semi_variables: &[Variable],
    families: &[String],
) -> Vec<Variable> {
    let Some(light) = collection.mode_named("Light") else {
        tracing::warn!(
            collection = %collection.name,
            "color-mode collection declares no Light mode, nothing to generate"
        );
        return Vec::new();
    };
    let Some(dark) = collection.mode_named("Dark") else {
        tracing::warn!(
            collection = %collection.name,
            "color-mode collection declares no Dark mode, nothing to generate"
        );
        return Vec::new();
    };
    let light_mode = light.id.clone();
    let dark_mode = dark.id.clone();
    let light_target_mode = resolve_target_mode(&light.name, semi_semantics);
    let dark_target_mode = resolve_target_mode(&dark.name, semi_semantics);

    let index = NameIndex::new(semi_variables);
    let mut variables = Vec::new();
    for family in families {
        for offset in 0..=ROOT_OFFSET_MAX {
            for scale in ScaleType::ALL {
                let light_target_name = root_target_variable_name(family, offset, scale, true);
                let dark_target_name = root_target_variable_name(family, offset, scale, false);
                let (Some(light_target), Some(dark_target)) =
                    (index.get(&light_target_name), index.get(&dark_target_name))
                else {
                    // Skip, don't fall back: downstream consumers rely on
                    // absence rather than a placeholder color here.
                    tracing::warn!(
                        family = %family,
                        offset,
                        scale = scale.key(),
                        "root target missing from semi-semantics, skipping variable"
                    );
                    continue;
                };

                let name = root_variable_name(family, offset, scale);
                let mut values_by_mode = BTreeMap::new();
                values_by_mode.insert(
                    light_mode.clone(),
                    VariableValue::Alias(AliasRef {
                        variable: light_target.clone(),
                        mode: light_target_mode.clone(),
                    }),
                );
                values_by_mode.insert(
                    dark_mode.clone(),
                    VariableValue::Alias(AliasRef {
                        variable: dark_target.clone(),
                        mode: dark_target_mode.clone(),
                    }),
                );
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
