//! Interaction-state layer: Idle/Hover/Pressed/Focus variables over every
//! (family, background level, fill emphasis, scale) combination, aliasing
//! into the color-mode roots. Each state resolves its own offset, so one
//! missing root skips only that state's value.

use std::collections::BTreeMap;

use dtg_model::{
    AliasRef, Collection, GroupId, NameIndex, ResolvedType, Variable, VariableId, VariableValue,
};
use dtg_standards::naming::{interaction_variable_name, root_variable_name};
use dtg_standards::{BackgroundLevel, FillEmphasis, InteractionState, ScaleType};

use crate::resolve::resolve_target_mode;

pub fn generate_interaction_variables(
    collection: &Collection,
    color_mode: &Collection,
    color_mode_variables: &[Variable],
    families: &[String],
) -> Vec<Variable> {
    let index = NameIndex::new(color_mode_variables);

    // Pair each declared state mode with its alias target mode up front;
    // states the collection does not declare are reported once, not per
    // combination.
    let mut states = Vec::new();
    for state in InteractionState::ALL {
        match collection.mode_named(state.label()) {
            Some(mode) => {
                let target_mode = resolve_target_mode(&mode.name, color_mode);
                states.push((state, mode.id.clone(), target_mode));
            }
            None => {
                tracing::warn!(
                    collection = %collection.name,
                    state = state.label(),
                    "interaction collection does not declare this state mode"
                );
            }
        }
    }
    if states.is_empty() {
        return Vec::new();
    }

    let mut variables = Vec::new();
    for family in families {
        for background in BackgroundLevel::ALL {
            for emphasis in FillEmphasis::ALL {
                let base = emphasis.base_offset();
                for scale in ScaleType::ALL {
                    let mut values_by_mode = BTreeMap::new();
                    for (state, mode_id, target_mode) in &states {
                        let offset = base + state.offset_delta();
                        let target_name = root_variable_name(family, offset, scale);
                        let Some(target_id) = index.get(&target_name) else {
                            tracing::warn!(
                                family = %family,
                                state = state.label(),
                                target = %target_name,
                                "root variable missing for interaction state, skipping value"
                            );
                            continue;
                        };
                        values_by_mode.insert(
                            mode_id.clone(),
                            VariableValue::Alias(AliasRef {
                                variable: target_id.clone(),
                                mode: target_mode.clone(),
                            }),
                        );
                    }
                    if values_by_mode.is_empty() {
                        // Every state missed its target; the per-state warnings
                        // above already said why.
                        continue;
                    }
                    let name = interaction_variable_name(family, background, emphasis, scale);
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
    }
    variables
}
