//! Legacy appearance layer: one variable per scale type whose modes are the
//! appearance roles (Neutral, Primary, ...), each aliasing the role's
//! primitive at the fixed reference step.
//!
//! This layer never leaves a hole: a missing primitive target becomes a
//! literal black value instead of a skipped variable, because older
//! consumers distinguish "absent" from "visibly wrong".

use std::collections::BTreeMap;

use dtg_model::{
    AliasRef, Collection, GroupId, NameIndex, ResolvedType, Variable, VariableId, VariableValue,
};
use dtg_standards::ScaleType;
use dtg_standards::naming::{appearance_target_name, appearance_variable_name};

use crate::resolve::resolve_target_mode;

const FALLBACK_BLACK: &str = "#000000";

pub fn generate_appearance_variables(
    collection: &Collection,
    primitives: &Collection,
    primitive_variables: &[Variable],
) -> Vec<Variable> {
    let index = NameIndex::new(primitive_variables);
    let role_target_modes: Vec<_> = collection
        .modes
        .iter()
        .map(|mode| (mode, resolve_target_mode(&mode.name, primitives)))
        .collect();

    let mut variables = Vec::new();
    for scale in ScaleType::ALL {
        let name = appearance_variable_name(scale);
        let mut values_by_mode = BTreeMap::new();
        for (mode, target_mode) in &role_target_modes {
            let target_name = appearance_target_name(&mode.name, scale);
            match index.get(&target_name) {
                Some(target_id) => {
                    values_by_mode.insert(
                        mode.id.clone(),
                        VariableValue::Alias(AliasRef {
                            variable: target_id.clone(),
                            mode: target_mode.clone(),
                        }),
                    );
                }
                None => {
                    tracing::warn!(
                        role = %mode.name,
                        target = %target_name,
                        "missing primitive for appearance role, falling back to black"
                    );
                    values_by_mode.insert(
                        mode.id.clone(),
                        VariableValue::Color(FALLBACK_BLACK.to_string()),
                    );
                }
            }
        }
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
    variables
}
