use std::collections::HashMap;

use crate::ids::VariableId;
use crate::variable::Variable;

/// Name -> variable-id index over one collection's variables.
///
/// Cross-layer resolution looks targets up by exact generated name, so the
/// index is case-sensitive. First insertion wins on duplicate names.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    map: HashMap<String, VariableId>,
}

impl NameIndex {
    pub fn new<'a, I>(variables: I) -> Self
    where
        I: IntoIterator<Item = &'a Variable>,
    {
        let mut map = HashMap::new();
        for variable in variables {
            map.entry(variable.name.clone())
                .or_insert_with(|| variable.id.clone());
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&VariableId> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
