//! In-memory store for collections, groups, variables, and alias edges.
//!
//! The graph is pure data with lookup helpers: generation assembly and the
//! interchange importer both build one, and the exporter and presentation
//! layer read from it. Entities are keyed in `BTreeMap`s so every traversal
//! is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Group};
use crate::ids::{CollectionId, GroupId, ModeId, VariableId};
use crate::variable::{Variable, VariableValue, split_name};

/// A directed alias edge from (source variable, source mode) to a target
/// variable, with the target mode unresolved until the resolution pass has
/// matched it by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEdge {
    pub source_variable: VariableId,
    pub source_mode: ModeId,
    pub target_variable: VariableId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_mode: Option<ModeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenGraph {
    collections: BTreeMap<CollectionId, Collection>,
    groups: BTreeMap<GroupId, Group>,
    variables: BTreeMap<VariableId, Variable>,
}

impl TokenGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_collection(&mut self, collection: Collection) {
        self.collections.insert(collection.id.clone(), collection);
    }

    /// Get or create the group with the given name in a collection.
    pub fn ensure_group(&mut self, collection_id: &CollectionId, name: &str) -> GroupId {
        let id = GroupId::derived(collection_id, name);
        self.groups.entry(id.clone()).or_insert_with(|| Group {
            id: id.clone(),
            name: name.to_string(),
            collection_id: collection_id.clone(),
        });
        id
    }

    /// Insert a variable, deriving its group from the slash path of its name.
    /// Slash-less names land in a group named after the collection.
    pub fn insert_variable_in(&mut self, collection_id: &CollectionId, mut variable: Variable) {
        let group_name = match split_name(&variable.name).0 {
            Some(path) => path.to_string(),
            None => self
                .collections
                .get(collection_id)
                .map(|collection| collection.name.clone())
                .unwrap_or_else(|| collection_id.to_string()),
        };
        variable.group_id = self.ensure_group(collection_id, &group_name);
        self.variables.insert(variable.id.clone(), variable);
    }

    /// Insert a variable whose group id is already set (importer path where
    /// the group was created from an explicit path split).
    pub fn insert_variable(&mut self, variable: Variable) {
        self.variables.insert(variable.id.clone(), variable);
    }

    /// Insert a group carrying its own id (graph-format import).
    pub fn insert_group(&mut self, group: Group) {
        self.groups.insert(group.id.clone(), group);
    }

    pub fn set_variable_value(&mut self, id: &VariableId, mode: ModeId, value: VariableValue) {
        if let Some(variable) = self.variables.get_mut(id) {
            variable.set_value(mode, value);
        }
    }

    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.get(id)
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    pub fn variable(&self, id: &VariableId) -> Option<&Variable> {
        self.variables.get(id)
    }

    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn group_for_variable(&self, id: &VariableId) -> Option<&Group> {
        self.variables
            .get(id)
            .and_then(|variable| self.groups.get(&variable.group_id))
    }

    pub fn collection_for_group(&self, id: &GroupId) -> Option<&Collection> {
        self.groups
            .get(id)
            .and_then(|group| self.collections.get(&group.collection_id))
    }

    pub fn collection_for_variable(&self, id: &VariableId) -> Option<&Collection> {
        self.group_for_variable(id)
            .and_then(|group| self.collections.get(&group.collection_id))
    }

    /// Variables owned by one collection, in id order.
    pub fn variables_in_collection(&self, id: &CollectionId) -> Vec<&Variable> {
        self.variables
            .values()
            .filter(|variable| {
                self.groups
                    .get(&variable.group_id)
                    .is_some_and(|group| &group.collection_id == id)
            })
            .collect()
    }

    /// Find a variable by exact name within one collection.
    pub fn variable_named(&self, collection_id: &CollectionId, name: &str) -> Option<&Variable> {
        self.variables.values().find(|variable| {
            variable.name == name
                && self
                    .groups
                    .get(&variable.group_id)
                    .is_some_and(|group| &group.collection_id == collection_id)
        })
    }

    /// Follow aliases from (variable, mode) down to a literal value, for
    /// display. An alias with an unresolved target mode still resolves here
    /// through the target collection's default mode; the depth bound covers
    /// the fixed layer chain (cycles cannot occur, layers are statically
    /// ordered).
    pub fn resolve_literal(&self, variable: &VariableId, mode: &ModeId) -> Option<&VariableValue> {
        const MAX_DEPTH: usize = 8;
        let mut current_variable = variable.clone();
        let mut current_mode = mode.clone();
        for _ in 0..MAX_DEPTH {
            let value = self
                .variables
                .get(&current_variable)?
                .value_for_mode(&current_mode)?;
            let VariableValue::Alias(alias) = value else {
                return Some(value);
            };
            current_mode = match &alias.mode {
                Some(mode) => mode.clone(),
                None => self
                    .collection_for_variable(&alias.variable)?
                    .default_mode_id
                    .clone(),
            };
            current_variable = alias.variable.clone();
        }
        None
    }

    /// The alias edge list, derived from variable values in deterministic
    /// order. Rewriting a value during mode resolution is therefore
    /// automatically reflected here.
    pub fn aliases(&self) -> Vec<AliasEdge> {
        let mut edges = Vec::new();
        for variable in self.variables.values() {
            for (mode, alias) in variable.alias_values() {
                edges.push(AliasEdge {
                    source_variable: variable.id.clone(),
                    source_mode: mode.clone(),
                    target_variable: alias.variable.clone(),
                    target_mode: alias.mode.clone(),
                });
            }
        }
        edges
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.groups.is_empty() && self.variables.is_empty()
    }
}
