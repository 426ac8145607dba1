use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, ModeId, VariableId};

/// Result type of a variable, matching the interchange `resolvedType` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResolvedType {
    Color,
    Float,
    String,
    Boolean,
}

impl ResolvedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedType::Color => "COLOR",
            ResolvedType::Float => "FLOAT",
            ResolvedType::String => "STRING",
            ResolvedType::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolvedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COLOR" => Ok(ResolvedType::Color),
            "FLOAT" => Ok(ResolvedType::Float),
            "STRING" => Ok(ResolvedType::String),
            "BOOLEAN" => Ok(ResolvedType::Boolean),
            _ => Err(format!("Unknown resolved type: {}", s)),
        }
    }
}

/// A reference to another variable's value.
///
/// `mode: None` is the explicit unresolved stage: the import's load pass
/// creates alias refs before their target variables exist, and the
/// resolution pass rewrites them once every variable is known. An alias
/// that stays unresolved is incomplete and excluded from generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRef {
    pub variable: VariableId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ModeId>,
}

impl AliasRef {
    pub fn resolved(variable: VariableId, mode: ModeId) -> Self {
        Self {
            variable,
            mode: Some(mode),
        }
    }

    pub fn pending(variable: VariableId) -> Self {
        Self {
            variable,
            mode: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.mode.is_some()
    }
}

/// A per-mode value: a literal, or an alias into the next layer up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum VariableValue {
    /// Uppercase 6-digit hex, e.g. `"#1A2B3C"`.
    Color(String),
    Float(f64),
    Text(String),
    Boolean(bool),
    Alias(AliasRef),
}

impl VariableValue {
    pub fn as_alias(&self) -> Option<&AliasRef> {
        match self {
            VariableValue::Alias(alias) => Some(alias),
            _ => None,
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, VariableValue::Alias(_))
    }
}

/// A named, typed design token with one value per mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub id: VariableId,
    /// Full slash-structured name, e.g. `"Grey/2500/Surface"`. The path
    /// before the last slash is the group; the final segment is the leaf.
    pub name: String,
    pub resolved_type: ResolvedType,
    pub group_id: GroupId,
    pub values_by_mode: BTreeMap<ModeId, VariableValue>,
}

impl Variable {
    pub fn value_for_mode(&self, mode: &ModeId) -> Option<&VariableValue> {
        self.values_by_mode.get(mode)
    }

    pub fn set_value(&mut self, mode: ModeId, value: VariableValue) {
        self.values_by_mode.insert(mode, value);
    }

    /// All alias values with their source modes.
    pub fn alias_values(&self) -> impl Iterator<Item = (&ModeId, &AliasRef)> {
        self.values_by_mode
            .iter()
            .filter_map(|(mode, value)| value.as_alias().map(|alias| (mode, alias)))
    }

    /// Leaf segment of the name.
    pub fn leaf_name(&self) -> &str {
        split_name(&self.name).1
    }
}

/// Split a slash-structured name into (group path, leaf). Names without a
/// slash have no group path.
pub fn split_name(name: &str) -> (Option<&str>, &str) {
    match name.rsplit_once('/') {
        Some((path, leaf)) => (Some(path), leaf),
        None => (None, name),
    }
}
