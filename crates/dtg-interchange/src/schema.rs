//! Serde types for the two interchange document shapes.
//!
//! The **native** shape is the host design tool's export: nested
//! collections with `modes` and `variables`, RGBA float colors, and
//! `VARIABLE_ALIAS` markers whose target modes are implicit. The **graph**
//! shape is this system's own self-describing export: the flattened,
//! name-sorted arrays produced by [`crate::export::serialize_graph`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dtg_model::{AliasEdge, Collection, Group, Variable};

use crate::color::RgbaColor;

pub const SCHEMA_VERSION: u32 = 1;

pub(crate) fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

pub const ALIAS_VALUE_TYPE: &str = "VARIABLE_ALIAS";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeDocument {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub last_modified: String,
    pub collections: Vec<NativeCollection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCollection {
    pub id: String,
    pub name: String,
    /// Kind tag. Optional; older documents used `generationType`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,
    /// Deprecated kind tag, honored when `collectionType` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_type: Option<String>,
    pub modes: Vec<NativeMode>,
    pub variables: Vec<NativeVariable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeMode {
    pub mode_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeVariable {
    pub id: String,
    pub name: String,
    pub resolved_type: String,
    pub values_by_mode: BTreeMap<String, NativeValue>,
}

/// A per-mode value in a native document. Alias markers and color objects
/// are both JSON objects, distinguished by their fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeValue {
    Alias {
        #[serde(rename = "type")]
        value_type: String,
        id: String,
    },
    Color(RgbaColor),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl NativeValue {
    pub fn alias(id: impl Into<String>) -> Self {
        NativeValue::Alias {
            value_type: ALIAS_VALUE_TYPE.to_string(),
            id: id.into(),
        }
    }
}

/// The flattened graph export: name-sorted entity arrays plus the raw alias
/// edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedGraph {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub collections: Vec<Collection>,
    pub groups: Vec<Group>,
    pub variables: Vec<Variable>,
    pub aliases: Vec<AliasEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_value_distinguishes_objects_by_fields() {
        let alias: NativeValue =
            serde_json::from_str(r#"{"type":"VARIABLE_ALIAS","id":"var-1"}"#).expect("alias");
        assert_eq!(alias, NativeValue::alias("var-1"));

        let color: NativeValue =
            serde_json::from_str(r#"{"r":1.0,"g":0.5,"b":0.0,"a":1.0}"#).expect("color");
        assert!(matches!(color, NativeValue::Color(_)));

        // Alpha is optional in color objects.
        let color: NativeValue = serde_json::from_str(r#"{"r":0.0,"g":0.0,"b":0.0}"#)
            .expect("color without alpha");
        match color {
            NativeValue::Color(rgba) => assert_eq!(rgba.a, 1.0),
            other => panic!("expected color, got {:?}", other),
        }

        let float: NativeValue = serde_json::from_str("4.5").expect("float");
        assert_eq!(float, NativeValue::Float(4.5));
        let boolean: NativeValue = serde_json::from_str("true").expect("boolean");
        assert_eq!(boolean, NativeValue::Boolean(true));
    }
}
