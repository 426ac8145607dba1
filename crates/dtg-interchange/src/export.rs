//! Graph serialization: the flattened self-describing export and the
//! native document renderer.

use chrono::{DateTime, Utc};

use dtg_model::{TokenGraph, VariableValue};

use crate::color::{RgbaColor, hex_to_rgba};
use crate::error::InterchangeError;
use crate::schema::{
    NativeCollection, NativeDocument, NativeMode, NativeValue, NativeVariable, SCHEMA_VERSION,
    SerializedGraph,
};

/// Flatten the graph's maps into name-sorted arrays plus the raw alias
/// list. Pure reshaping; no logic beyond sorting.
pub fn serialize_graph(graph: &TokenGraph) -> SerializedGraph {
    let mut collections: Vec<_> = graph.collections().cloned().collect();
    collections.sort_by(|a, b| a.name.cmp(&b.name));
    let mut groups: Vec<_> = graph.groups().cloned().collect();
    groups.sort_by(|a, b| a.name.cmp(&b.name));
    let mut variables: Vec<_> = graph.variables().cloned().collect();
    variables.sort_by(|a, b| a.name.cmp(&b.name));

    SerializedGraph {
        schema_version: SCHEMA_VERSION,
        collections,
        groups,
        variables,
        aliases: graph.aliases(),
    }
}

pub fn to_graph_json(graph: &TokenGraph) -> Result<String, InterchangeError> {
    serde_json::to_string_pretty(&serialize_graph(graph))
        .map_err(|source| InterchangeError::Serialize { source })
}

/// Render the graph into the host tool's native document shape. Colors go
/// back to float channels; alias refs become `VARIABLE_ALIAS` markers (the
/// native shape carries no target modes, resolved or not).
pub fn to_native_document(graph: &TokenGraph, last_modified: DateTime<Utc>) -> NativeDocument {
    let mut collections: Vec<_> = graph.collections().collect();
    collections.sort_by(|a, b| a.name.cmp(&b.name));

    let collections = collections
        .into_iter()
        .map(|collection| {
            let mut variables = graph.variables_in_collection(&collection.id);
            variables.sort_by(|a, b| a.name.cmp(&b.name));
            NativeCollection {
                id: collection.id.to_string(),
                name: collection.name.clone(),
                collection_type: Some(collection.kind.as_str().to_string()),
                generation_type: None,
                modes: collection
                    .modes
                    .iter()
                    .map(|mode| NativeMode {
                        mode_id: mode.id.to_string(),
                        name: mode.name.clone(),
                    })
                    .collect(),
                variables: variables
                    .into_iter()
                    .map(|variable| NativeVariable {
                        id: variable.id.to_string(),
                        name: variable.name.clone(),
                        resolved_type: variable.resolved_type.as_str().to_string(),
                        values_by_mode: variable
                            .values_by_mode
                            .iter()
                            .map(|(mode, value)| {
                                (mode.to_string(), to_native_value(value))
                            })
                            .collect(),
                    })
                    .collect(),
            }
        })
        .collect();

    NativeDocument {
        schema_version: SCHEMA_VERSION,
        last_modified: last_modified.to_rfc3339(),
        collections,
    }
}

pub fn to_native_json(
    graph: &TokenGraph,
    last_modified: DateTime<Utc>,
) -> Result<String, InterchangeError> {
    serde_json::to_string_pretty(&to_native_document(graph, last_modified))
        .map_err(|source| InterchangeError::Serialize { source })
}

fn to_native_value(value: &VariableValue) -> NativeValue {
    match value {
        VariableValue::Color(hex) => {
            NativeValue::Color(hex_to_rgba(hex).unwrap_or_else(RgbaColor::opaque_black))
        }
        VariableValue::Float(number) => NativeValue::Float(*number),
        VariableValue::Text(text) => NativeValue::Text(text.clone()),
        VariableValue::Boolean(flag) => NativeValue::Boolean(*flag),
        VariableValue::Alias(alias) => NativeValue::alias(alias.variable.to_string()),
    }
}
