//! Document import: validate, convert, then resolve alias target modes.
//!
//! Conversion runs in two explicit stages. The load stage creates every
//! collection and variable, turning alias markers into pending alias refs
//! (no target mode) because a marker may point at a variable that has not
//! been loaded yet. The resolution stage then walks every pending alias and
//! matches the source mode's name against the target collection's modes,
//! falling back to the target's first mode when nothing matches. Resolution
//! problems are warnings; only structural validation fails an import.

use serde_json::Value;
use std::str::FromStr;

use dtg_model::{
    AliasRef, Collection, CollectionId, CollectionKind, Mode, ModeId, ResolvedType, TokenGraph,
    Variable, VariableId, VariableValue,
};

use crate::color::rgba_to_hex;
use crate::detect::{DocumentFormat, detect_format};
use crate::schema::{
    ALIAS_VALUE_TYPE, NativeCollection, NativeDocument, NativeValue, SerializedGraph,
};
use crate::validate::validate_native;

#[derive(Debug)]
pub struct ImportReport {
    pub format: DocumentFormat,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// The imported graph; `None` whenever validation failed.
    pub graph: Option<TokenGraph>,
}

impl ImportReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.graph.is_some()
    }

    fn invalid(format: DocumentFormat, errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            format,
            errors,
            warnings,
            graph: None,
        }
    }
}

/// Parse and import a document in either interchange shape.
pub fn import_document(text: &str) -> ImportReport {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            return ImportReport::invalid(
                DocumentFormat::Unknown,
                vec![format!("malformed JSON: {}", err)],
                Vec::new(),
            );
        }
    };
    match detect_format(&value) {
        DocumentFormat::Native => import_native(&value),
        DocumentFormat::Graph => import_graph(&value),
        DocumentFormat::Unknown => ImportReport::invalid(
            DocumentFormat::Unknown,
            vec!["unrecognized document shape".to_string()],
            Vec::new(),
        ),
    }
}

/// Import a native document: validate the raw JSON, then convert.
pub fn import_native(value: &Value) -> ImportReport {
    let report = validate_native(value);
    let mut warnings = report.warnings;
    if !report.errors.is_empty() {
        return ImportReport::invalid(DocumentFormat::Native, report.errors, warnings);
    }
    let document: NativeDocument = match serde_json::from_value(value.clone()) {
        Ok(document) => document,
        Err(err) => {
            return ImportReport::invalid(
                DocumentFormat::Native,
                vec![format!("document does not match the native shape: {}", err)],
                warnings,
            );
        }
    };

    let mut graph = TokenGraph::new();
    for collection in &document.collections {
        load_native_collection(collection, &mut graph, &mut warnings);
    }
    resolve_pending_aliases(&mut graph, &mut warnings);

    ImportReport {
        format: DocumentFormat::Native,
        errors: Vec::new(),
        warnings,
        graph: Some(graph),
    }
}

/// Import this system's own flattened export.
pub fn import_graph(value: &Value) -> ImportReport {
    let document: SerializedGraph = match serde_json::from_value(value.clone()) {
        Ok(document) => document,
        Err(err) => {
            return ImportReport::invalid(
                DocumentFormat::Graph,
                vec![format!("document does not match the graph shape: {}", err)],
                Vec::new(),
            );
        }
    };

    let mut warnings = Vec::new();
    let mut graph = TokenGraph::new();
    for collection in document.collections {
        graph.insert_collection(collection);
    }
    for group in document.groups {
        graph.insert_group(group);
    }
    for variable in document.variables {
        graph.insert_variable(variable);
    }
    // The alias array is derived data; edges rebuild from variable values,
    // and any still-pending targets get the same resolution treatment.
    resolve_pending_aliases(&mut graph, &mut warnings);

    ImportReport {
        format: DocumentFormat::Graph,
        errors: Vec::new(),
        warnings,
        graph: Some(graph),
    }
}

fn load_native_collection(
    collection: &NativeCollection,
    graph: &mut TokenGraph,
    warnings: &mut Vec<String>,
) {
    let Ok(collection_id) = CollectionId::new(&collection.id) else {
        warnings.push(format!(
            "collection {:?} has a blank id, skipping",
            collection.name
        ));
        return;
    };
    let kind = resolve_kind(collection, warnings);

    let mut modes = Vec::new();
    for mode in &collection.modes {
        let Ok(mode_id) = ModeId::new(&mode.mode_id) else {
            warnings.push(format!(
                "collection {:?} has a mode with a blank id, skipping mode",
                collection.name
            ));
            continue;
        };
        modes.push(Mode {
            id: mode_id,
            name: mode.name.clone(),
        });
    }
    let Some(default_mode_id) = modes.first().map(|mode| mode.id.clone()) else {
        warnings.push(format!(
            "collection {:?} declares no usable modes, skipping",
            collection.name
        ));
        return;
    };

    graph.insert_collection(Collection {
        id: collection_id.clone(),
        name: collection.name.clone(),
        kind,
        modes,
        default_mode_id,
        palette_assignments: Default::default(),
    });

    for variable in &collection.variables {
        let Ok(variable_id) = VariableId::new(&variable.id) else {
            warnings.push(format!(
                "variable {:?} has a blank id, skipping",
                variable.name
            ));
            continue;
        };
        // Validation vouched for the tag already.
        let Ok(resolved_type) = ResolvedType::from_str(&variable.resolved_type) else {
            warnings.push(format!(
                "variable {:?} has unknown resolved type {:?}, skipping",
                variable.name, variable.resolved_type
            ));
            continue;
        };

        let mut loaded = Variable {
            id: variable_id,
            name: variable.name.clone(),
            resolved_type,
            group_id: dtg_model::GroupId::derived(&collection_id, &collection.name),
            values_by_mode: Default::default(),
        };
        for (mode_key, value) in &variable.values_by_mode {
            let Ok(mode_id) = ModeId::new(mode_key) else {
                warnings.push(format!(
                    "variable {:?} has a value under a blank mode id, skipping value",
                    variable.name
                ));
                continue;
            };
            match convert_native_value(value) {
                Some(converted) => {
                    loaded.set_value(mode_id, converted);
                }
                None => warnings.push(format!(
                    "variable {:?} has an unconvertible value, skipping value",
                    variable.name
                )),
            }
        }
        // Group derived from the variable's slash path.
        graph.insert_variable_in(&collection_id, loaded);
    }
}

fn resolve_kind(collection: &NativeCollection, warnings: &mut Vec<String>) -> CollectionKind {
    for (field, raw) in [
        ("collectionType", &collection.collection_type),
        ("generationType", &collection.generation_type),
    ] {
        if let Some(raw) = raw {
            match raw.parse() {
                Ok(kind) => return kind,
                Err(_) => warnings.push(format!(
                    "collection {:?} has unknown {} tag {:?}, inferring from name",
                    collection.name, field, raw
                )),
            }
        }
    }
    infer_kind_from_name(&collection.name)
}

/// Infer a collection kind from its display name. Substring checks run in
/// fixed precedence; anything unrecognized counts as semantic.
pub fn infer_kind_from_name(name: &str) -> CollectionKind {
    let lower = name.to_lowercase();
    let contains_any =
        |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));
    if contains_any(&["primitive", "base", "foundation"]) {
        CollectionKind::Primitives
    } else if contains_any(&["semantic", "token"]) {
        CollectionKind::Semantic
    } else if contains_any(&["interaction", "state", "hover", "active"]) {
        CollectionKind::InteractionState
    } else if contains_any(&["theme", "mode"]) {
        CollectionKind::Theme
    } else if lower.contains("brand") {
        CollectionKind::Brand
    } else {
        CollectionKind::Semantic
    }
}

fn convert_native_value(value: &NativeValue) -> Option<VariableValue> {
    match value {
        NativeValue::Alias { value_type, id } => {
            if value_type != ALIAS_VALUE_TYPE {
                return None;
            }
            let target = VariableId::new(id).ok()?;
            Some(VariableValue::Alias(AliasRef::pending(target)))
        }
        NativeValue::Color(rgba) => Some(VariableValue::Color(rgba_to_hex(rgba))),
        NativeValue::Float(number) => Some(VariableValue::Float(*number)),
        NativeValue::Text(text) => Some(VariableValue::Text(text.clone())),
        NativeValue::Boolean(flag) => Some(VariableValue::Boolean(*flag)),
    }
}

/// The resolution pass: rewrite every pending alias with a target mode
/// matched by name, or the target collection's first mode as a last resort.
pub fn resolve_pending_aliases(graph: &mut TokenGraph, warnings: &mut Vec<String>) {
    let pending: Vec<_> = graph
        .aliases()
        .into_iter()
        .filter(|edge| edge.target_mode.is_none())
        .collect();

    let mut resolutions = Vec::new();
    for edge in pending {
        if graph.variable(&edge.target_variable).is_none() {
            warnings.push(format!(
                "alias target variable {} does not exist, leaving alias unresolved",
                edge.target_variable
            ));
            continue;
        }
        let Some(target_collection) = graph.collection_for_variable(&edge.target_variable) else {
            warnings.push(format!(
                "alias target variable {} has no owning collection, leaving alias unresolved",
                edge.target_variable
            ));
            continue;
        };
        let source_mode_name = graph
            .collection_for_variable(&edge.source_variable)
            .and_then(|collection| collection.mode(&edge.source_mode))
            .map(|mode| mode.name.clone());
        let Some(source_mode_name) = source_mode_name else {
            warnings.push(format!(
                "alias source mode {} is not declared by its collection, leaving alias unresolved",
                edge.source_mode
            ));
            continue;
        };

        let target_mode = match target_collection.mode_named(&source_mode_name) {
            Some(mode) => mode.id.clone(),
            None => {
                let Some(first) = target_collection.first_mode() else {
                    warnings.push(format!(
                        "target collection {:?} has no modes, leaving alias unresolved",
                        target_collection.name
                    ));
                    continue;
                };
                warnings.push(format!(
                    "no mode named {:?} in collection {:?}, falling back to first mode {:?}",
                    source_mode_name, target_collection.name, first.name
                ));
                first.id.clone()
            }
        };
        resolutions.push((
            edge.source_variable.clone(),
            edge.source_mode.clone(),
            AliasRef::resolved(edge.target_variable.clone(), target_mode),
        ));
    }

    for (source_variable, source_mode, alias) in resolutions {
        graph.set_variable_value(&source_variable, source_mode, VariableValue::Alias(alias));
    }
}
