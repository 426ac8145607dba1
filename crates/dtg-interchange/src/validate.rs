//! Structural validation of native documents, before any conversion.
//!
//! Validation never panics and never returns partial results: the report
//! carries every error and warning found in one walk. Errors are fatal to
//! the import; warnings are informational.

use serde_json::Value;

use dtg_model::ResolvedType;

use crate::schema::ALIAS_VALUE_TYPE;

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_native(document: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();
    let Some(root) = document.as_object() else {
        report
            .errors
            .push("document root must be a JSON object".to_string());
        return report;
    };

    match root.get("schemaVersion") {
        None => report
            .warnings
            .push("missing schemaVersion, assuming 1".to_string()),
        Some(value) if !value.is_number() => {
            report.errors.push("schemaVersion must be a number".to_string());
        }
        Some(_) => {}
    }
    match root.get("lastModified") {
        None => report.warnings.push("missing lastModified".to_string()),
        Some(value) if !value.is_string() => {
            report.errors.push("lastModified must be a string".to_string());
        }
        Some(_) => {}
    }

    let Some(collections) = root.get("collections") else {
        report.errors.push("missing collections array".to_string());
        return report;
    };
    let Some(collections) = collections.as_array() else {
        report.errors.push("collections must be an array".to_string());
        return report;
    };

    for (index, collection) in collections.iter().enumerate() {
        validate_collection(index, collection, &mut report);
    }
    report
}

fn validate_collection(index: usize, collection: &Value, report: &mut ValidationReport) {
    let context = format!("collections[{}]", index);
    let Some(map) = collection.as_object() else {
        report.errors.push(format!("{} must be an object", context));
        return;
    };

    require_string(map.get("id"), &format!("{}.id", context), report);
    require_string(map.get("name"), &format!("{}.name", context), report);

    let mut mode_ids = Vec::new();
    match map.get("modes").map(Value::as_array) {
        Some(Some(modes)) => {
            for (mode_index, mode) in modes.iter().enumerate() {
                let mode_context = format!("{}.modes[{}]", context, mode_index);
                let Some(mode_map) = mode.as_object() else {
                    report.errors.push(format!("{} must be an object", mode_context));
                    continue;
                };
                if let Some(id) = mode_map.get("modeId").and_then(Value::as_str) {
                    mode_ids.push(id.to_string());
                }
                require_string(
                    mode_map.get("modeId"),
                    &format!("{}.modeId", mode_context),
                    report,
                );
                require_string(mode_map.get("name"), &format!("{}.name", mode_context), report);
            }
        }
        _ => report
            .errors
            .push(format!("{} is missing a modes array", context)),
    }

    match map.get("variables").map(Value::as_array) {
        Some(Some(variables)) => {
            for (variable_index, variable) in variables.iter().enumerate() {
                let variable_context = format!("{}.variables[{}]", context, variable_index);
                validate_variable(&variable_context, variable, &mode_ids, report);
            }
        }
        _ => report
            .errors
            .push(format!("{} is missing a variables array", context)),
    }
}

fn validate_variable(
    context: &str,
    variable: &Value,
    mode_ids: &[String],
    report: &mut ValidationReport,
) {
    let Some(map) = variable.as_object() else {
        report.errors.push(format!("{} must be an object", context));
        return;
    };

    require_string(map.get("id"), &format!("{}.id", context), report);
    require_string(map.get("name"), &format!("{}.name", context), report);

    match map.get("resolvedType").and_then(Value::as_str) {
        Some(tag) => {
            if tag.parse::<ResolvedType>().is_err() {
                report
                    .errors
                    .push(format!("{}.resolvedType has unknown tag {:?}", context, tag));
            }
        }
        None => report
            .errors
            .push(format!("{}.resolvedType must be a string", context)),
    }

    let Some(values) = map.get("valuesByMode").and_then(Value::as_object) else {
        report
            .errors
            .push(format!("{}.valuesByMode must be an object", context));
        return;
    };
    for (mode_key, value) in values {
        if !mode_ids.iter().any(|id| id == mode_key) {
            report.warnings.push(format!(
                "{} has a value for undeclared mode {:?}",
                context, mode_key
            ));
        }
        validate_value(&format!("{}.valuesByMode[{:?}]", context, mode_key), value, report);
    }
}

fn validate_value(context: &str, value: &Value, report: &mut ValidationReport) {
    match value {
        Value::Object(map) => {
            if let Some(value_type) = map.get("type") {
                if value_type.as_str() != Some(ALIAS_VALUE_TYPE) {
                    report.errors.push(format!(
                        "{} has unsupported value type {}",
                        context, value_type
                    ));
                } else if map.get("id").and_then(Value::as_str).is_none_or(str::is_empty) {
                    report
                        .errors
                        .push(format!("{} alias marker is missing a target id", context));
                }
            } else if !(map.contains_key("r") && map.contains_key("g") && map.contains_key("b")) {
                report
                    .warnings
                    .push(format!("{} has an unrecognized object value shape", context));
            }
        }
        Value::Number(_) | Value::String(_) | Value::Bool(_) => {}
        Value::Null => report.warnings.push(format!("{} is null", context)),
        Value::Array(_) => report
            .errors
            .push(format!("{} must not be an array", context)),
    }
}

fn require_string(value: Option<&Value>, context: &str, report: &mut ValidationReport) {
    match value.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => {}
        Some(_) => report.errors.push(format!("{} must not be empty", context)),
        None => report
            .errors
            .push(format!("{} must be a non-empty string", context)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_valid_document_passes_with_header_warnings() {
        let document = json!({
            "collections": [{
                "id": "c1",
                "name": "A",
                "modes": [{ "modeId": "m1", "name": "Light" }],
                "variables": [],
            }],
        });
        let report = validate_native(&document);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 2); // schemaVersion + lastModified
    }

    #[test]
    fn missing_variable_fields_are_errors() {
        let document = json!({
            "schemaVersion": 1,
            "lastModified": "2025-01-01T00:00:00Z",
            "collections": [{
                "id": "c1",
                "name": "A",
                "modes": [{ "modeId": "m1", "name": "Light" }],
                "variables": [{ "id": "v1", "valuesByMode": {} }],
            }],
        });
        let report = validate_native(&document);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|error| error.contains(".name")));
        assert!(
            report
                .errors
                .iter()
                .any(|error| error.contains("resolvedType"))
        );
    }

    #[test]
    fn alias_markers_need_a_target_id() {
        let document = json!({
            "schemaVersion": 1,
            "lastModified": "2025-01-01T00:00:00Z",
            "collections": [{
                "id": "c1",
                "name": "A",
                "modes": [{ "modeId": "m1", "name": "Light" }],
                "variables": [{
                    "id": "v1",
                    "name": "Token",
                    "resolvedType": "COLOR",
                    "valuesByMode": { "m1": { "type": "VARIABLE_ALIAS" } },
                }],
            }],
        });
        let report = validate_native(&document);
        assert!(!report.is_valid());
        assert!(
            report
                .errors
                .iter()
                .any(|error| error.contains("missing a target id"))
        );
    }

    #[test]
    fn undeclared_mode_reference_is_a_warning() {
        let document = json!({
            "schemaVersion": 1,
            "lastModified": "2025-01-01T00:00:00Z",
            "collections": [{
                "id": "c1",
                "name": "A",
                "modes": [{ "modeId": "m1", "name": "Light" }],
                "variables": [{
                    "id": "v1",
                    "name": "Token",
                    "resolvedType": "FLOAT",
                    "valuesByMode": { "m2": 4.0 },
                }],
            }],
        });
        let report = validate_native(&document);
        assert!(report.is_valid());
        assert!(
            report
                .warnings
                .iter()
                .any(|warning| warning.contains("undeclared mode"))
        );
    }
}
