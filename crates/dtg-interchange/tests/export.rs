//! Graph serialization and native export round-trip tests.

use chrono::{TimeZone, Utc};
use serde_json::json;

use dtg_interchange::{
    DocumentFormat, NativeValue, import_document, serialize_graph, to_graph_json,
    to_native_document, to_native_json,
};

fn imported_graph() -> dtg_model::TokenGraph {
    let document = serde_json::to_string(&json!({
        "schemaVersion": 1,
        "lastModified": "2025-06-01T12:00:00Z",
        "collections": [
            {
                "id": "col-b",
                "name": "Zeta",
                "modes": [{ "modeId": "b-light", "name": "Light" }],
                "variables": [{
                    "id": "var-b",
                    "name": "Accents/Token B",
                    "resolvedType": "COLOR",
                    "valuesByMode": { "b-light": { "type": "VARIABLE_ALIAS", "id": "var-a" } },
                }],
            },
            {
                "id": "col-a",
                "name": "Alpha",
                "modes": [{ "modeId": "a-light", "name": "Light" }],
                "variables": [{
                    "id": "var-a",
                    "name": "Base/Token A",
                    "resolvedType": "COLOR",
                    "valuesByMode": { "a-light": { "r": 0.0, "g": 0.5, "b": 1.0, "a": 1.0 } },
                }],
            },
        ],
    }))
    .expect("serialize document");
    import_document(&document).graph.expect("graph")
}

#[test]
fn serialized_arrays_are_name_sorted() {
    let graph = imported_graph();
    let serialized = serialize_graph(&graph);

    let collection_names: Vec<_> = serialized
        .collections
        .iter()
        .map(|collection| collection.name.as_str())
        .collect();
    assert_eq!(collection_names, ["Alpha", "Zeta"]);

    let variable_names: Vec<_> = serialized
        .variables
        .iter()
        .map(|variable| variable.name.as_str())
        .collect();
    assert_eq!(variable_names, ["Accents/Token B", "Base/Token A"]);

    assert_eq!(serialized.aliases.len(), 1);
    assert!(serialized.aliases[0].target_mode.is_some());
}

#[test]
fn graph_export_reimports_identically() {
    let graph = imported_graph();
    let payload = to_graph_json(&graph).expect("graph json");

    let report = import_document(&payload);
    assert_eq!(report.format, DocumentFormat::Graph);
    assert!(report.is_valid(), "errors: {:?}", report.errors);
    assert_eq!(report.graph.expect("graph"), graph);
}

#[test]
fn native_export_round_trips_values_and_aliases() {
    let graph = imported_graph();
    let stamp = Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap();
    let document = to_native_document(&graph, stamp);

    assert_eq!(document.schema_version, 1);
    assert_eq!(document.last_modified, "2025-06-02T09:30:00+00:00");
    assert_eq!(document.collections.len(), 2);
    assert_eq!(
        document.collections[0].collection_type.as_deref(),
        Some("semantic")
    );

    let payload = to_native_json(&graph, stamp).expect("native json");
    let report = import_document(&payload);
    assert!(report.is_valid(), "errors: {:?}", report.errors);
    let round = report.graph.expect("graph");

    // Same variables, same literal colors, same resolved alias targets.
    let names = |graph: &dtg_model::TokenGraph| -> Vec<String> {
        let mut names: Vec<_> = graph
            .variables()
            .map(|variable| variable.name.clone())
            .collect();
        names.sort();
        names
    };
    assert_eq!(names(&round), names(&graph));
    assert_eq!(round.aliases().len(), graph.aliases().len());
    assert!(round.aliases().iter().all(|edge| edge.target_mode.is_some()));
}

#[test]
fn alias_markers_serialize_with_the_native_tag() {
    insta::assert_json_snapshot!(NativeValue::alias("var-1"), @r###"
    {
      "type": "VARIABLE_ALIAS",
      "id": "var-1"
    }
    "###);
}
