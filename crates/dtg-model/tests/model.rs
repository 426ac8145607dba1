//! Integration tests for the token graph model.

use std::collections::BTreeMap;

use dtg_model::{
    Brand, Collection, CollectionId, CollectionKind, Mode, ModeId, ResolvedType, TokenGraph,
    Variable, VariableId, VariableValue,
};

fn collection(name: &str, kind: CollectionKind, mode_names: &[&str]) -> Collection {
    let id = CollectionId::derived("brand-test", name);
    let modes: Vec<Mode> = mode_names
        .iter()
        .map(|mode_name| Mode {
            id: ModeId::derived(&id, mode_name),
            name: (*mode_name).to_string(),
        })
        .collect();
    let default_mode_id = modes[0].id.clone();
    Collection {
        id,
        name: name.to_string(),
        kind,
        modes,
        default_mode_id,
        palette_assignments: BTreeMap::new(),
    }
}

#[test]
fn brand_discovers_collections_by_kind() {
    let brand = Brand {
        id: "brand-test".to_string(),
        name: "Test".to_string(),
        collections: vec![
            collection("Primitives", CollectionKind::Primitives, &["Value"]),
            collection(
                "Semi semantics",
                CollectionKind::SemiSemantics,
                &["Value"],
            ),
            collection("Colour Mode", CollectionKind::ColorMode, &["Light", "Dark"]),
        ],
    };

    let semi = brand
        .collection_of_kind(CollectionKind::SemiSemantics)
        .expect("semi-semantics collection");
    assert_eq!(semi.name, "Semi semantics");
    assert!(
        brand
            .collection_of_kind(CollectionKind::InteractionState)
            .is_none()
    );
}

#[test]
fn mode_lookup_matches_by_name_not_id() {
    let a = collection("A", CollectionKind::Primitives, &["Light"]);
    let b = collection("B", CollectionKind::Semantic, &["Light"]);

    // Same mode name, disjoint identifier spaces.
    assert_ne!(a.modes[0].id, b.modes[0].id);
    assert_eq!(a.mode_named("light").map(|mode| &mode.id), Some(&a.modes[0].id));
}

#[test]
fn resolve_literal_follows_alias_chains() {
    let mut graph = TokenGraph::new();
    let upstream = collection("Upstream", CollectionKind::Primitives, &["Value"]);
    let downstream = collection("Downstream", CollectionKind::Semantic, &["Light"]);
    let upstream_mode = upstream.default_mode_id.clone();
    let downstream_mode = downstream.default_mode_id.clone();
    let upstream_id = upstream.id.clone();
    let downstream_id = downstream.id.clone();
    graph.insert_collection(upstream);
    graph.insert_collection(downstream);

    let target_id = VariableId::derived(&upstream_id, "Grey/2500/Surface");
    let mut target = Variable {
        id: target_id.clone(),
        name: "Grey/2500/Surface".to_string(),
        resolved_type: ResolvedType::Color,
        group_id: dtg_model::GroupId::derived(&upstream_id, "unset"),
        values_by_mode: BTreeMap::new(),
    };
    target.set_value(
        upstream_mode.clone(),
        VariableValue::Color("#FFFFFF".to_string()),
    );
    graph.insert_variable_in(&upstream_id, target);

    let source_id = VariableId::derived(&downstream_id, "[Appearance] Surface");
    let mut source = Variable {
        id: source_id.clone(),
        name: "[Appearance] Surface".to_string(),
        resolved_type: ResolvedType::Color,
        group_id: dtg_model::GroupId::derived(&downstream_id, "unset"),
        values_by_mode: BTreeMap::new(),
    };
    // Resolved alias and pending alias both display through the target's
    // literal; the pending one goes via the target's default mode.
    source.set_value(
        downstream_mode.clone(),
        VariableValue::Alias(dtg_model::AliasRef::pending(target_id)),
    );
    graph.insert_variable_in(&downstream_id, source);

    assert_eq!(
        graph.resolve_literal(&source_id, &downstream_mode),
        Some(&VariableValue::Color("#FFFFFF".to_string()))
    );
    assert_eq!(graph.resolve_literal(&source_id, &upstream_mode), None);
}

#[test]
fn graph_read_api_walks_ownership_chain() {
    let mut graph = TokenGraph::new();
    let primitives = collection("Primitives", CollectionKind::Primitives, &["Value"]);
    let collection_id = primitives.id.clone();
    let mode_id = primitives.default_mode_id.clone();
    graph.insert_collection(primitives);

    let variable_id = VariableId::derived(&collection_id, "Grey/200/Text");
    let mut variable = Variable {
        id: variable_id.clone(),
        name: "Grey/200/Text".to_string(),
        resolved_type: ResolvedType::Color,
        group_id: dtg_model::GroupId::derived(&collection_id, "unset"),
        values_by_mode: BTreeMap::new(),
    };
    variable.set_value(mode_id, VariableValue::Color("#111111".to_string()));
    graph.insert_variable_in(&collection_id, variable);

    let group = graph.group_for_variable(&variable_id).expect("group");
    assert_eq!(group.name, "Grey/200");
    let owner = graph.collection_for_group(&group.id).expect("collection");
    assert_eq!(owner.id, collection_id);
    assert_eq!(graph.variables().count(), 1);
    assert!(graph.aliases().is_empty());
}
