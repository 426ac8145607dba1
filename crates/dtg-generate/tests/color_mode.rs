//! Color-mode layer generation tests.

mod common;

use common::{SolidSource, collection, collection_with_palettes, literal_variable};
use dtg_generate::{generate_color_mode_variables, generate_primitive_variables};
use dtg_model::CollectionKind;

#[test]
fn root_variable_aliases_both_polarities() {
    let semi = collection("Semi semantics", CollectionKind::SemiSemantics, &["Value"]);
    let light_target = literal_variable(&semi, "Grey/2500/Surface");
    let dark_target = literal_variable(&semi, "Grey/200/Surface");
    let upstream = vec![light_target.clone(), dark_target.clone()];
    let target = collection("Colour Mode", CollectionKind::ColorMode, &["Light", "Dark"]);

    let variables =
        generate_color_mode_variables(&target, &semi, &upstream, &["Grey".to_string()]);

    // Only offset 0 / Surface resolves in both polarities.
    assert_eq!(variables.len(), 1);
    let variable = &variables[0];
    assert_eq!(
        variable.name,
        "Grey/Semi semantics/Root/[Colour Mode] Surface"
    );

    let light_mode = &target.mode_named("Light").expect("light mode").id;
    let dark_mode = &target.mode_named("Dark").expect("dark mode").id;
    let light_alias = variable
        .value_for_mode(light_mode)
        .and_then(|value| value.as_alias())
        .expect("light alias");
    assert_eq!(light_alias.variable, light_target.id);
    assert_eq!(light_alias.mode, Some(semi.default_mode_id.clone()));
    let dark_alias = variable
        .value_for_mode(dark_mode)
        .and_then(|value| value.as_alias())
        .expect("dark alias");
    assert_eq!(dark_alias.variable, dark_target.id);
}

#[test]
fn one_missing_polarity_skips_the_variable() {
    let semi = collection("Semi semantics", CollectionKind::SemiSemantics, &["Value"]);
    // Light target only; the dark root is absent.
    let upstream = vec![literal_variable(&semi, "Grey/2500/Surface")];
    let target = collection("Colour Mode", CollectionKind::ColorMode, &["Light", "Dark"]);

    let variables =
        generate_color_mode_variables(&target, &semi, &upstream, &["Grey".to_string()]);

    assert!(variables.is_empty());
}

#[test]
fn complete_upstream_yields_every_offset_and_scale() {
    let semi = collection_with_palettes(
        "Semi semantics",
        CollectionKind::SemiSemantics,
        &["Value"],
        &[("Grey", "Grey-palette")],
    );
    let upstream = generate_primitive_variables(&semi, &SolidSource("#808080"));
    let target = collection("Colour Mode", CollectionKind::ColorMode, &["Light", "Dark"]);

    let variables =
        generate_color_mode_variables(&target, &semi, &upstream, &["Grey".to_string()]);

    // 6 offsets x 8 scales.
    assert_eq!(variables.len(), 48);
    assert!(
        variables
            .iter()
            .any(|variable| variable.name == "Grey/Semi semantics/Root+5/[Colour Mode] Text")
    );
}

#[test]
fn missing_polarity_mode_generates_nothing() {
    let semi = collection("Semi semantics", CollectionKind::SemiSemantics, &["Value"]);
    let upstream = vec![
        literal_variable(&semi, "Grey/2500/Surface"),
        literal_variable(&semi, "Grey/200/Surface"),
    ];
    let target = collection("Colour Mode", CollectionKind::ColorMode, &["Light"]);

    let variables =
        generate_color_mode_variables(&target, &semi, &upstream, &["Grey".to_string()]);

    assert!(variables.is_empty());
}
