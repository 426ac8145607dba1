use dtg_model::{Collection, ModeId};

/// Resolve the target mode for a cross-layer alias by matching the source
/// mode's name against the target collection's modes. Collections use
/// disjoint mode identifier spaces, so name matching is the only bridge;
/// when no name matches, fall back to the target collection's first mode.
/// Returns `None` only when the target collection declares no modes at all,
/// which leaves the alias incomplete.
pub(crate) fn resolve_target_mode(source_mode_name: &str, target: &Collection) -> Option<ModeId> {
    if let Some(mode) = target.mode_named(source_mode_name) {
        return Some(mode.id.clone());
    }
    let Some(first) = target.first_mode() else {
        tracing::warn!(
            source_mode = source_mode_name,
            collection = %target.name,
            "target collection has no modes, leaving alias unresolved"
        );
        return None;
    };
    tracing::warn!(
        source_mode = source_mode_name,
        collection = %target.name,
        fallback = %first.name,
        "no mode name match in target collection, using first mode"
    );
    Some(first.id.clone())
}
