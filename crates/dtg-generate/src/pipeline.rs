//! Brand generation pipeline: kind-dispatched layer generation with a
//! caller-owned per-pass cache.
//!
//! Each collection is generated at most once per cache lifetime; recursive
//! upstream generation shares the same cache, and a fresh cache starts a
//! fresh pass. The cache is plain owned state, never shared between passes,
//! so independent passes cannot observe each other.

use std::collections::BTreeMap;

use dtg_model::{Brand, Collection, CollectionId, CollectionKind, TokenGraph, Variable};
use dtg_standards::palette::PaletteSource;

use crate::appearance::generate_appearance_variables;
use crate::color_mode::generate_color_mode_variables;
use crate::interaction::generate_interaction_variables;
use crate::primitives::generate_primitive_variables;

/// Memoized per-collection output for one generation pass.
#[derive(Debug, Default)]
pub struct GenerationCache {
    entries: BTreeMap<CollectionId, Vec<Variable>>,
}

impl GenerationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cached(&self, id: &CollectionId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the entry for an edited collection together with every cached
    /// collection downstream of its kind, forcing regeneration on the next
    /// request.
    pub fn invalidate(&mut self, brand: &Brand, id: &CollectionId) {
        let kind = brand.collection(id).map(|collection| collection.kind);
        self.entries.remove(id);
        let Some(kind) = kind else {
            return;
        };
        for collection in &brand.collections {
            if collection.kind.is_downstream_of(kind) {
                self.entries.remove(&collection.id);
            }
        }
    }
}

/// Generate (or fetch from cache) the variables for one declared collection.
///
/// Upstream collections are generated on demand through the same cache.
/// Missing upstreams and kinds without a generator yield an empty set with a
/// warning, never an error.
pub fn variables_for_collection(
    brand: &Brand,
    collection: &Collection,
    source: &dyn PaletteSource,
    cache: &mut GenerationCache,
) -> Vec<Variable> {
    if let Some(cached) = cache.entries.get(&collection.id) {
        return cached.clone();
    }

    let variables = match collection.kind {
        CollectionKind::Primitives | CollectionKind::SemiSemantics => {
            generate_primitive_variables(collection, source)
        }
        CollectionKind::Semantic => match brand.collection_of_kind(CollectionKind::Primitives) {
            Some(primitives) => {
                let upstream = variables_for_collection(brand, primitives, source, cache);
                generate_appearance_variables(collection, primitives, &upstream)
            }
            None => {
                warn_missing_upstream(collection, CollectionKind::Primitives);
                Vec::new()
            }
        },
        CollectionKind::ColorMode => {
            match (
                brand.collection_of_kind(CollectionKind::SemiSemantics),
                brand.collection_of_kind(CollectionKind::Primitives),
            ) {
                (Some(semi_semantics), Some(primitives)) => {
                    let families = family_names(primitives);
                    let upstream = variables_for_collection(brand, semi_semantics, source, cache);
                    generate_color_mode_variables(collection, semi_semantics, &upstream, &families)
                }
                (None, _) => {
                    warn_missing_upstream(collection, CollectionKind::SemiSemantics);
                    Vec::new()
                }
                (_, None) => {
                    warn_missing_upstream(collection, CollectionKind::Primitives);
                    Vec::new()
                }
            }
        }
        CollectionKind::InteractionState => {
            match (
                brand.collection_of_kind(CollectionKind::ColorMode),
                brand.collection_of_kind(CollectionKind::Primitives),
            ) {
                (Some(color_mode), Some(primitives)) => {
                    let families = family_names(primitives);
                    let upstream = variables_for_collection(brand, color_mode, source, cache);
                    generate_interaction_variables(collection, color_mode, &upstream, &families)
                }
                (None, _) => {
                    warn_missing_upstream(collection, CollectionKind::ColorMode);
                    Vec::new()
                }
                (_, None) => {
                    warn_missing_upstream(collection, CollectionKind::Primitives);
                    Vec::new()
                }
            }
        }
        CollectionKind::Theme | CollectionKind::Brand => {
            tracing::warn!(
                collection = %collection.name,
                kind = %collection.kind,
                "no generator for this collection kind"
            );
            Vec::new()
        }
    };

    cache
        .entries
        .insert(collection.id.clone(), variables.clone());
    variables
}

/// Generate every declared collection in one pass over a shared cache.
pub fn all_variables_for_brand(
    brand: &Brand,
    source: &dyn PaletteSource,
    cache: &mut GenerationCache,
) -> BTreeMap<CollectionId, Vec<Variable>> {
    brand
        .collections
        .iter()
        .map(|collection| {
            (
                collection.id.clone(),
                variables_for_collection(brand, collection, source, cache),
            )
        })
        .collect()
}

/// Run a full generation pass and assemble the result into a token graph
/// for the exporter and presentation read API.
pub fn assemble_graph(brand: &Brand, source: &dyn PaletteSource) -> TokenGraph {
    let mut cache = GenerationCache::new();
    let mut graph = TokenGraph::new();
    for collection in &brand.collections {
        graph.insert_collection(collection.clone());
    }
    for collection in &brand.collections {
        for mut variable in variables_for_collection(brand, collection, source, &mut cache) {
            let group_name = collection.group_name_for_variable(&variable.name);
            variable.group_id = graph.ensure_group(&collection.id, &group_name);
            graph.insert_variable(variable);
        }
    }
    graph
}

fn family_names(primitives: &Collection) -> Vec<String> {
    primitives.families().map(str::to_string).collect()
}

fn warn_missing_upstream(collection: &Collection, missing: CollectionKind) {
    tracing::warn!(
        collection = %collection.name,
        missing = %missing,
        "brand declares no upstream collection of the required kind"
    );
}
