pub mod collection;
pub mod error;
pub mod graph;
pub mod ids;
pub mod lookup;
pub mod variable;

pub use collection::{Brand, Collection, CollectionKind, Group, Mode};
pub use error::{ModelError, Result};
pub use graph::{AliasEdge, TokenGraph};
pub use ids::{CollectionId, GroupId, ModeId, VariableId};
pub use lookup::NameIndex;
pub use variable::{AliasRef, ResolvedType, Variable, VariableValue, split_name};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_serializes() {
        let id = CollectionId::new("col-1").expect("collection id");
        let mode_id = ModeId::derived(&id, "Light");
        let collection = Collection {
            id,
            name: "Colour Mode".to_string(),
            kind: CollectionKind::ColorMode,
            modes: vec![Mode {
                id: mode_id.clone(),
                name: "Light".to_string(),
            }],
            default_mode_id: mode_id,
            palette_assignments: Default::default(),
        };
        let json = serde_json::to_string(&collection).expect("serialize collection");
        let round: Collection = serde_json::from_str(&json).expect("deserialize collection");
        assert_eq!(round, collection);
        assert!(json.contains(r#""kind":"color-mode""#));
    }
}
