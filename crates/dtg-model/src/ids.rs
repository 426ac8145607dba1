#![deny(unsafe_code)]

use std::fmt;

use sha2::{Digest, Sha256};

use crate::ModelError;

/// Derive a deterministic 16-byte id from a namespace and name parts,
/// rendered as lowercase hex. Generated entities mint their ids this way so
/// that regenerating the same brand configuration yields identical ids;
/// imported entities keep whatever ids the document carried.
fn derived_hex(namespace: &str, parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    for part in parts {
        hasher.update([0u8]);
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();
    hex::encode(&digest[..16])
}

macro_rules! string_id {
    ($name:ident, $entity:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ModelError::EmptyId { entity: $entity });
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(CollectionId, "collection");
string_id!(ModeId, "mode");
string_id!(GroupId, "group");
string_id!(VariableId, "variable");

impl CollectionId {
    pub fn derived(brand: &str, name: &str) -> Self {
        Self(derived_hex("collection", &[brand, name]))
    }
}

impl ModeId {
    pub fn derived(collection: &CollectionId, name: &str) -> Self {
        Self(derived_hex("mode", &[collection.as_str(), name]))
    }
}

impl GroupId {
    pub fn derived(collection: &CollectionId, name: &str) -> Self {
        Self(derived_hex("group", &[collection.as_str(), name]))
    }
}

impl VariableId {
    pub fn derived(collection: &CollectionId, name: &str) -> Self {
        Self(derived_hex("variable", &[collection.as_str(), name]))
    }
}
