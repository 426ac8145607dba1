use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::{CollectionId, GroupId, ModeId};

/// Which generation layer a collection belongs to.
///
/// The kind determines which generator may populate the collection and which
/// upstream kind(s) it is permitted to depend on. The layer order is fixed:
/// primitives and semi-semantics sit at the bottom, color-mode aliases into
/// semi-semantics, interaction-state aliases into color-mode. The legacy
/// semantic kind aliases straight into primitives. Theme and brand
/// collections are declared but never generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKind {
    Primitives,
    SemiSemantics,
    /// Legacy appearance collections, still supported.
    Semantic,
    ColorMode,
    InteractionState,
    Theme,
    Brand,
}

impl CollectionKind {
    /// The kind an alias from this layer must target. Aliases may only cross
    /// one layer boundary, so this doubles as the upstream dependency.
    pub fn alias_target(&self) -> Option<CollectionKind> {
        match self {
            CollectionKind::Semantic => Some(CollectionKind::Primitives),
            CollectionKind::ColorMode => Some(CollectionKind::SemiSemantics),
            CollectionKind::InteractionState => Some(CollectionKind::ColorMode),
            CollectionKind::Primitives
            | CollectionKind::SemiSemantics
            | CollectionKind::Theme
            | CollectionKind::Brand => None,
        }
    }

    /// Every kind this kind's generator reads from. Color-mode and
    /// interaction-state also read the primitives collection's palette
    /// assignment to learn the color families.
    pub fn dependencies(&self) -> &'static [CollectionKind] {
        match self {
            CollectionKind::Semantic => &[CollectionKind::Primitives],
            CollectionKind::ColorMode => {
                &[CollectionKind::SemiSemantics, CollectionKind::Primitives]
            }
            CollectionKind::InteractionState => {
                &[CollectionKind::ColorMode, CollectionKind::Primitives]
            }
            CollectionKind::Primitives
            | CollectionKind::SemiSemantics
            | CollectionKind::Theme
            | CollectionKind::Brand => &[],
        }
    }

    /// Whether regenerating `other` can change this kind's output.
    pub fn is_downstream_of(&self, other: CollectionKind) -> bool {
        self.dependencies()
            .iter()
            .any(|dep| *dep == other || dep.is_downstream_of(other))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Primitives => "primitives",
            CollectionKind::SemiSemantics => "semi-semantics",
            CollectionKind::Semantic => "semantic",
            CollectionKind::ColorMode => "color-mode",
            CollectionKind::InteractionState => "interaction-state",
            CollectionKind::Theme => "theme",
            CollectionKind::Brand => "brand",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    /// Parse a kind tag as it appears in interchange documents. Accepts both
    /// the current `collectionType` tags and the deprecated `generationType`
    /// spellings (which used spaces instead of hyphens).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "-");
        match normalized.as_str() {
            "primitives" | "primitive" => Ok(CollectionKind::Primitives),
            "semi-semantics" => Ok(CollectionKind::SemiSemantics),
            "semantic" | "semantics" => Ok(CollectionKind::Semantic),
            "color-mode" | "colour-mode" => Ok(CollectionKind::ColorMode),
            "interaction-state" => Ok(CollectionKind::InteractionState),
            "theme" => Ok(CollectionKind::Theme),
            "brand" => Ok(CollectionKind::Brand),
            _ => Err(format!("Unknown collection kind: {}", s)),
        }
    }
}

/// A named variant axis within one collection (e.g. Light/Dark).
///
/// Mode ids are scoped to their collection; two collections both declaring a
/// "Light" mode share nothing but the name, so cross-collection resolution
/// always matches by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    pub id: ModeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub kind: CollectionKind,
    /// Declared modes, in display order.
    pub modes: Vec<Mode>,
    pub default_mode_id: ModeId,
    /// Group name -> palette id. Populated for primitives and semi-semantics
    /// collections; the keys double as the brand's color family names.
    #[serde(default)]
    pub palette_assignments: BTreeMap<String, String>,
}

impl Collection {
    pub fn mode(&self, id: &ModeId) -> Option<&Mode> {
        self.modes.iter().find(|mode| &mode.id == id)
    }

    /// Find a mode by display name (case-insensitive).
    pub fn mode_named(&self, name: &str) -> Option<&Mode> {
        self.modes
            .iter()
            .find(|mode| mode.name.eq_ignore_ascii_case(name))
    }

    pub fn default_mode(&self) -> Option<&Mode> {
        self.mode(&self.default_mode_id)
    }

    pub fn first_mode(&self) -> Option<&Mode> {
        self.modes.first()
    }

    /// Color family names, for collections that carry palette assignments.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.palette_assignments.keys().map(String::as_str)
    }

    /// The group a generated variable belongs to. Primitives and
    /// semi-semantics group per assigned family (the first path segment);
    /// every other kind groups by the full path prefix. Slash-less names
    /// land in a group named after the collection.
    pub fn group_name_for_variable(&self, variable_name: &str) -> String {
        match self.kind {
            CollectionKind::Primitives | CollectionKind::SemiSemantics => {
                match variable_name.split_once('/') {
                    Some((family, _)) if !family.is_empty() => family.to_string(),
                    _ => self.name.clone(),
                }
            }
            _ => match crate::variable::split_name(variable_name).0 {
                Some(path) => path.to_string(),
                None => self.name.clone(),
            },
        }
    }
}

/// A named group of variables within one collection. Groups come from the
/// palette assignment (primitives) or from the slash path of variable names
/// (generated and imported data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub collection_id: CollectionId,
}

/// A brand's declared collections, in generation order of dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub collections: Vec<Collection>,
}

impl Brand {
    /// First declared collection of the given kind, the pipeline's
    /// "discoverable upstream" rule.
    pub fn collection_of_kind(&self, kind: CollectionKind) -> Option<&Collection> {
        self.collections
            .iter()
            .find(|collection| collection.kind == kind)
    }

    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections
            .iter()
            .find(|collection| &collection.id == id)
    }
}
