use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of scale types every palette step resolves.
///
/// `key()` is the lowercase key the palette source is queried with;
/// `label()` is the capitalized segment used in variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Surface,
    Container,
    Border,
    Outline,
    Fill,
    Text,
    Icon,
    Overlay,
}

impl ScaleType {
    pub const ALL: [ScaleType; 8] = [
        ScaleType::Surface,
        ScaleType::Container,
        ScaleType::Border,
        ScaleType::Outline,
        ScaleType::Fill,
        ScaleType::Text,
        ScaleType::Icon,
        ScaleType::Overlay,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ScaleType::Surface => "surface",
            ScaleType::Container => "container",
            ScaleType::Border => "border",
            ScaleType::Outline => "outline",
            ScaleType::Fill => "fill",
            ScaleType::Text => "text",
            ScaleType::Icon => "icon",
            ScaleType::Overlay => "overlay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScaleType::Surface => "Surface",
            ScaleType::Container => "Container",
            ScaleType::Border => "Border",
            ScaleType::Outline => "Outline",
            ScaleType::Fill => "Fill",
            ScaleType::Text => "Text",
            ScaleType::Icon => "Icon",
            ScaleType::Overlay => "Overlay",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScaleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ScaleType::ALL
            .into_iter()
            .find(|scale| scale.key() == normalized)
            .ok_or_else(|| format!("Unknown scale type: {}", s))
    }
}
