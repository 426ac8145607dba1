use std::fmt;

use serde_json::Value;

/// Which interchange shape a parsed document appears to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// This system's self-describing flattened export.
    Graph,
    /// The host design tool's nested export.
    Native,
    Unknown,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Graph => "graph",
            DocumentFormat::Native => "native",
            DocumentFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sniff the document shape from its signature fields. The graph export
/// carries top-level `groups`/`variables`/`aliases` arrays; the native shape
/// has `collections` plus `schemaVersion`/`lastModified`. Checked in that
/// order because the graph export also carries `collections`.
pub fn detect_format(document: &Value) -> DocumentFormat {
    let Some(root) = document.as_object() else {
        return DocumentFormat::Unknown;
    };
    if root.contains_key("groups") && root.contains_key("variables") && root.contains_key("aliases")
    {
        return DocumentFormat::Graph;
    }
    if root.contains_key("collections")
        && (root.contains_key("schemaVersion") || root.contains_key("lastModified"))
    {
        return DocumentFormat::Native;
    }
    // A bare collections array with nested modes/variables is still the
    // native shape, just without its header fields.
    if let Some(collections) = root.get("collections").and_then(Value::as_array) {
        let looks_native = collections.iter().all(|collection| {
            collection
                .as_object()
                .is_some_and(|map| map.contains_key("modes") && map.contains_key("variables"))
        });
        if looks_native && !collections.is_empty() {
            return DocumentFormat::Native;
        }
    }
    DocumentFormat::Unknown
}
