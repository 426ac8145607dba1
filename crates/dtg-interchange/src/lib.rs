//! Interchange adapters for the token graph.
//!
//! Importing is a three-step contract: sniff the document shape
//! ([`detect_format`]), validate structure ([`validate_native`]), then
//! convert with a final alias-resolution pass. Exporting flattens the graph
//! into name-sorted arrays ([`serialize_graph`]) or renders it back into
//! the host tool's native shape ([`to_native_document`]).

pub mod color;
pub mod detect;
pub mod error;
pub mod export;
pub mod import;
pub mod schema;
pub mod validate;

pub use crate::color::{RgbaColor, hex_to_rgba, rgba_to_hex};
pub use crate::detect::{DocumentFormat, detect_format};
pub use crate::error::InterchangeError;
pub use crate::export::{serialize_graph, to_graph_json, to_native_document, to_native_json};
pub use crate::import::{
    ImportReport, import_document, import_graph, import_native, resolve_pending_aliases,
};
pub use crate::schema::{NativeDocument, NativeValue, SCHEMA_VERSION, SerializedGraph};
pub use crate::validate::{ValidationReport, validate_native};
