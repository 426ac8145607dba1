#![deny(unsafe_code)]

pub mod error;
pub mod interaction;
pub mod manifest;
pub mod naming;
pub mod palette;
pub mod scales;
pub mod steps;

pub use crate::error::StandardsError;
pub use crate::interaction::{BackgroundLevel, FillEmphasis, InteractionState};
pub use crate::manifest::{BrandManifest, load_brand_manifest};
pub use crate::palette::{PaletteSource, PaletteTable};
pub use crate::scales::ScaleType;
