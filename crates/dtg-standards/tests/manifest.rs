//! Manifest loading from disk.

use std::io::Write;

use dtg_standards::palette::PaletteSource;
use dtg_standards::{ScaleType, load_brand_manifest};

#[test]
fn load_manifest_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r##"
[brand]
id = "acme"
name = "Acme"

[[collections]]
name = "Primitives"
kind = "primitives"
modes = ["Value"]

[collections.palettes]
Grey = "Grey-palette"

[palettes.Grey-palette.2500]
surface = "#FFFFFF"
text = "#1A1A1A"
"##
    )
    .expect("write manifest");

    let manifest = load_brand_manifest(file.path()).expect("load manifest");
    let brand = manifest.to_brand().expect("build brand");
    assert_eq!(brand.id, "acme");

    let table = manifest.palette_table();
    assert_eq!(
        table.color("Grey-palette", 2500, ScaleType::Surface),
        Some("#FFFFFF".to_string())
    );
    assert_eq!(
        table.color("Grey-palette", 2500, ScaleType::Text),
        Some("#1A1A1A".to_string())
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = load_brand_manifest(&dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(dtg_standards::StandardsError::Io { .. })
    ));
}
