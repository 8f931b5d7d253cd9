use std::path::{Path, PathBuf};

use selector::{Catalog, ModelRecord, Session, SuggestionLimits};
use tempfile::TempDir;

pub const SMALL_CATALOG_JSON: &str = r#"{
    "Ford": [
        {"name": "F-150", "type": "Truck", "subtiers": ["2-door", "4-door"]},
        {"name": "Focus", "type": "Sedan", "subtiers": ["4-Door"]}
    ],
    "Mazda": [
        {"name": "CX-5", "type": "SUV", "subtiers": ["Compact"]}
    ],
    "Mercedes-Benz": [
        {"name": "C-Class", "type": "Sedan", "subtiers": ["4-Door"]},
        {"name": "Sprinter", "type": "Van", "subtiers": ["Cargo", "Passenger"]}
    ]
}"#;

/// Path of the catalog shipped with the crate.
pub fn shipped_catalog_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/models.json")
}

pub fn small_catalog() -> Catalog {
    Catalog::from_json_str(SMALL_CATALOG_JSON).expect("fixture catalog is valid")
}

pub fn small_session() -> Session {
    Session::new(small_catalog(), SuggestionLimits::default())
}

pub fn ford_catalog() -> Catalog {
    Catalog::new().with_make(
        "Ford",
        vec![ModelRecord::new("F-150", "Truck", ["2-door", "4-door"])],
    )
}

/// Writes `contents` to `models.json` in a fresh temp dir.
pub fn write_catalog(contents: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("models.json");
    std::fs::write(&path, contents).expect("write catalog");
    (temp, path)
}
