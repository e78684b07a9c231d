//! Helper functions for code generation.

use heck::ToPascalCase;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::TypeEntry;

/// Convert a key to a valid Rust identifier in PascalCase.
/// Handles keys starting with digits by prefixing with underscore.
pub fn to_valid_ident(key: &str) -> String {
    let pascal = key.to_pascal_case();
    if pascal.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
        format!("_{}", pascal)
    } else {
        pascal
    }
}

/// Load `types.json` in canonical order and check it for duplicates.
pub fn load_types(data_dir: &Path) -> Vec<TypeEntry> {
    let json = fs::read_to_string(data_dir.join("types.json")).expect("types.json");
    let types: Vec<TypeEntry> = serde_json::from_str(&json).expect("parse types.json");

    assert!(
        types.len() <= 32,
        "types.json lists {} types, TypeSet holds at most 32",
        types.len()
    );

    let mut seen = HashSet::new();
    for entry in &types {
        assert_eq!(
            entry.name,
            entry.name.to_lowercase(),
            "type names in types.json must be lowercase: {}",
            entry.name
        );
        assert!(entry.gen >= 1, "type {} introduced in generation 0", entry.name);
        assert!(seen.insert(entry.name.as_str()), "duplicate type {}", entry.name);
    }

    types
}
