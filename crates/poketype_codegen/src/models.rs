//! Serde models for the JSON data files.

use serde::Deserialize;

/// One row of `types.json`.
#[derive(Deserialize, Debug, Clone)]
pub struct TypeEntry {
    pub name: String,
    /// Generation that introduced the type.
    pub gen: u8,
}

/// One defending row of a `typechart/<revision>.json` file.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartRow {
    /// Attacking types that hit this type for 2x.
    #[serde(default)]
    pub weak_to: Vec<String>,
    /// Attacking types that hit this type for 0.5x.
    #[serde(default)]
    pub resists: Vec<String>,
    /// Attacking types that do not affect this type.
    #[serde(default)]
    pub immune_to: Vec<String>,
}

/// A chart revision and the first generation it applies to.
pub struct RevisionSpec {
    pub name: &'static str,
    pub first_gen: u8,
}

/// Chart revisions, oldest first. Each has its own data file.
pub const REVISIONS: &[RevisionSpec] = &[
    RevisionSpec { name: "original", first_gen: 1 },
    RevisionSpec { name: "revised", first_gen: 2 },
    RevisionSpec { name: "modern", first_gen: 6 },
];
