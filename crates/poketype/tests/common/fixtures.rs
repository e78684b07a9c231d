//! Fixture data structures for the type chart tests.
//!
//! These types are deserialized from `tests/fixtures/typechart/matchups.json`.

use poketype::{Multiplier, Revision, TypeEffectiveness};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Root structure for the type chart fixture file.
#[derive(Deserialize)]
pub struct ChartFixture {
    #[allow(dead_code)]
    pub meta: Option<serde_json::Value>,
    pub lookups: Vec<LookupCase>,
    pub calculations: Vec<CalculationCase>,
}

/// A single chart fact: one attacker, one defender, one revision.
#[derive(Deserialize, Debug, Clone)]
pub struct LookupCase {
    pub id: String,
    pub revision: Revision,
    pub attacker: String,
    pub defender: String,
    pub expected: TypeEffectiveness,
}

/// An end-to-end calculator case.
#[derive(Deserialize, Debug, Clone)]
pub struct CalculationCase {
    pub id: String,
    pub generation: u8,
    pub opponent: Vec<String>,
    pub moves: Vec<String>,
    #[serde(default)]
    pub user: Vec<String>,
    pub expected: BTreeMap<String, Multiplier>,
    #[serde(default)]
    pub buckets: Option<ExpectedBuckets>,
}

/// Expected bucket contents, in order.
#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedBuckets {
    pub super_effective: Vec<String>,
    pub neutral: Vec<String>,
    pub not_very_effective: Vec<String>,
    pub immune: Vec<String>,
}
