//! Test helper functions for the type chart tests.
//!
//! These helpers load the fixture file and check each case against the engine.

use poketype::{classify, compute, lookup_category, resolve_revision, Bucket};
use std::fs::File;
use std::io::BufReader;

use super::fixtures::{CalculationCase, ChartFixture, LookupCase};

/// Fixture path, resolved from this crate's manifest directory.
pub const FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../tests/fixtures/typechart/matchups.json"
);

pub fn load_fixture() -> ChartFixture {
    let file = File::open(FIXTURE_PATH)
        .unwrap_or_else(|e| panic!("Failed to open matchups.json at {}: {}", FIXTURE_PATH, e));
    serde_json::from_reader(BufReader::new(file)).expect("Failed to parse matchups.json")
}

/// Check one chart fact.
pub fn run_lookup(case: &LookupCase) -> Result<(), String> {
    let got = lookup_category(&case.attacker, &case.defender, case.revision);
    if got != case.expected {
        return Err(format!(
            "{} vs {} under {}: expected {:?}, got {:?}",
            case.attacker, case.defender, case.revision, case.expected, got
        ));
    }
    Ok(())
}

/// Check one calculator case, and its buckets when the fixture lists them.
pub fn run_calculation(case: &CalculationCase) -> Result<(), String> {
    let revision = resolve_revision(case.generation);
    let eff = compute(
        case.opponent.as_slice(),
        case.moves.as_slice(),
        case.user.as_slice(),
        revision,
    );

    let got: Vec<(String, f64)> = eff.iter().map(|(k, v)| (k.to_string(), v.as_f64())).collect();
    let expected: Vec<(String, f64)> = case
        .expected
        .iter()
        .map(|(k, v)| (k.clone(), v.as_f64()))
        .collect();
    if got != expected {
        return Err(format!("multipliers: expected {:?}, got {:?}", expected, got));
    }

    if let Some(ref buckets) = case.buckets {
        let classified = classify(&eff);
        check_bucket("super effective", &classified.super_effective, &buckets.super_effective)?;
        check_bucket("neutral", &classified.neutral, &buckets.neutral)?;
        check_bucket(
            "not very effective",
            &classified.not_very_effective,
            &buckets.not_very_effective,
        )?;
        check_bucket("immune", &classified.immune, &buckets.immune)?;
    }

    Ok(())
}

fn check_bucket(label: &str, bucket: &Bucket, expected: &[String]) -> Result<(), String> {
    let names = bucket.names();
    if names != expected {
        return Err(format!("{} bucket: expected {:?}, got {:?}", label, expected, names));
    }
    Ok(())
}

/// Sanitize a fixture id for use as a test name segment
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
