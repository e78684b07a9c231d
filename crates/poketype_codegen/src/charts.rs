//! Per-revision type chart generation.
//!
//! Each revision is a standalone, defender-keyed JSON file. The generator
//! validates it against the types available in that revision and
//! materializes a full `[defender][attacker]` table, so the engine never
//! falls back from one revision to another at runtime.

use crate::helpers::load_types;
use crate::models::{ChartRow, RevisionSpec, TypeEntry, REVISIONS};
use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

/// Cell values, in the order of the `TypeEffectiveness` variants.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Neutral,
    SuperEffective,
    NotVeryEffective,
    Immune,
}

impl Cell {
    fn tokens(self) -> TokenStream {
        let ident = match self {
            Cell::Neutral => format_ident!("Neutral"),
            Cell::SuperEffective => format_ident!("SuperEffective"),
            Cell::NotVeryEffective => format_ident!("NotVeryEffective"),
            Cell::Immune => format_ident!("Immune"),
        };
        quote! { TypeEffectiveness::#ident }
    }
}

/// Generate `charts.rs` with one table and one type set per revision.
pub fn generate(out_dir: &Path, data_dir: &Path) {
    let types = load_types(data_dir);
    let count = types.len();

    let mut items = Vec::new();
    for revision in REVISIONS {
        let path = data_dir.join("typechart").join(format!("{}.json", revision.name));
        let json = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("read {}: {}", path.display(), e));
        let rows: BTreeMap<String, ChartRow> = serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("parse {}: {}", path.display(), e));

        let matrix = build_matrix(revision, &types, &rows);

        let available_bits: u32 = types
            .iter()
            .enumerate()
            .filter(|(_, t)| t.gen <= revision.first_gen)
            .fold(0, |bits, (i, _)| bits | (1 << i));

        let shouty = revision.name.to_shouty_snake_case();
        let chart_ident = format_ident!("{}_CHART", shouty);
        let types_ident = format_ident!("{}_TYPES", shouty);
        let chart_doc = format!(
            "{} chart (generation {} onward), indexed `[defender][attacker]`",
            revision.name, revision.first_gen
        );
        let types_doc = format!("Types present in the {} chart", revision.name);

        let matrix_rows: Vec<TokenStream> = matrix
            .iter()
            .map(|row| {
                let cells = row.iter().map(|c| c.tokens());
                quote! { [#(#cells),*] }
            })
            .collect();

        items.push(quote! {
            #[doc = #types_doc]
            pub(crate) const #types_ident: TypeSet = TypeSet::from_bits_truncate(#available_bits);

            #[doc = #chart_doc]
            pub(crate) static #chart_ident: [[TypeEffectiveness; #count]; #count] = [
                #(#matrix_rows),*
            ];
        });
    }

    let code = quote! {
        use crate::chart::TypeEffectiveness;
        use crate::types::TypeSet;

        #(#items)*
    };

    let dest = out_dir.join("charts.rs");
    fs::write(&dest, code.to_string()).expect("write charts.rs");
}

/// Validate one revision's rows and expand them into a full matrix.
///
/// Panics (failing the build) when a row is missing or extra, when a list
/// names a type unknown or unavailable in the revision, or when an attacker
/// appears in more than one list of the same row.
fn build_matrix(
    revision: &RevisionSpec,
    types: &[TypeEntry],
    rows: &BTreeMap<String, ChartRow>,
) -> Vec<Vec<Cell>> {
    let index: HashMap<&str, usize> = types
        .iter()
        .enumerate()
        .map(|(i, t)| (t.name.as_str(), i))
        .collect();

    let available: BTreeSet<&str> = types
        .iter()
        .filter(|t| t.gen <= revision.first_gen)
        .map(|t| t.name.as_str())
        .collect();
    let keys: BTreeSet<&str> = rows.keys().map(|k| k.as_str()).collect();

    for missing in available.difference(&keys) {
        panic!("{} chart: missing row for {}", revision.name, missing);
    }
    for extra in keys.difference(&available) {
        panic!(
            "{} chart: row {} is not a type of this revision",
            revision.name, extra
        );
    }

    let mut matrix = vec![vec![Cell::Neutral; types.len()]; types.len()];

    for (defender, row) in rows {
        let def_idx = index[defender.as_str()];
        let lists = [
            (&row.weak_to, Cell::SuperEffective),
            (&row.resists, Cell::NotVeryEffective),
            (&row.immune_to, Cell::Immune),
        ];

        for (list, cell) in lists {
            for attacker in list {
                assert!(
                    available.contains(attacker.as_str()),
                    "{} chart: {} row lists {}, which is not a type of this revision",
                    revision.name,
                    defender,
                    attacker
                );
                let atk_idx = index[attacker.as_str()];
                assert!(
                    matrix[def_idx][atk_idx] == Cell::Neutral,
                    "{} chart: {} appears twice in the {} row",
                    revision.name,
                    attacker,
                    defender
                );
                matrix[def_idx][atk_idx] = cell;
            }
        }
    }

    matrix
}
