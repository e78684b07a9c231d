//! Code generation helpers for poketype.
//!
//! This crate reads the type list and the per-revision type charts from
//! JSON data files, validates them, and generates the static Rust tables
//! used by the effectiveness engine.

mod charts;
mod helpers;
mod models;
mod types;

use std::path::Path;
use std::println;

/// Generate all code from the data directory into the output directory.
///
/// This is the main entry point called from poketype's build.rs.
pub fn generate_all(out_dir: &Path, data_dir: &Path) {
    // Rerun if any data file changes
    println!("cargo:rerun-if-changed={}", data_dir.join("types.json").display());
    for revision in models::REVISIONS {
        println!(
            "cargo:rerun-if-changed={}",
            data_dir
                .join("typechart")
                .join(format!("{}.json", revision.name))
                .display()
        );
    }

    types::generate(out_dir, data_dir);
    charts::generate(out_dir, data_dir);
}
