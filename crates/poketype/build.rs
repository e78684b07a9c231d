//! Build script for poketype.
//!
//! Calls out to poketype_codegen to generate the type tables from JSON data.

use std::path::Path;
use std::{env, println};

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir).join("../../data");

    // Additional rerun triggers for build.rs itself
    println!("cargo:rerun-if-changed=build.rs");

    poketype_codegen::generate_all(Path::new(&out_dir), &data_dir);
}
