//! Type enum, type set flags and name lookup generation.

use crate::helpers::{load_types, to_valid_ident};
use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::writeln;

/// Generate the Type enum, the TypeSet bitflags and the phf name lookup.
pub fn generate(out_dir: &Path, data_dir: &Path) {
    let types = load_types(data_dir);
    let count = types.len();

    let idents: Vec<_> = types
        .iter()
        .map(|t| format_ident!("{}", to_valid_ident(&t.name)))
        .collect();

    let variants: Vec<TokenStream> = idents
        .iter()
        .enumerate()
        .map(|(i, ident)| {
            let idx = i as u8;
            quote! { #ident = #idx }
        })
        .collect();

    let name_arms: Vec<TokenStream> = types
        .iter()
        .zip(&idents)
        .map(|(t, ident)| {
            let name = t.name.as_str();
            quote! { Type::#ident => #name }
        })
        .collect();

    let gen_arms: Vec<TokenStream> = types
        .iter()
        .zip(&idents)
        .map(|(t, ident)| {
            let gen = t.gen;
            quote! { Type::#ident => #gen }
        })
        .collect();

    let flag_idents: Vec<_> = types
        .iter()
        .map(|t| format_ident!("{}", t.name.to_shouty_snake_case()))
        .collect();

    let flag_consts: Vec<TokenStream> = flag_idents
        .iter()
        .enumerate()
        .map(|(i, ident)| {
            let bit = 1u32 << i;
            quote! { const #ident = #bit; }
        })
        .collect();

    let flag_arms: Vec<TokenStream> = idents
        .iter()
        .zip(&flag_idents)
        .map(|(ident, flag)| quote! { Type::#ident => TypeSet::#flag })
        .collect();

    // String -> Type lookup, keyed by the lowercase name
    let mut phf_map = phf_codegen::Map::new();
    for (t, ident) in types.iter().zip(&idents) {
        phf_map.entry(t.name.as_str(), &format!("Type::{}", ident));
    }
    let phf_str = phf_map.build().to_string();

    let code = quote! {
        use bitflags::bitflags;
        use serde::{Deserialize, Serialize};

        /// Elemental type, in canonical chart order
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        #[repr(u8)]
        pub enum Type {
            #(#variants),*
        }

        impl Type {
            /// Total number of types across all revisions
            pub const COUNT: usize = #count;

            /// Every type in canonical order
            pub const ALL: [Type; #count] = [#(Type::#idents),*];

            /// Parse a type name (case-insensitive, surrounding whitespace ignored)
            #[inline]
            pub fn from_str(s: &str) -> Option<Self> {
                TYPE_LOOKUP.get(s.trim().to_ascii_lowercase().as_str()).copied()
            }

            /// Canonical lowercase name
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }

            /// Generation that introduced this type
            #[inline]
            pub const fn generation(self) -> u8 {
                match self {
                    #(#gen_arms,)*
                }
            }

            /// Single-member set containing this type
            #[inline]
            pub const fn flag(self) -> TypeSet {
                match self {
                    #(#flag_arms,)*
                }
            }
        }

        bitflags! {
            /// Set of types, one bit per `Type` discriminant
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct TypeSet: u32 {
                #(#flag_consts)*
            }
        }
    };

    let dest = out_dir.join("types.rs");
    let mut file = BufWriter::new(File::create(&dest).expect("create types.rs"));
    writeln!(file, "{}", code).unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        "static TYPE_LOOKUP: phf::Map<&'static str, Type> = {};",
        phf_str
    )
    .unwrap();
}
