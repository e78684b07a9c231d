//! poketype - Pokemon type-effectiveness resolution engine
//!
//! Given a defending type combination and a chart revision, computes the
//! multiplier of each candidate move type, including dual-type stacking and
//! the same-type attack bonus, then buckets and sorts the results.
//!
//! ```rust
//! use poketype::{classify, compute, resolve_revision, Multiplier};
//!
//! let revision = resolve_revision(8);
//! let eff = compute(&["water", "flying"], &["electric", "ground"], &["electric"], revision);
//! assert_eq!(eff.get("electric"), Some(Multiplier::new(6 * 4096)));
//!
//! let buckets = classify(&eff);
//! assert_eq!(buckets.immune.names(), vec!["ground"]);
//! ```

/// Type definitions and type sets
pub mod types {
    include!(concat!(env!("OUT_DIR"), "/types.rs"));

    mod traits;
}

/// Type chart lookup and matchup lists
pub mod chart;

/// Bucketing and sorting of results
pub mod classify;

/// Per-move multiplier calculation
pub mod efficiency;

pub mod error;

/// Fixed-point multiplier
pub mod multiplier;

/// Chart revisions and generation mapping
pub mod revision;

// Re-export commonly used types
pub use chart::{effectiveness, lookup_category, matchups, Matchups, Perspective, TypeEffectiveness};
pub use classify::{classify, Bucket, BucketKind, Buckets, Entry};
pub use efficiency::{compute, Calculator, Efficiency, TypePolicy, MAX_OPPONENT_TYPES};
pub use error::{Error, Result};
pub use multiplier::Multiplier;
pub use revision::{resolve_revision, Revision, DEFAULT_GENERATION};
pub use types::{Type, TypeSet};
