//! Error type for the strict calculator policy and name parsing.

use thiserror::Error;

use crate::revision::Revision;
use crate::types::Type;

/// Errors returned when a name cannot be resolved.
///
/// Chart lookups never fail. These only surface from `FromStr` impls and
/// from a [`Calculator`](crate::Calculator) running with
/// [`TypePolicy::Strict`](crate::TypePolicy::Strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name is not one of the 18 types.
    #[error("unknown type: {name:?}")]
    UnknownType { name: String },

    /// The type exists, but not in the selected chart revision.
    #[error("type {ty} does not exist in the {revision} chart")]
    UnavailableType { ty: Type, revision: Revision },

    /// More defending types than a Pokemon can have.
    #[error("an opponent has at most {max} types, got {count}")]
    TooManyTypes { count: usize, max: usize },

    /// The name is not a chart revision.
    #[error("unknown chart revision: {name:?} (expected original, revised or modern)")]
    UnknownRevision { name: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
