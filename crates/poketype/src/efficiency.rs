//! Per-move effectiveness calculation.
//!
//! Every candidate move type starts at 1.0x. Each defending type folds its
//! chart factor in (2x, 0.5x, 0x or unchanged), then moves sharing a type
//! with the user get the 1.5x same-type attack bonus (STAB) once. Zero is
//! absorbing, so an immunity survives both a weakness and STAB.

use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::chart::effectiveness;
use crate::classify::{classify, Buckets};
use crate::error::{Error, Result};
use crate::multiplier::Multiplier;
use crate::revision::{resolve_revision, Revision};
use crate::types::Type;

/// Most defending types an opponent can have.
pub const MAX_OPPONENT_TYPES: usize = 2;

/// How the calculator treats names that are not types of its revision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypePolicy {
    /// Unknown names and types missing from the revision count as neutral.
    /// Each one is logged at warn level.
    #[default]
    Permissive,
    /// Unknown names, types missing from the revision and opponent lists
    /// longer than [`MAX_OPPONENT_TYPES`] are rejected.
    Strict,
}

/// Final multiplier for each candidate move type.
///
/// Keys are the trimmed, lowercased move type names. A move type listed
/// more than once appears once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Efficiency {
    entries: BTreeMap<String, Multiplier>,
}

impl Efficiency {
    /// Multiplier for a move type, matched case-insensitively.
    pub fn get(&self, move_type: &str) -> Option<Multiplier> {
        self.entries.get(normalize(move_type).as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending move type order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Multiplier)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Bucket and sort the entries.
    pub fn classify(&self) -> Buckets {
        classify(self)
    }
}

impl<K: AsRef<str>> FromIterator<(K, Multiplier)> for Efficiency {
    fn from_iter<I: IntoIterator<Item = (K, Multiplier)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (normalize(k.as_ref()), v))
                .collect(),
        }
    }
}

/// Calculator configuration: the chart revision and the unknown-name policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Calculator {
    revision: Revision,
    policy: TypePolicy,
}

impl Calculator {
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            policy: TypePolicy::default(),
        }
    }

    /// Calculator for the revision in force in `generation`.
    pub fn for_generation(generation: u8) -> Self {
        Self::new(resolve_revision(generation))
    }

    pub fn with_policy(mut self, policy: TypePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn policy(&self) -> TypePolicy {
        self.policy
    }

    /// Multiplier of every move type against the opponent's types.
    ///
    /// `user_types` only drives STAB and may be empty. With the permissive
    /// policy this never fails and opponent types past the second are
    /// ignored; with the strict policy the opponent may have at most
    /// [`MAX_OPPONENT_TYPES`] types and every name in all three lists must
    /// be a type of the calculator's revision.
    pub fn compute<S: AsRef<str>>(
        &self,
        opponent_types: &[S],
        move_types: &[S],
        user_types: &[S],
    ) -> Result<Efficiency> {
        if self.policy == TypePolicy::Strict {
            if opponent_types.len() > MAX_OPPONENT_TYPES {
                return Err(Error::TooManyTypes {
                    count: opponent_types.len(),
                    max: MAX_OPPONENT_TYPES,
                });
            }
            for name in opponent_types.iter().chain(move_types).chain(user_types) {
                self.resolve_strict(name.as_ref())?;
            }
        }
        Ok(self.fold(opponent_types, move_types, user_types))
    }

    fn fold<S: AsRef<str>>(
        &self,
        opponent_types: &[S],
        move_types: &[S],
        user_types: &[S],
    ) -> Efficiency {
        let opponent_types = if opponent_types.len() > MAX_OPPONENT_TYPES {
            warn!(
                "opponent has {} types, ignoring all past the first {}",
                opponent_types.len(),
                MAX_OPPONENT_TYPES
            );
            &opponent_types[..MAX_OPPONENT_TYPES]
        } else {
            opponent_types
        };
        let defenders: Vec<Option<Type>> = opponent_types
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect();
        let stab_types: Vec<String> = user_types.iter().map(|s| normalize(s.as_ref())).collect();

        let mut entries = BTreeMap::new();
        for name in move_types {
            let key = normalize(name.as_ref());
            if entries.contains_key(&key) {
                continue;
            }

            let attacker = self.resolve(name.as_ref());
            let mut multiplier = defenders.iter().fold(Multiplier::ONE, |acc, defender| {
                match (attacker, defender) {
                    (Some(atk), Some(def)) => acc.apply(effectiveness(atk, *def, self.revision)),
                    _ => acc,
                }
            });

            let stab = stab_types.contains(&key);
            if stab {
                multiplier = multiplier.with_stab();
            }

            debug!(
                "{} into {:?} ({}): {}{}",
                key,
                opponent_types.iter().map(|s| s.as_ref()).collect::<Vec<_>>(),
                self.revision,
                multiplier,
                if stab { " (STAB)" } else { "" }
            );
            entries.insert(key, multiplier);
        }

        Efficiency { entries }
    }

    /// Permissive resolution: anything that is not a type of the revision is `None`.
    fn resolve(&self, name: &str) -> Option<Type> {
        match Type::from_str(name) {
            Some(ty) if self.revision.contains(ty) => Some(ty),
            Some(ty) => {
                warn!("{} does not exist in the {} chart, treating as neutral", ty, self.revision);
                None
            }
            None => {
                warn!("unknown type {:?}, treating as neutral", name);
                None
            }
        }
    }

    fn resolve_strict(&self, name: &str) -> Result<Type> {
        let ty: Type = name.parse()?;
        if !self.revision.contains(ty) {
            return Err(Error::UnavailableType {
                ty,
                revision: self.revision,
            });
        }
        Ok(ty)
    }
}

/// Multiplier of every move type against the opponent's types.
///
/// Uses the permissive policy: unknown names and types that do not exist in
/// `revision` are neutral, and opponent types past the second are ignored. See [`Calculator`] for the strict variant.
pub fn compute<S: AsRef<str>>(
    opponent_types: &[S],
    move_types: &[S],
    user_types: &[S],
    revision: Revision,
) -> Efficiency {
    Calculator::new(revision).fold(opponent_types, move_types, user_types)
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
