//! Trait impls and helpers for the generated `Type` and `TypeSet`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::{Type, TypeSet};
use crate::error::Error;

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_str(s).ok_or_else(|| Error::UnknownType { name: s.to_string() })
    }
}

impl TypeSet {
    /// Whether `ty` is a member.
    #[inline]
    pub const fn has(self, ty: Type) -> bool {
        self.contains(ty.flag())
    }

    /// Members in canonical type order.
    pub fn types(self) -> impl Iterator<Item = Type> {
        Type::ALL.into_iter().filter(move |ty| self.has(*ty))
    }

    /// Lowercase names of the members in canonical type order.
    pub fn names(self) -> Vec<&'static str> {
        self.types().map(Type::name).collect()
    }
}

impl FromIterator<Type> for TypeSet {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TypeSet::empty(), |set, ty| set | ty.flag())
    }
}

/// Comma separated names, e.g. `fire, water`.
impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

/// Serialized as a list of type names.
impl Serialize for TypeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.types())
    }
}
