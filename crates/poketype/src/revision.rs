//! Type chart revisions.
//!
//! The chart changed twice over the series' history:
//!
//! - **Original** (Gen 1): 15 types, with the Ghost/Psychic immunity quirk.
//! - **Revised** (Gen 2-5): adds Dark and Steel.
//! - **Modern** (Gen 6+): adds Fairy and retunes Steel.
//!
//! Each revision owns a complete table, so lookups never fall through from
//! one revision to another.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chart::{tables, TypeEffectiveness};
use crate::error::Error;
use crate::types::{Type, TypeSet};

/// Generation used when the caller does not name one.
pub const DEFAULT_GENERATION: u8 = 8;

/// A version of the type chart.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// Generation 1.
    Original,
    /// Generations 2 through 5.
    Revised,
    /// Generation 6 onward.
    #[default]
    Modern,
}

impl Revision {
    /// Every revision, oldest first.
    pub const ALL: [Revision; 3] = [Revision::Original, Revision::Revised, Revision::Modern];

    /// Revision in force for a generation number.
    ///
    /// Generations below 2 (including 0) resolve to the original chart.
    pub const fn from_generation(generation: u8) -> Self {
        if generation >= 6 {
            Revision::Modern
        } else if generation >= 2 {
            Revision::Revised
        } else {
            Revision::Original
        }
    }

    /// First generation this revision applies to.
    pub const fn first_generation(self) -> u8 {
        match self {
            Revision::Original => 1,
            Revision::Revised => 2,
            Revision::Modern => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Revision::Original => "original",
            Revision::Revised => "revised",
            Revision::Modern => "modern",
        }
    }

    /// Types that exist in this revision.
    pub const fn types(self) -> TypeSet {
        match self {
            Revision::Original => tables::ORIGINAL_TYPES,
            Revision::Revised => tables::REVISED_TYPES,
            Revision::Modern => tables::MODERN_TYPES,
        }
    }

    /// Whether `ty` exists in this revision.
    #[inline]
    pub const fn contains(self, ty: Type) -> bool {
        self.types().has(ty)
    }

    /// Materialized chart, indexed `[defender][attacker]`.
    #[inline]
    pub(crate) fn table(self) -> &'static [[TypeEffectiveness; Type::COUNT]; Type::COUNT] {
        match self {
            Revision::Original => &tables::ORIGINAL_CHART,
            Revision::Revised => &tables::REVISED_CHART,
            Revision::Modern => &tables::MODERN_CHART,
        }
    }
}

/// Revision in force for a generation number.
#[inline]
pub fn resolve_revision(generation: u8) -> Revision {
    Revision::from_generation(generation)
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Revision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(Revision::Original),
            "revised" => Ok(Revision::Revised),
            "modern" => Ok(Revision::Modern),
            _ => Err(Error::UnknownRevision { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Revision::Original)]
    #[case(1, Revision::Original)]
    #[case(2, Revision::Revised)]
    #[case(5, Revision::Revised)]
    #[case(6, Revision::Modern)]
    #[case(8, Revision::Modern)]
    #[case(9, Revision::Modern)]
    #[case(u8::MAX, Revision::Modern)]
    fn test_resolve_revision(#[case] generation: u8, #[case] expected: Revision) {
        assert_eq!(resolve_revision(generation), expected);
    }

    #[test]
    fn test_first_generation_round_trips() {
        for revision in Revision::ALL {
            assert_eq!(Revision::from_generation(revision.first_generation()), revision);
        }
    }

    #[test]
    fn test_default_generation_is_modern() {
        assert_eq!(resolve_revision(DEFAULT_GENERATION), Revision::default());
    }

    #[test]
    fn test_type_counts() {
        assert_eq!(Revision::Original.types().bits().count_ones(), 15);
        assert_eq!(Revision::Revised.types().bits().count_ones(), 17);
        assert_eq!(Revision::Modern.types().bits().count_ones(), 18);
    }

    #[test]
    fn test_types_follow_introduction_generation() {
        for revision in Revision::ALL {
            for ty in Type::ALL {
                assert_eq!(
                    revision.contains(ty),
                    ty.generation() <= revision.first_generation(),
                    "{} in {}",
                    ty,
                    revision
                );
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Modern".parse::<Revision>(), Ok(Revision::Modern));
        assert_eq!(" original ".parse::<Revision>(), Ok(Revision::Original));
        assert_eq!(
            "gen9".parse::<Revision>(),
            Err(Error::UnknownRevision { name: "gen9".to_string() })
        );
    }
}
