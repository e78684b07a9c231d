//! Type chart lookup.
//!
//! The tables themselves are generated at build time from
//! `data/typechart/<revision>.json`. Every lookup goes through the table of
//! a single [`Revision`]; a type that does not exist in that revision is
//! treated as nonexistent and yields [`TypeEffectiveness::Neutral`].

use serde::{Deserialize, Serialize};

use crate::multiplier::Multiplier;
use crate::revision::Revision;
use crate::types::{Type, TypeSet};

/// Generated per-revision tables and type sets
pub(crate) mod tables {
    include!(concat!(env!("OUT_DIR"), "/charts.rs"));
}

/// Effect of one attacking type on one defending type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TypeEffectiveness {
    /// 1.0x damage
    #[default]
    Neutral = 0,
    /// 2.0x damage
    SuperEffective = 1,
    /// 0.5x damage
    NotVeryEffective = 2,
    /// 0.0x damage (immune)
    Immune = 3,
}

impl TypeEffectiveness {
    #[inline]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Self::Neutral => Multiplier::ONE,
            Self::SuperEffective => Multiplier::DOUBLE,
            Self::NotVeryEffective => Multiplier::HALF,
            Self::Immune => Multiplier::ZERO,
        }
    }
}

/// Chart entry for `attacker` hitting `defender` under `revision`.
#[inline]
pub fn effectiveness(attacker: Type, defender: Type, revision: Revision) -> TypeEffectiveness {
    if !revision.contains(attacker) || !revision.contains(defender) {
        return TypeEffectiveness::Neutral;
    }
    revision.table()[defender as usize][attacker as usize]
}

/// Chart entry for two type names.
///
/// Names are matched case-insensitively. Unknown names, and names of types
/// that do not exist in `revision`, are neutral.
pub fn lookup_category(attacker: &str, defender: &str, revision: Revision) -> TypeEffectiveness {
    match (Type::from_str(attacker), Type::from_str(defender)) {
        (Some(atk), Some(def)) => effectiveness(atk, def, revision),
        _ => TypeEffectiveness::Neutral,
    }
}

/// Which side of the chart a matchup list is read from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Perspective {
    /// Types this type hits (its attacking column).
    #[default]
    Attacking,
    /// Types that hit this type (its defending row).
    Defending,
}

/// Non-neutral matchups of one type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Matchups {
    pub super_effective: TypeSet,
    pub not_very_effective: TypeSet,
    pub immune: TypeSet,
}

impl Matchups {
    /// Types in the list for `effectiveness`. Neutral has no list and is empty.
    pub fn get(&self, effectiveness: TypeEffectiveness) -> TypeSet {
        match effectiveness {
            TypeEffectiveness::SuperEffective => self.super_effective,
            TypeEffectiveness::NotVeryEffective => self.not_very_effective,
            TypeEffectiveness::Immune => self.immune,
            TypeEffectiveness::Neutral => TypeSet::empty(),
        }
    }
}

/// Super-effective, not-very-effective and immune lists for `ty`.
///
/// A type that does not exist in `revision` has no matchups.
pub fn matchups(ty: Type, perspective: Perspective, revision: Revision) -> Matchups {
    let mut out = Matchups::default();
    if !revision.contains(ty) {
        return out;
    }

    for other in revision.types().types() {
        let entry = match perspective {
            Perspective::Attacking => effectiveness(ty, other, revision),
            Perspective::Defending => effectiveness(other, ty, revision),
        };
        match entry {
            TypeEffectiveness::SuperEffective => out.super_effective |= other.flag(),
            TypeEffectiveness::NotVeryEffective => out.not_very_effective |= other.flag(),
            TypeEffectiveness::Immune => out.immune |= other.flag(),
            TypeEffectiveness::Neutral => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(types: &[Type]) -> TypeSet {
        types.iter().copied().collect()
    }

    #[test]
    fn test_original_psychic_immune_to_ghost() {
        assert_eq!(
            effectiveness(Type::Ghost, Type::Psychic, Revision::Original),
            TypeEffectiveness::Immune
        );
        assert_eq!(
            effectiveness(Type::Ghost, Type::Psychic, Revision::Revised),
            TypeEffectiveness::SuperEffective
        );
    }

    #[test]
    fn test_original_poison_bug_mutually_super_effective() {
        assert_eq!(
            effectiveness(Type::Bug, Type::Poison, Revision::Original),
            TypeEffectiveness::SuperEffective
        );
        assert_eq!(
            effectiveness(Type::Poison, Type::Bug, Revision::Original),
            TypeEffectiveness::SuperEffective
        );
        assert_eq!(
            effectiveness(Type::Bug, Type::Poison, Revision::Revised),
            TypeEffectiveness::NotVeryEffective
        );
        assert_eq!(
            effectiveness(Type::Poison, Type::Bug, Revision::Modern),
            TypeEffectiveness::Neutral
        );
    }

    #[test]
    fn test_original_fire_neutral_to_ice() {
        assert_eq!(
            effectiveness(Type::Ice, Type::Fire, Revision::Original),
            TypeEffectiveness::Neutral
        );
        assert_eq!(
            effectiveness(Type::Ice, Type::Fire, Revision::Revised),
            TypeEffectiveness::NotVeryEffective
        );
    }

    #[test]
    fn test_steel_resistances_change_in_modern() {
        for attacker in [Type::Ghost, Type::Dark] {
            assert_eq!(
                effectiveness(attacker, Type::Steel, Revision::Revised),
                TypeEffectiveness::NotVeryEffective
            );
            assert_eq!(
                effectiveness(attacker, Type::Steel, Revision::Modern),
                TypeEffectiveness::Neutral
            );
        }
    }

    #[test]
    fn test_unavailable_types_are_neutral() {
        assert_eq!(
            effectiveness(Type::Fairy, Type::Dragon, Revision::Revised),
            TypeEffectiveness::Neutral
        );
        assert_eq!(
            effectiveness(Type::Fire, Type::Steel, Revision::Original),
            TypeEffectiveness::Neutral
        );
        assert_eq!(
            effectiveness(Type::Psychic, Type::Dark, Revision::Original),
            TypeEffectiveness::Neutral
        );
    }

    #[test]
    fn test_lookup_category_normalizes_names() {
        assert_eq!(
            lookup_category("FIRE", " Grass ", Revision::Modern),
            TypeEffectiveness::SuperEffective
        );
        assert_eq!(
            lookup_category("ground", "Flying", Revision::Modern),
            TypeEffectiveness::Immune
        );
    }

    #[test]
    fn test_lookup_category_unknown_is_neutral() {
        assert_eq!(
            lookup_category("laser", "fire", Revision::Modern),
            TypeEffectiveness::Neutral
        );
        assert_eq!(
            lookup_category("water", "", Revision::Modern),
            TypeEffectiveness::Neutral
        );
    }

    #[test]
    fn test_matchups_attacking() {
        let fighting = matchups(Type::Fighting, Perspective::Attacking, Revision::Modern);
        assert_eq!(
            fighting,
            Matchups {
                super_effective: set(&[Type::Normal, Type::Ice, Type::Rock, Type::Dark, Type::Steel]),
                not_very_effective: set(&[
                    Type::Poison,
                    Type::Flying,
                    Type::Psychic,
                    Type::Bug,
                    Type::Fairy
                ]),
                immune: set(&[Type::Ghost]),
            }
        );
    }

    #[test]
    fn test_matchups_defending() {
        let ghost = matchups(Type::Ghost, Perspective::Defending, Revision::Original);
        assert_eq!(ghost.super_effective, set(&[Type::Ghost]));
        assert_eq!(ghost.not_very_effective, set(&[Type::Poison, Type::Bug]));
        assert_eq!(ghost.immune, set(&[Type::Normal, Type::Fighting]));
    }

    #[test]
    fn test_matchups_unavailable_type_is_empty() {
        let fairy = matchups(Type::Fairy, Perspective::Attacking, Revision::Revised);
        assert_eq!(fairy, Matchups::default());
    }

    #[test]
    fn test_perspectives_are_transposes() {
        for revision in Revision::ALL {
            for ty in revision.types().types() {
                let defending = matchups(ty, Perspective::Defending, revision);
                for other in revision.types().types() {
                    let attacking = matchups(other, Perspective::Attacking, revision);
                    for entry in [
                        TypeEffectiveness::SuperEffective,
                        TypeEffectiveness::NotVeryEffective,
                        TypeEffectiveness::Immune,
                    ] {
                        assert_eq!(
                            defending.get(entry).has(other),
                            attacking.get(entry).has(ty),
                            "{} vs {} under {}",
                            other,
                            ty,
                            revision
                        );
                    }
                }
            }
        }
    }
}
