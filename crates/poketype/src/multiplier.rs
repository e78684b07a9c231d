//! Type-safe effectiveness multiplier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Mul;

use crate::chart::TypeEffectiveness;

/// A fixed-point effectiveness multiplier (4096 scale).
///
/// Chart factors and STAB are all exact at this scale, so bucket
/// predicates and sorting compare integers rather than floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Multiplier(pub u32);

impl Multiplier {
    /// Fixed-point scale (1.0x).
    pub const SCALE: u32 = 4096;

    /// 0x multiplier (immune).
    pub const ZERO: Self = Self(0);

    /// 0.25x multiplier (1024).
    pub const QUARTER: Self = Self(1024);

    /// 0.5x multiplier (2048).
    pub const HALF: Self = Self(2048);

    /// 1.0x multiplier (4096).
    pub const ONE: Self = Self(4096);

    /// 1.5x multiplier (6144), the same-type attack bonus.
    pub const STAB: Self = Self(6144);

    /// 2.0x multiplier (8192).
    pub const DOUBLE: Self = Self(8192);

    /// 4.0x multiplier (16384).
    pub const QUADRUPLE: Self = Self(16384);

    /// Create a new multiplier from a raw 4096-scale value.
    pub const fn new(val: u32) -> Self {
        Self(val)
    }

    /// Get the raw 4096-scale value.
    pub const fn val(self) -> u32 {
        self.0
    }

    /// Nearest multiplier to a float, clamped at zero.
    pub fn from_f64(val: f64) -> Self {
        Self((val * Self::SCALE as f64).round().max(0.0) as u32)
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Fold one chart factor into the multiplier. Zero is absorbing.
    #[inline]
    pub const fn apply(self, effectiveness: TypeEffectiveness) -> Self {
        match effectiveness {
            TypeEffectiveness::Neutral => self,
            TypeEffectiveness::SuperEffective => Self(self.0.saturating_mul(2)),
            TypeEffectiveness::NotVeryEffective => Self(self.0 / 2),
            TypeEffectiveness::Immune => Self::ZERO,
        }
    }

    /// Apply the 1.5x same-type attack bonus.
    #[inline]
    pub const fn with_stab(self) -> Self {
        Self(self.0.saturating_mul(3) / 2)
    }
}

impl Mul for Multiplier {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let raw = self.0 as u64 * rhs.0 as u64 / Self::SCALE as u64;
        Self(raw.min(u32::MAX as u64) as u32)
    }
}

/// Rendered like `2.0x`, `1.5x`, `0.25x` and `0x`.
impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = self.as_f64();
        if self.0 % Self::SCALE == 0 && !self.is_zero() {
            write!(f, "{:.1}x", val)
        } else {
            write!(f, "{}x", val)
        }
    }
}

impl Serialize for Multiplier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::from_f64)
    }
}

/// Macro to create a Multiplier from a float literal.
///
/// Rounds to the nearest integer: `round(val * 4096)`.
///
/// # Example
/// ```rust
/// use poketype::multiplier;
/// let stab = multiplier!(1.5); // Multiplier(6144)
/// assert_eq!(stab, poketype::Multiplier::STAB);
/// ```
#[macro_export]
macro_rules! multiplier {
    ($val:expr) => {
        $crate::Multiplier::new(($val * 4096.0 + 0.5) as u32)
    };
}
