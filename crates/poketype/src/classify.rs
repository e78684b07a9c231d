//! Effectiveness buckets.
//!
//! Splits an [`Efficiency`] into super-effective (>1x), neutral (1x),
//! not-very-effective (between 0x and 1x) and immune (0x). Each bucket is
//! ordered by descending multiplier, ties broken by ascending move type.

use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

use crate::efficiency::Efficiency;
use crate::multiplier::Multiplier;

/// Which bucket a multiplier falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    SuperEffective,
    Neutral,
    NotVeryEffective,
    Immune,
}

impl BucketKind {
    /// Buckets in display order.
    pub const ALL: [BucketKind; 4] = [
        BucketKind::SuperEffective,
        BucketKind::Neutral,
        BucketKind::NotVeryEffective,
        BucketKind::Immune,
    ];

    pub fn of(multiplier: Multiplier) -> Self {
        match multiplier.cmp(&Multiplier::ONE) {
            Ordering::Greater => BucketKind::SuperEffective,
            Ordering::Equal => BucketKind::Neutral,
            Ordering::Less if multiplier.is_zero() => BucketKind::Immune,
            Ordering::Less => BucketKind::NotVeryEffective,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            BucketKind::SuperEffective => "Super Effective",
            BucketKind::Neutral => "Neutral",
            BucketKind::NotVeryEffective => "Not Very Effective",
            BucketKind::Immune => "Immune",
        }
    }
}

/// One classified move type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub move_type: String,
    pub multiplier: Multiplier,
}

/// Sorted entries of one bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bucket {
    entries: Vec<Entry>,
}

impl Bucket {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    /// Move types in bucket order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.move_type.as_str()).collect()
    }

    pub fn get(&self, move_type: &str) -> Option<Multiplier> {
        self.entries
            .iter()
            .find(|e| e.move_type == move_type)
            .map(|e| e.multiplier)
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| {
            b.multiplier
                .cmp(&a.multiplier)
                .then_with(|| a.move_type.cmp(&b.move_type))
        });
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// All four buckets of one result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Buckets {
    pub super_effective: Bucket,
    pub neutral: Bucket,
    pub not_very_effective: Bucket,
    pub immune: Bucket,
}

impl Buckets {
    pub fn get(&self, kind: BucketKind) -> &Bucket {
        match kind {
            BucketKind::SuperEffective => &self.super_effective,
            BucketKind::Neutral => &self.neutral,
            BucketKind::NotVeryEffective => &self.not_very_effective,
            BucketKind::Immune => &self.immune,
        }
    }

    fn get_mut(&mut self, kind: BucketKind) -> &mut Bucket {
        match kind {
            BucketKind::SuperEffective => &mut self.super_effective,
            BucketKind::Neutral => &mut self.neutral,
            BucketKind::NotVeryEffective => &mut self.not_very_effective,
            BucketKind::Immune => &mut self.immune,
        }
    }

    /// Buckets in display order.
    pub fn iter(&self) -> impl Iterator<Item = (BucketKind, &Bucket)> + '_ {
        BucketKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Total entries across all buckets.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, b)| b.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(super_effective, neutral, not_very_effective, immune)`
    pub fn into_parts(self) -> (Bucket, Bucket, Bucket, Bucket) {
        (
            self.super_effective,
            self.neutral,
            self.not_very_effective,
            self.immune,
        )
    }
}

/// Partition `efficiency` into the four buckets, each sorted.
pub fn classify(efficiency: &Efficiency) -> Buckets {
    let mut buckets = Buckets::default();
    for (move_type, multiplier) in efficiency.iter() {
        buckets.get_mut(BucketKind::of(multiplier)).entries.push(Entry {
            move_type: move_type.to_string(),
            multiplier,
        });
    }

    for kind in BucketKind::ALL {
        buckets.get_mut(kind).sort();
    }

    debug!(
        "classified {} move types: {} super effective, {} neutral, {} not very effective, {} immune",
        efficiency.len(),
        buckets.super_effective.len(),
        buckets.neutral.len(),
        buckets.not_very_effective.len(),
        buckets.immune.len()
    );
    buckets
}
