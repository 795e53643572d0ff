use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod engine;
pub mod hash;
pub mod invariants;
pub mod neighborhood;

/// Identifier → occurrence count, accumulated over every layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub BTreeMap<u64, u32>);

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, identifier: u64) {
        *self.0.entry(identifier).or_insert(0) += 1;
    }

    pub fn count(&self, identifier: u64) -> u32 {
        self.0.get(&identifier).copied().unwrap_or(0)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().map(|&c| c as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.0.iter().map(|(&id, &count)| (id, count))
    }

    /// True when every identifier of `other` is present here with at least
    /// the same count.
    pub fn contains_all(&self, other: &Fingerprint) -> bool {
        other.iter().all(|(id, count)| self.count(id) >= count)
    }

    /// Count-weighted Tanimoto coefficient: Σmin / Σmax over the union of
    /// identifiers. Two empty fingerprints are identical.
    pub fn tanimoto(&self, other: &Fingerprint) -> f64 {
        let mut shared = 0u64;
        let mut union = 0u64;

        for (id, count) in self.iter() {
            let theirs = other.count(id);
            shared += count.min(theirs) as u64;
            union += count.max(theirs) as u64;
        }
        for (id, count) in other.iter() {
            if !self.0.contains_key(&id) {
                union += count as u64;
            }
        }

        if union == 0 {
            return 1.0;
        }
        shared as f64 / union as f64
    }
}

impl FromIterator<u64> for Fingerprint {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut fp = Fingerprint::new();
        for identifier in iter {
            fp.increment(identifier);
        }
        fp
    }
}

/// One counted contribution: the atom and layer that produced `identifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomEnvironment {
    pub identifier: u64,
    pub atom: usize,
    pub layer: u32,
}
