use std::collections::HashSet;

use bitvec::prelude::*;

/// Bonds covered by the substructure rooted at one atom, indexed by bond.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    bits: BitVec<u64, Lsb0>,
}

impl Neighborhood {
    pub fn empty(num_bonds: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, num_bonds),
        }
    }

    pub fn insert(&mut self, bond: usize) {
        self.bits.set(bond, true);
    }

    pub fn union_with(&mut self, other: &Neighborhood) {
        self.bits |= other.bits.as_bitslice();
    }

    pub fn contains(&self, bond: usize) -> bool {
        self.bits.get(bond).map(|bit| *bit).unwrap_or(false)
    }

    pub fn bonds(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    pub fn capacity(&self) -> usize {
        self.bits.len()
    }
}

/// Every neighborhood already counted in this run, in registration order.
#[derive(Debug, Clone, Default)]
pub struct SeenNeighborhoods {
    order: Vec<Neighborhood>,
    index: HashSet<Neighborhood>,
}

impl SeenNeighborhoods {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, neighborhood: &Neighborhood) -> bool {
        self.index.contains(neighborhood)
    }

    /// Registers `neighborhood`, returning `false` if an identical one was
    /// already present.
    pub fn register(&mut self, neighborhood: &Neighborhood) -> bool {
        if !self.index.insert(neighborhood.clone()) {
            return false;
        }
        self.order.push(neighborhood.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Neighborhood> {
        self.order.iter()
    }
}
