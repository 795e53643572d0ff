use std::collections::VecDeque;

use crate::molecule::Topology;

/// Flags every atom that sits on at least one cycle.
///
/// A bond lies on a cycle exactly when its endpoints stay connected after the
/// bond is removed; an atom is a ring atom when any of its bonds is.
pub fn ring_atoms(topology: &Topology) -> Vec<bool> {
    let mut in_ring = vec![false; topology.num_atoms()];

    for atom in 0..topology.num_atoms() {
        for incidence in topology.incident(atom) {
            // each bond is visited from both ends; check it once
            if incidence.neighbor < atom {
                continue;
            }
            if connected_without(topology, atom, incidence.neighbor, incidence.bond) {
                in_ring[atom] = true;
                in_ring[incidence.neighbor] = true;
            }
        }
    }

    in_ring
}

fn connected_without(topology: &Topology, from: usize, to: usize, skipped_bond: usize) -> bool {
    let mut visited = vec![false; topology.num_atoms()];
    let mut queue = VecDeque::from([from]);
    visited[from] = true;

    while let Some(atom) = queue.pop_front() {
        for incidence in topology.incident(atom) {
            if incidence.bond == skipped_bond || visited[incidence.neighbor] {
                continue;
            }
            if incidence.neighbor == to {
                return true;
            }
            visited[incidence.neighbor] = true;
            queue.push_back(incidence.neighbor);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::{Bond, MolecularGraph};

    struct Edges(usize, Vec<Bond>);

    impl MolecularGraph for Edges {
        fn num_atoms(&self) -> usize {
            self.0
        }

        fn bonds(&self) -> &[Bond] {
            &self.1
        }
    }

    #[test]
    fn chain_has_no_ring_atoms() {
        let graph = Edges(4, vec![Bond::single(0, 1), Bond::single(1, 2), Bond::single(2, 3)]);
        let topology = Topology::new(&graph).unwrap();
        assert_eq!(ring_atoms(&topology), vec![false; 4]);
    }

    #[test]
    fn methylcyclopropane() {
        let graph = Edges(
            4,
            vec![
                Bond::single(0, 1),
                Bond::single(1, 2),
                Bond::single(2, 0),
                Bond::single(2, 3),
            ],
        );
        let topology = Topology::new(&graph).unwrap();
        assert_eq!(ring_atoms(&topology), vec![true, true, true, false]);
    }

    #[test]
    fn bridge_between_two_rings() {
        // two triangles joined by bond 3-2
        let graph = Edges(
            6,
            vec![
                Bond::single(0, 1),
                Bond::single(1, 2),
                Bond::single(2, 0),
                Bond::single(2, 3),
                Bond::single(3, 4),
                Bond::single(4, 5),
                Bond::single(5, 3),
            ],
        );
        let topology = Topology::new(&graph).unwrap();
        assert_eq!(ring_atoms(&topology), vec![true; 6]);
    }
}
