use bitvec::prelude::*;
use rayon::prelude::*;

use crate::error::{EcfpError, Result};
use crate::fingerprint::hash::InvariantHasher;
use crate::fingerprint::invariants::initial_invariants;
use crate::fingerprint::neighborhood::{Neighborhood, SeenNeighborhoods};
use crate::fingerprint::{AtomEnvironment, Fingerprint};
use crate::molecule::{AtomPropertyLookup, MolecularGraph, Topology};

/// Live-atom count from which a layer's identifiers are computed on the rayon pool.
pub const PARALLEL_ATOM_THRESHOLD: usize = 64;

/// ECFP4 in the usual naming.
pub const DEFAULT_RADIUS: u32 = 2;

/// Identifier and neighborhood computed for one atom in one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEntry {
    pub atom: usize,
    pub identifier: u64,
    pub neighborhood: Neighborhood,
}

#[derive(Debug, Clone)]
struct LayerState {
    invariants: Vec<u64>,
    neighborhoods: Vec<Neighborhood>,
}

/// State of a single fingerprint run over one molecule.
///
/// Each call to [`advance`](Self::advance) reads only the previous layer's
/// state and swaps in the new layer once duplicate suppression is done.
#[derive(Debug)]
pub struct FingerprintEngine<'a> {
    topology: &'a Topology,
    layer: u32,
    previous: LayerState,
    dead: BitVec,
    seen: SeenNeighborhoods,
    fingerprint: Fingerprint,
    environments: Vec<AtomEnvironment>,
}

impl<'a> FingerprintEngine<'a> {
    /// Seeds layer 0 with one count per atom invariant.
    pub fn new(topology: &'a Topology, initial: Vec<u64>) -> Result<Self> {
        let num_atoms = topology.num_atoms();
        if initial.len() != num_atoms {
            return Err(EcfpError::InvariantCount {
                expected: num_atoms,
                found: initial.len(),
            });
        }

        let mut fingerprint = Fingerprint::new();
        let mut environments = Vec::with_capacity(num_atoms);
        for (atom, &identifier) in initial.iter().enumerate() {
            fingerprint.increment(identifier);
            environments.push(AtomEnvironment {
                identifier,
                atom,
                layer: 0,
            });
        }

        Ok(Self {
            topology,
            layer: 0,
            previous: LayerState {
                invariants: initial,
                neighborhoods: vec![Neighborhood::empty(topology.num_bonds()); num_atoms],
            },
            dead: BitVec::repeat(false, num_atoms),
            seen: SeenNeighborhoods::new(),
            fingerprint,
            environments,
        })
    }

    /// Last completed layer.
    pub fn layer(&self) -> u32 {
        self.layer
    }

    pub fn is_dead(&self, atom: usize) -> bool {
        self.dead.get(atom).map(|bit| *bit).unwrap_or(false)
    }

    pub fn dead_atoms(&self) -> Vec<usize> {
        self.dead.iter_ones().collect()
    }

    pub fn live_atoms(&self) -> impl Iterator<Item = usize> + '_ {
        self.dead.iter_zeros()
    }

    pub fn all_dead(&self) -> bool {
        self.dead.all()
    }

    /// Current identifier of every atom; dead atoms keep the value of the layer they died in.
    pub fn invariants(&self) -> &[u64] {
        &self.previous.invariants
    }

    pub fn neighborhoods(&self) -> &[Neighborhood] {
        &self.previous.neighborhoods
    }

    pub fn seen(&self) -> &SeenNeighborhoods {
        &self.seen
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn environments(&self) -> &[AtomEnvironment] {
        &self.environments
    }

    pub fn into_parts(self) -> (Fingerprint, Vec<AtomEnvironment>) {
        (self.fingerprint, self.environments)
    }

    /// Next-layer entries for `atoms`, in the order given. Nothing is mutated,
    /// so the result for each atom does not depend on the order.
    pub fn compute_round<I>(&self, atoms: I) -> Vec<RoundEntry>
    where
        I: IntoIterator<Item = usize>,
    {
        let layer = self.layer + 1;
        atoms
            .into_iter()
            .map(|atom| self.round_entry(layer, atom))
            .collect()
    }

    fn round_entry(&self, layer: u32, atom: usize) -> RoundEntry {
        let previous = &self.previous;
        let incident = self.topology.incident(atom);

        let mut neighbors: Vec<(f64, u64)> = incident
            .iter()
            .map(|inc| (inc.order, previous.invariants[inc.neighbor]))
            .collect();
        neighbors.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut hasher = InvariantHasher::new();
        hasher
            .push_u64(layer as u64)
            .push_u64(previous.invariants[atom]);
        for (order, invariant) in &neighbors {
            hasher.push_f64(*order).push_u64(*invariant);
        }

        let mut neighborhood = previous.neighborhoods[atom].clone();
        for inc in incident {
            neighborhood.insert(inc.bond);
            neighborhood.union_with(&previous.neighborhoods[inc.neighbor]);
        }

        RoundEntry {
            atom,
            identifier: hasher.finish(),
            neighborhood,
        }
    }

    /// Runs the next layer. Returns `false` without doing anything once every
    /// atom is dead.
    pub fn advance(&mut self) -> bool {
        if self.all_dead() {
            return false;
        }

        let layer = self.layer + 1;
        let live: Vec<usize> = self.live_atoms().collect();

        let entries: Vec<RoundEntry> = if live.len() >= PARALLEL_ATOM_THRESHOLD {
            live.par_iter()
                .map(|&atom| self.round_entry(layer, atom))
                .collect()
        } else {
            live.iter()
                .map(|&atom| self.round_entry(layer, atom))
                .collect()
        };

        let mut current = self.previous.clone();
        let mut newly_dead = 0usize;

        // duplicate suppression must see atoms in increasing index order
        for entry in entries {
            if self.seen.register(&entry.neighborhood) {
                self.fingerprint.increment(entry.identifier);
                self.environments.push(AtomEnvironment {
                    identifier: entry.identifier,
                    atom: entry.atom,
                    layer,
                });
            } else {
                self.dead.set(entry.atom, true);
                newly_dead += 1;
            }
            current.invariants[entry.atom] = entry.identifier;
            current.neighborhoods[entry.atom] = entry.neighborhood;
        }

        log::debug!(
            "layer {}: {} live atoms, {} newly dead, {} distinct identifiers",
            layer,
            live.len(),
            newly_dead,
            self.fingerprint.len()
        );

        self.previous = current;
        self.layer = layer;
        true
    }

    /// Advances until `radius` layers are done or every atom is dead.
    pub fn run(&mut self, radius: u32) {
        while self.layer < radius {
            if !self.advance() {
                log::debug!(
                    "all atoms dead after layer {}, skipping remaining layers up to {}",
                    self.layer,
                    radius
                );
                break;
            }
        }
    }
}

/// Rejects negative radii. Radii past `u32::MAX` are clamped: every atom is
/// dead long before that many layers, since a live atom's neighborhood must
/// grow each layer.
pub fn validate_radius(radius: i64) -> Result<u32> {
    if radius < 0 {
        return Err(EcfpError::InvalidRadius(radius));
    }
    Ok(u32::try_from(radius).unwrap_or(u32::MAX))
}

pub fn ecfp<M>(mol: &M, radius: i64) -> Result<Fingerprint>
where
    M: MolecularGraph + AtomPropertyLookup + ?Sized,
{
    let (fingerprint, _) = ecfp_with_environments(mol, radius)?;
    Ok(fingerprint)
}

/// Like [`ecfp`], also returning the atom and layer behind every counted identifier.
pub fn ecfp_with_environments<M>(
    mol: &M,
    radius: i64,
) -> Result<(Fingerprint, Vec<AtomEnvironment>)>
where
    M: MolecularGraph + AtomPropertyLookup + ?Sized,
{
    let radius = validate_radius(radius)?;
    let topology = Topology::new(mol)?;
    let initial = initial_invariants(mol, topology.num_atoms())?;

    let mut engine = FingerprintEngine::new(&topology, initial)?;
    engine.run(radius);

    Ok(engine.into_parts())
}
