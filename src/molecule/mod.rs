use serde::{Deserialize, Serialize};

use crate::error::{EcfpError, Result};

pub mod periodic_table;
pub mod ring;

mod record;

pub use record::{AtomRecord, Molecule};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub begin: usize,
    pub end: usize,
    /// 1.0 single, 2.0 double, 3.0 triple, 1.5 aromatic.
    pub order: f64,
}

impl Bond {
    pub fn new(begin: usize, end: usize, order: f64) -> Self {
        Self { begin, end, order }
    }

    pub fn single(begin: usize, end: usize) -> Self {
        Self::new(begin, end, 1.0)
    }

    pub fn double(begin: usize, end: usize) -> Self {
        Self::new(begin, end, 2.0)
    }
}

/// Static per-atom properties feeding the layer-0 invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomProperties {
    pub atomic_number: u32,
    pub degree: u32,
    pub total_hydrogens: u32,
    pub formal_charge: i32,
    pub isotope_mass: f64,
    pub in_ring: bool,
}

pub trait MolecularGraph {
    fn num_atoms(&self) -> usize;

    fn bonds(&self) -> &[Bond];

    fn num_bonds(&self) -> usize {
        self.bonds().len()
    }
}

pub trait AtomPropertyLookup {
    /// Fails with [`EcfpError::MissingProperty`] when the atom cannot be described.
    fn atom_properties(&self, atom: usize) -> Result<AtomProperties>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incidence {
    pub bond: usize,
    pub neighbor: usize,
    pub order: f64,
}

/// Validated incidence lists of a molecular graph.
#[derive(Debug, Clone)]
pub struct Topology {
    num_bonds: usize,
    incident: Vec<Vec<Incidence>>,
}

impl Topology {
    pub fn new<G>(graph: &G) -> Result<Self>
    where
        G: MolecularGraph + ?Sized,
    {
        let num_atoms = graph.num_atoms();
        let mut incident = vec![Vec::new(); num_atoms];

        for (idx, bond) in graph.bonds().iter().enumerate() {
            for atom in [bond.begin, bond.end] {
                if atom >= num_atoms {
                    return Err(EcfpError::MalformedGraph {
                        bond: idx,
                        reason: format!(
                            "references atom {} but the molecule has {} atoms",
                            atom, num_atoms
                        ),
                    });
                }
            }
            if bond.begin == bond.end {
                return Err(EcfpError::MalformedGraph {
                    bond: idx,
                    reason: format!("connects atom {} to itself", bond.begin),
                });
            }
            if !bond.order.is_finite() {
                return Err(EcfpError::MalformedGraph {
                    bond: idx,
                    reason: format!("bond order {} is not finite", bond.order),
                });
            }

            incident[bond.begin].push(Incidence {
                bond: idx,
                neighbor: bond.end,
                order: bond.order,
            });
            incident[bond.end].push(Incidence {
                bond: idx,
                neighbor: bond.begin,
                order: bond.order,
            });
        }

        Ok(Self {
            num_bonds: graph.num_bonds(),
            incident,
        })
    }

    pub fn num_atoms(&self) -> usize {
        self.incident.len()
    }

    pub fn num_bonds(&self) -> usize {
        self.num_bonds
    }

    pub fn incident(&self, atom: usize) -> &[Incidence] {
        &self.incident[atom]
    }

    pub fn degree(&self, atom: usize) -> usize {
        self.incident[atom].len()
    }
}
