use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EcfpError, Result};
use crate::molecule::periodic_table;
use crate::molecule::ring::ring_atoms;
use crate::molecule::{AtomProperties, AtomPropertyLookup, Bond, MolecularGraph, Topology};

/// One atom as it appears in a molecule document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic_number: Option<u32>,
    #[serde(default)]
    pub hydrogens: u32,
    #[serde(default)]
    pub formal_charge: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isotope_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_ring: Option<bool>,
}

impl AtomRecord {
    pub fn element(symbol: &str) -> Self {
        Self {
            element: Some(symbol.to_string()),
            ..Default::default()
        }
    }

    pub fn atomic_number(atomic_number: u32) -> Self {
        Self {
            atomic_number: Some(atomic_number),
            ..Default::default()
        }
    }

    pub fn with_hydrogens(mut self, hydrogens: u32) -> Self {
        self.hydrogens = hydrogens;
        self
    }

    pub fn with_charge(mut self, formal_charge: i32) -> Self {
        self.formal_charge = formal_charge;
        self
    }

    pub fn with_isotope_mass(mut self, isotope_mass: f64) -> Self {
        self.isotope_mass = Some(isotope_mass);
        self
    }

    pub fn with_ring(mut self, in_ring: bool) -> Self {
        self.in_ring = Some(in_ring);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoleculeDocument {
    atoms: Vec<AtomRecord>,
    #[serde(default)]
    bonds: Vec<Bond>,
}

/// A molecular graph with its own atom property table.
///
/// Degrees come from the bond list. Ring membership and isotope masses are
/// filled in when the records leave them out.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<AtomRecord>,
    bonds: Vec<Bond>,
    degrees: Vec<u32>,
    ring_atoms: Vec<bool>,
}

impl Molecule {
    pub fn new(atoms: Vec<AtomRecord>, bonds: Vec<Bond>) -> Result<Self> {
        let mut molecule = Self {
            atoms,
            bonds,
            degrees: Vec::new(),
            ring_atoms: Vec::new(),
        };

        for (idx, atom) in molecule.atoms.iter().enumerate() {
            let Some(symbol) = &atom.element else {
                continue;
            };
            let element = periodic_table::by_symbol(symbol)
                .ok_or_else(|| EcfpError::UnknownElement(symbol.clone()))?;
            match atom.atomic_number {
                Some(atomic_number) if atomic_number != element.atomic_number => {
                    return Err(EcfpError::ElementMismatch {
                        atom: idx,
                        symbol: symbol.clone(),
                        atomic_number,
                    });
                }
                _ => {}
            }
        }

        let topology = Topology::new(&molecule)?;
        molecule.degrees = (0..topology.num_atoms())
            .map(|atom| topology.degree(atom) as u32)
            .collect();
        molecule.ring_atoms = ring_atoms(&topology);

        Ok(molecule)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: MoleculeDocument = serde_json::from_str(json)?;
        Self::new(document.atoms, document.bonds)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let document = MoleculeDocument {
            atoms: self.atoms.clone(),
            bonds: self.bonds.clone(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    fn resolve_atomic_number(&self, atom: usize) -> Option<u32> {
        let record = &self.atoms[atom];
        match (&record.element, record.atomic_number) {
            // `Molecule::new` has checked that both agree when both are set
            (_, Some(atomic_number)) => Some(atomic_number),
            (Some(symbol), None) => periodic_table::by_symbol(symbol).map(|e| e.atomic_number),
            (None, None) => None,
        }
    }
}

impl MolecularGraph for Molecule {
    fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    fn bonds(&self) -> &[Bond] {
        &self.bonds
    }
}

impl AtomPropertyLookup for Molecule {
    fn atom_properties(&self, atom: usize) -> Result<AtomProperties> {
        let missing = |property: &'static str| EcfpError::MissingProperty { atom, property };

        let record = self.atoms.get(atom).ok_or(missing("atom"))?;
        let atomic_number = self
            .resolve_atomic_number(atom)
            .ok_or(missing("atomic_number"))?;
        let isotope_mass = match record.isotope_mass {
            Some(mass) => mass,
            None => periodic_table::by_atomic_number(atomic_number)
                .map(|e| e.most_common_isotope_mass)
                .ok_or(missing("isotope_mass"))?,
        };

        Ok(AtomProperties {
            atomic_number,
            degree: self.degrees[atom],
            total_hydrogens: record.hydrogens,
            formal_charge: record.formal_charge,
            isotope_mass,
            in_ring: record.in_ring.unwrap_or(self.ring_atoms[atom]),
        })
    }
}
