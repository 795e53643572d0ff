use crate::error::{EcfpError, Result};
use crate::fingerprint::hash::InvariantHasher;
use crate::molecule::{AtomProperties, AtomPropertyLookup};

/// Layer-0 identifier for a single atom.
///
/// Fields are hashed in a fixed order: atomic number, degree, total
/// hydrogens, formal charge, most-common-isotope mass, and a trailing `1`
/// only for ring atoms.
pub fn atom_invariant(props: &AtomProperties) -> u64 {
    let mut hasher = InvariantHasher::new();
    hasher
        .push_u64(props.atomic_number as u64)
        .push_u64(props.degree as u64)
        .push_u64(props.total_hydrogens as u64)
        .push_i64(props.formal_charge as i64)
        .push_f64(props.isotope_mass);
    if props.in_ring {
        hasher.push_u64(1);
    }
    hasher.finish()
}

/// Initial identifiers for atoms `0..num_atoms`, indexed by atom.
pub fn initial_invariants<L>(lookup: &L, num_atoms: usize) -> Result<Vec<u64>>
where
    L: AtomPropertyLookup + ?Sized,
{
    (0..num_atoms)
        .map(|atom| {
            let props = lookup.atom_properties(atom)?;
            if !props.isotope_mass.is_finite() {
                return Err(EcfpError::MissingProperty {
                    atom,
                    property: "isotope_mass",
                });
            }
            Ok(atom_invariant(&props))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon() -> AtomProperties {
        AtomProperties {
            atomic_number: 6,
            degree: 2,
            total_hydrogens: 2,
            formal_charge: 0,
            isotope_mass: 12.0,
            in_ring: false,
        }
    }

    #[test]
    fn each_field_contributes() {
        let base = atom_invariant(&carbon());
        let variants = [
            AtomProperties { atomic_number: 7, ..carbon() },
            AtomProperties { degree: 3, ..carbon() },
            AtomProperties { total_hydrogens: 1, ..carbon() },
            AtomProperties { formal_charge: 1, ..carbon() },
            AtomProperties { isotope_mass: 13.003355, ..carbon() },
            AtomProperties { in_ring: true, ..carbon() },
        ];
        for variant in variants {
            assert_ne!(atom_invariant(&variant), base, "{:?}", variant);
        }
    }

    #[test]
    fn ring_flag_is_an_extra_field() {
        let ring = atom_invariant(&AtomProperties { in_ring: true, ..carbon() });
        let expected = InvariantHasher::new()
            .push_u64(6)
            .push_u64(2)
            .push_u64(2)
            .push_i64(0)
            .push_f64(12.0)
            .push_u64(1)
            .finish();
        assert_eq!(ring, expected);
    }
}
