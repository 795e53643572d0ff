#![deny(clippy::print_stdout)]

pub mod command_line;
pub mod error;
pub mod fingerprint;
pub mod molecule;

pub use error::{EcfpError, Result};
pub use fingerprint::engine::{ecfp, ecfp_with_environments, FingerprintEngine};
pub use fingerprint::{AtomEnvironment, Fingerprint};
pub use molecule::{AtomProperties, AtomPropertyLookup, Bond, MolecularGraph, Molecule, Topology};
