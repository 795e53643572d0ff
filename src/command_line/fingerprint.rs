use std::path::Path;

use serde::Serialize;

use crate::command_line::prelude::*;
use crate::fingerprint::engine::ecfp_with_environments;
use crate::fingerprint::{AtomEnvironment, Fingerprint};
use crate::molecule::Molecule;

pub const NAME: &str = "fingerprint";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Compute the ECFP of a molecule document")
        .arg(
            Arg::new("input")
                .required(true)
                .long("input")
                .short('i')
                .num_args(1),
        )
        .arg(
            Arg::new("radius")
                .required(false)
                .long("radius")
                .short('r')
                .allow_negative_numbers(true)
                .help("Number of expansion layers; defaults to 2 (ECFP4)")
                .num_args(1),
        )
        .arg(
            Arg::new("output")
                .required(false)
                .long("output")
                .short('o')
                .help("Write the fingerprint JSON here instead of stdout")
                .num_args(1),
        )
        .arg(
            Arg::new("environments")
                .required(false)
                .long("environments")
                .short('e')
                .help("Also report the atom and layer behind every counted identifier")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Serialize)]
pub struct FingerprintReport {
    pub radius: i64,
    pub num_atoms: usize,
    pub fingerprint: Fingerprint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<Vec<AtomEnvironment>>,
}

pub fn fingerprint_file(
    input: &Path,
    radius: i64,
    environments: bool,
) -> eyre::Result<FingerprintReport> {
    let molecule = Molecule::from_path(input)?;
    let (fingerprint, envs) = ecfp_with_environments(&molecule, radius)?;

    log::info!(
        "{}: {} atoms, {} distinct identifiers at radius {}",
        input.display(),
        molecule.atoms().len(),
        fingerprint.len(),
        radius
    );

    Ok(FingerprintReport {
        radius,
        num_atoms: molecule.atoms().len(),
        fingerprint,
        environments: environments.then_some(envs),
    })
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .ok_or(eyre::eyre!("Failed to extract input path"))?;
    let radius = parse_radius(matches)?;
    let output = matches.get_one::<String>("output");
    let environments = matches.get_flag("environments");

    let report = fingerprint_file(Path::new(input), radius, environments)?;
    write_json(&report, output.map(Path::new))?;

    Ok(())
}
