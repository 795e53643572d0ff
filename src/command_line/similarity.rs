use std::path::Path;

use serde::Serialize;

use crate::command_line::prelude::*;
use crate::fingerprint::engine::ecfp;
use crate::molecule::Molecule;

pub const NAME: &str = "similarity";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Count-weighted Tanimoto similarity between two molecule documents")
        .arg(
            Arg::new("first")
                .required(true)
                .long("first")
                .short('a')
                .num_args(1),
        )
        .arg(
            Arg::new("second")
                .required(true)
                .long("second")
                .short('b')
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
}

#[derive(Debug, Serialize)]
pub struct SimilarityReport {
    pub radius: i64,
    pub tanimoto: f64,
}

pub fn similarity_files(
    first: &Path,
    second: &Path,
    radius: i64,
) -> eyre::Result<SimilarityReport> {
    let first_fp = ecfp(&Molecule::from_path(first)?, radius)?;
    let second_fp = ecfp(&Molecule::from_path(second)?, radius)?;
    let tanimoto = first_fp.tanimoto(&second_fp);

    log::info!(
        "tanimoto({}, {}) = {:.4}",
        first.display(),
        second.display(),
        tanimoto
    );

    Ok(SimilarityReport { radius, tanimoto })
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let first = matches
        .get_one::<String>("first")
        .ok_or(eyre::eyre!("Failed to extract first molecule path"))?;
    let second = matches
        .get_one::<String>("second")
        .ok_or(eyre::eyre!("Failed to extract second molecule path"))?;
    let radius = parse_radius(matches)?;

    let report = similarity_files(Path::new(first), Path::new(second), radius)?;
    write_json(&report, None)?;

    Ok(())
}
