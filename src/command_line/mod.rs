use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::fingerprint::engine::DEFAULT_RADIUS;

pub mod fingerprint;
pub mod similarity;

pub mod prelude {
    pub use clap::{Arg, ArgAction, ArgMatches, Command};

    pub use crate::command_line::{parse_radius, write_json};
}

pub fn command() -> clap::Command {
    clap::Command::new("ecfp")
        .about("Extended-connectivity fingerprints for molecular graphs")
        .subcommand_required(true)
        .subcommand(fingerprint::command())
        .subcommand(similarity::command())
}

pub fn action(matches: &clap::ArgMatches) -> eyre::Result<()> {
    match matches.subcommand() {
        Some((fingerprint::NAME, args)) => fingerprint::action(args),
        Some((similarity::NAME, args)) => similarity::action(args),
        Some((other, _args)) => Err(eyre::eyre!("can't handle {}", other)),
        None => Err(eyre::eyre!("no subcommand given")),
    }
}

/// `--radius` as given, or [`DEFAULT_RADIUS`] when it is left out.
pub fn parse_radius(matches: &clap::ArgMatches) -> eyre::Result<i64> {
    let radius = match matches.get_one::<String>("radius") {
        Some(radius) => radius,
        None => return Ok(DEFAULT_RADIUS as i64),
    };
    let radius = radius
        .parse::<i64>()
        .map_err(|e| eyre::eyre!("radius {:?} is not an integer: {}", radius, e))?;
    Ok(radius)
}

/// Pretty-prints `value` to `output`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> eyre::Result<()> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            serde_json::to_writer_pretty(&file, value)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
