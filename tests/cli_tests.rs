use std::path::{Path, PathBuf};

use ecfp::command_line::fingerprint::fingerprint_file;
use ecfp::command_line::similarity::similarity_files;
use tempdir::TempDir;

const BUTANAMIDE: &str = r#"{
    "atoms": [
        {"element": "C", "hydrogens": 3},
        {"element": "C", "hydrogens": 2},
        {"element": "C", "hydrogens": 2},
        {"element": "C"},
        {"element": "O"},
        {"element": "N", "hydrogens": 2}
    ],
    "bonds": [
        {"begin": 0, "end": 1, "order": 1.0},
        {"begin": 1, "end": 2, "order": 1.0},
        {"begin": 2, "end": 3, "order": 1.0},
        {"begin": 3, "end": 4, "order": 2.0},
        {"begin": 3, "end": 5, "order": 1.0}
    ]
}"#;

const PROPANOL: &str = r#"{
    "atoms": [
        {"element": "C", "hydrogens": 3},
        {"element": "C", "hydrogens": 2},
        {"element": "C", "hydrogens": 2},
        {"element": "O", "hydrogens": 1}
    ],
    "bonds": [
        {"begin": 0, "end": 1, "order": 1.0},
        {"begin": 1, "end": 2, "order": 1.0},
        {"begin": 2, "end": 3, "order": 1.0}
    ]
}"#;

fn write_molecule(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_fingerprint_file() -> eyre::Result<()> {
    let dir = TempDir::new("ecfp-cli")?;
    let input = write_molecule(dir.path(), "butanamide.json", BUTANAMIDE);

    let report = fingerprint_file(&input, 2, false)?;
    assert_eq!(report.num_atoms, 6);
    assert_eq!(report.fingerprint.total(), 15);
    assert!(report.environments.is_none());

    let report = fingerprint_file(&input, 2, true)?;
    let environments = report.environments.unwrap();
    assert_eq!(environments.len() as u64, report.fingerprint.total());

    Ok(())
}

#[test]
fn test_fingerprint_command_writes_output() -> eyre::Result<()> {
    let dir = TempDir::new("ecfp-cli")?;
    let input = write_molecule(dir.path(), "butanamide.json", BUTANAMIDE);
    let output = dir.path().join("fp.json");

    let matches = ecfp::command_line::command().try_get_matches_from([
        "ecfp",
        "fingerprint",
        "--input",
        input.to_str().unwrap(),
        "--radius",
        "1",
        "--output",
        output.to_str().unwrap(),
        "-e",
    ])?;
    ecfp::command_line::action(&matches)?;

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(written["radius"], 1);
    assert_eq!(written["num_atoms"], 6);

    let counts: u64 = written["fingerprint"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(counts, 12);
    assert_eq!(written["environments"].as_array().unwrap().len(), 12);

    Ok(())
}

#[test]
fn test_radius_defaults_to_two() -> eyre::Result<()> {
    let dir = TempDir::new("ecfp-cli")?;
    let input = write_molecule(dir.path(), "butanamide.json", BUTANAMIDE);
    let output = dir.path().join("fp.json");

    let matches = ecfp::command_line::command().try_get_matches_from([
        "ecfp",
        "fingerprint",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])?;
    let (_, args) = matches.subcommand().unwrap();
    assert_eq!(
        ecfp::command_line::parse_radius(args)?,
        ecfp::fingerprint::engine::DEFAULT_RADIUS as i64
    );
    ecfp::command_line::action(&matches)?;

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    let expected = serde_json::to_value(fingerprint_file(&input, 2, false)?)?;
    assert_eq!(written, expected);

    Ok(())
}

#[test]
fn test_negative_radius_is_reported() -> eyre::Result<()> {
    let dir = TempDir::new("ecfp-cli")?;
    let input = write_molecule(dir.path(), "butanamide.json", BUTANAMIDE);

    let matches = ecfp::command_line::command().try_get_matches_from([
        "ecfp",
        "fingerprint",
        "-i",
        input.to_str().unwrap(),
        "-r",
        "-2",
    ])?;
    let err = ecfp::command_line::action(&matches).unwrap_err();
    assert!(err.to_string().contains("radius"));

    Ok(())
}

#[test]
fn test_non_numeric_radius_is_reported() -> eyre::Result<()> {
    let matches = ecfp::command_line::command().try_get_matches_from([
        "ecfp",
        "fingerprint",
        "-i",
        "unused.json",
        "-r",
        "two",
    ])?;
    assert!(ecfp::command_line::action(&matches).is_err());
    Ok(())
}

#[test]
fn test_similarity_files() -> eyre::Result<()> {
    let dir = TempDir::new("ecfp-cli")?;
    let butanamide = write_molecule(dir.path(), "butanamide.json", BUTANAMIDE);
    let propanol = write_molecule(dir.path(), "propanol.json", PROPANOL);

    let same = similarity_files(&butanamide, &butanamide, 2)?;
    assert_eq!(same.tanimoto, 1.0);

    let different = similarity_files(&butanamide, &propanol, 2)?;
    assert!(different.tanimoto > 0.0 && different.tanimoto < 1.0);

    let matches = ecfp::command_line::command().try_get_matches_from([
        "ecfp",
        "similarity",
        "-a",
        butanamide.to_str().unwrap(),
        "-b",
        propanol.to_str().unwrap(),
    ])?;
    ecfp::command_line::action(&matches)?;

    Ok(())
}

#[test]
fn test_missing_input_file() {
    let result = fingerprint_file(Path::new("/nonexistent/mol.json"), 2, false);
    assert!(result.is_err());
}
