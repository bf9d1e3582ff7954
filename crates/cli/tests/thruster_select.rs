use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/thrusters.yaml");
const MISSION: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../data/missions/cubesat_orbit_raise.toml"
);

fn cmd() -> Command {
    Command::cargo_bin("thruster_select").expect("thruster_select bin")
}

#[test]
fn ranks_bundled_catalog_from_flags() {
    cmd()
        .args([
            "--delta-v", "800", "--sat-mass", "12", "--power", "60", "--budget", "2",
            "--data", CATALOG,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. IFM Nano (FEEP)"))
        .stdout(predicate::str::contains("3 feasible"))
        .stdout(predicate::str::contains("INFEASIBLE").not());
}

#[test]
fn show_all_lists_rejection_reasons() {
    cmd()
        .args(["--mission", MISSION, "--data", CATALOG, "--show-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12U CubeSat orbit raise"))
        .stdout(predicate::str::contains("Reason: insufficient power"))
        .stdout(predicate::str::contains("Reason: TRL too low"))
        .stdout(predicate::str::contains("Reason: exceeds mass budget"));
}

#[test]
fn percentage_duty_cycle_is_rejected() {
    cmd()
        .args(["--mission", MISSION, "--data", CATALOG, "--duty-cycle", "3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duty cycle must lie in (0, 1]"));
}

#[test]
fn missing_required_value_is_reported() {
    cmd()
        .args(["--sat-mass", "12", "--power", "60", "--budget", "2", "--data", CATALOG])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing --delta-v"));
}

#[test]
fn no_feasible_thruster_is_not_an_error() {
    cmd()
        .args(["--mission", MISSION, "--data", CATALOG, "--budget", "0.01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No feasible thruster"));
}

#[test]
fn zero_weights_cannot_be_normalized() {
    cmd()
        .args([
            "--mission", MISSION, "--data", CATALOG, "--mass-weight", "0", "--time-weight", "0",
            "--normalize-weights",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one of the weights"));
}

#[test]
fn csv_output_file_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested").join("ranking.csv");
    cmd()
        .args(["--mission", MISSION, "--data", CATALOG, "--format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&out).expect("csv output");
    let names: Vec<String> = reader
        .records()
        .map(|r| r.expect("row")[2].to_string())
        .collect();
    assert_eq!(names, ["IFM Nano", "FPPT-1.6", "PPTCUP"]);
}

#[test]
fn json_output_to_stdout() {
    let output = cmd()
        .args(["--mission", MISSION, "--data", CATALOG, "--format", "json", "--show-all"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["accepted"], 3);
    assert_eq!(value["results"][0]["name"], "IFM Nano");
    let total = fs::read_to_string(CATALOG).unwrap().matches("- id:").count();
    assert_eq!(value["results"].as_array().unwrap().len(), total);
}
