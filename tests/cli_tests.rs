//! End-to-end tests of the `match-solver` binary: the documented n = 2
//! scenario through every subcommand and output format.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const SCENARIO: &str = "\
setA: [x1, x2]
setB: [y1, y2, y3]
instructions:
  - type: MB
    num: 1
    lights: 1
    comment: booth one
    map: {x1: y1}
";

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn solver() -> Command {
    Command::cargo_bin("match-solver").unwrap()
}

#[test]
fn test_solve_text_output() {
    let config = write_config(SCENARIO);

    solver()
        .arg("solve")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total matchings: 6  Remaining: 3"))
        .stdout(predicate::str::contains("1 MB#1.0 booth one"))
        .stdout(predicate::str::contains("x1 -> y1"))
        .stdout(predicate::str::contains("-> I = 1"))
        .stdout(predicate::str::contains("6 left"))
        .stdout(predicate::str::contains("3 left"));
}

#[test]
fn test_solve_json_output() {
    let config = write_config(SCENARIO);

    let output = solver()
        .arg("solve")
        .arg(config.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["report"]["total"], 6);
    assert_eq!(payload["report"]["remaining"], 3);
    assert_eq!(payload["report"]["set_b"][2], "y3");

    let booth = &payload["report"]["constraints"][0];
    assert_eq!(booth["eliminated"], 3);
    assert_eq!(booth["entropy"], 1.0);

    let mb_series = payload["series"]["mb"].as_array().unwrap();
    assert_eq!(mb_series.len(), 1);
    assert_eq!(mb_series[0]["id"], 1.0);
}

#[test]
fn test_solve_matchings_dump() {
    let config = write_config(SCENARIO);
    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("left.dat");

    solver()
        .arg("solve")
        .arg(config.path())
        .arg("--matchings")
        .arg(&dump)
        .assert()
        .success();

    let content = std::fs::read_to_string(&dump).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    // only matchings keeping y1 with x1 survive the booth
    assert!(lines.iter().all(|l| l.starts_with("x1 -> [y1")));
}

#[test]
fn test_solve_output_stem_writes_series() {
    let config = write_config(SCENARIO);
    let dir = tempfile::tempdir().unwrap();
    let stem = dir.path().join("run");

    // must succeed even where Graphviz is not installed
    solver()
        .arg("solve")
        .arg(config.path())
        .arg("--output-stem")
        .arg(&stem)
        .assert()
        .success();

    let dot = std::fs::read_to_string(dir.path().join("run_tab.dot")).unwrap();
    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("y1"));

    let mb = std::fs::read_to_string(dir.path().join("run_statMB.out")).unwrap();
    assert_eq!(mb.trim(), "1 1");

    let mn = std::fs::read_to_string(dir.path().join("run_statMN.out")).unwrap();
    assert!(mn.is_empty());

    let info = std::fs::read_to_string(dir.path().join("run_statInfo.out")).unwrap();
    assert!(info.starts_with("1 1.58"));
}

#[test]
fn test_check_valid() {
    let config = write_config(SCENARIO);

    solver()
        .arg("check")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration OK: 2 x 3 labels, 1 constraints",
        ));
}

#[test]
fn test_check_rejects_bad_lights() {
    let config = write_config(&SCENARIO.replace("lights: 1", "lights: 2"));

    solver()
        .arg("check")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("single-pair probe"));
}

#[test]
fn test_check_rejects_unknown_label() {
    let config = write_config(&SCENARIO.replace("{x1: y1}", "{x1: y9}"));

    solver()
        .arg("check")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown label \"y9\""));
}

#[test]
fn test_count() {
    let config = write_config(SCENARIO);

    solver()
        .arg("count")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total matchings: 6"))
        .stdout(predicate::str::contains("Matchings per pair: 3"));
}

#[test]
fn test_contradictory_constraints_fail() {
    let contradictory = "\
setA: [x1, x2]
setB: [y1, y2, y3]
instructions:
  - type: MB
    num: 1
    lights: 1
    comment: booth one
    map: {x1: y1}
  - type: MB
    num: 2
    lights: 0
    comment: booth one again, denied
    map: {x1: y1}
  - type: MB
    num: 3
    lights: 0
    comment: never reached
    map: {x2: y2}
";
    let config = write_config(contradictory);

    solver()
        .arg("solve")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No candidate matchings survive"));
}

#[test]
fn test_missing_input_file() {
    solver()
        .arg("solve")
        .arg("does-not-exist.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
