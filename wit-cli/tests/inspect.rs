use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn inspect_prints_classifications_as_json() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("outline.wit");
    fs::write(&input_path, "1* a\n    * b\n").unwrap();

    let mut cmd = cargo_bin_cmd!("wittgenstein");
    cmd.current_dir(dir.path())
        .arg("inspect")
        .arg(input_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["is_numbered_start"], true);
    assert_eq!(value[1]["depth"], 2);
}

#[test]
fn generate_css_prints_stylesheet() {
    let mut cmd = cargo_bin_cmd!("wittgenstein");
    cmd.arg("generate-css");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<style>").and(predicate::str::contains("counter-reset")));
}
