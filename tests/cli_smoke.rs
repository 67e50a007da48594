use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_positional_arguments_shape_the_tree() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.arg("3").arg("2").arg("2").arg("--out").arg(root);
    cmd.assert().success().stdout(predicate::str::contains("Generated 2 modules"));

    assert!(root.join("main.c").exists());
    assert!(root.join("CMakeLists.txt").exists());
    assert!(root.join("meique.lua").exists());
    assert!(root.join("module1/2.c").exists());
    assert!(!root.join("module0/3.c").exists());
    assert!(!root.join("module2").exists());
}

#[test]
fn cli_defaults_generate_five_modules_of_ten_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.arg("-q").arg("--out").arg(root);
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert!(root.join("module4/9.h").exists());
    assert!(!root.join("module5").exists());
    let c0 = fs::read_to_string(root.join("module0/0.c")).unwrap();
    assert_eq!(c0.matches("#include").count(), 7);
}

#[test]
fn cli_rejects_non_integer_argument_before_writing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.arg("ten").arg("--out").arg(root);
    cmd.assert().failure().code(2);
    assert!(!root.join("main.c").exists());
}

#[test]
fn cli_backend_filter_and_manifest() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let manifest = root.join("manifest.json");

    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.args(["2", "1", "1", "--backend", "meique", "-q"])
        .arg("--out")
        .arg(root.join("tree"))
        .arg("--manifest")
        .arg(&manifest);
    cmd.assert().success();

    assert!(root.join("tree/meique.lua").exists());
    assert!(!root.join("tree/CMakeLists.txt").exists());
    let data = fs::read_to_string(&manifest).unwrap();
    let v: serde_json::Value = serde_json::from_str(&data).unwrap();
    assert_eq!(v["params"]["files_per_module"], 2);
    assert_eq!(v["backends"][0], "meique");
    assert_eq!(v["artifacts"].as_array().unwrap().len(), 7);
}

#[test]
fn cli_reads_explicit_config() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let cfg = root.join("settings.toml");
    fs::write(&cfg, "[generate]\nfiles = 2\nmodules = 3\nbackends = [\"cmake\"]\n").unwrap();

    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.arg("-q").arg("--out").arg(root.join("tree")).arg("--config").arg(&cfg);
    cmd.assert().success();

    assert!(root.join("tree/module2/1.c").exists());
    assert!(!root.join("tree/module0/2.c").exists());
    assert!(!root.join("tree/meique.lua").exists());
}

#[test]
fn cli_ignores_config_file_without_flag() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("buildbench.toml"), "[generate]\nfiles = 1\nmodules = 1\n").unwrap();

    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.current_dir(root);
    cmd.assert().success().stdout(predicate::str::contains("Generated 5 modules (100 sources"));

    assert!(root.join("module4/9.c").exists());
}

#[test]
fn cli_repeated_backend_is_written_once() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let manifest = root.join("manifest.json");

    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.args(["1", "1", "1", "--backend", "cmake", "--backend", "cmake"])
        .arg("--out")
        .arg(root.join("tree"))
        .arg("--manifest")
        .arg(&manifest);
    cmd.assert().success().stdout(predicate::str::contains("2 build descriptions"));

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(v["backends"].as_array().unwrap().len(), 1);
    assert_eq!(v["artifacts"].as_array().unwrap().len(), 5);
}

#[test]
fn cli_reports_invalid_config() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let cfg = root.join("bad.toml");
    fs::write(&cfg, "[generate\nfiles = ").unwrap();

    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.arg("--out").arg(root).arg("--config").arg(&cfg);
    cmd.assert().failure().code(1).stderr(predicate::str::contains("Config error"));
}

#[test]
fn cli_zero_modules_is_rejected() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("buildbench-gen").unwrap();
    cmd.args(["3", "2", "0"]).arg("--out").arg(dir.path());
    cmd.assert().failure().code(1).stderr(predicate::str::contains("Invalid parameters"));
    assert!(!dir.path().join("main.c").exists());
}
