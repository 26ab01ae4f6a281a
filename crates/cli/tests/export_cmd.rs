use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// A command that never sees the user's own config file.
fn varsheet(xdg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("varsheet"));
    cmd.env("XDG_CONFIG_HOME", xdg).env_remove("RUST_LOG");
    cmd
}

#[test]
fn export_writes_theme_files() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("dist/themes");

    varsheet(tmp.path())
        .args(["export", "--theme", "Demo Brand"])
        .arg("--input")
        .arg(fixture("demo.json"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   varsheet export"))
        .stdout(predicate::str::contains("theme: Demo Brand"));

    let light = fs::read_to_string(out.join("_color-variables__demo-brand-light.css")).unwrap();
    assert_eq!(light, ".tedi-theme--demo-brand {\n  --surface: #ffffff;\n}\n");

    let dark = fs::read_to_string(out.join("_color-variables__demo-brand-dark.css")).unwrap();
    assert_eq!(dark, ".tedi-theme--demo-brand-dark {\n  --surface: #000000;\n}\n");

    let dims = fs::read_to_string(out.join("_dimensional-variables__demo-brand.css")).unwrap();
    assert_eq!(
        dims,
        ".tedi-theme--demo-brand {\n  --gap: 16px;\n}\n\
         \n@media (max-width: 48rem) {\n  .tedi-theme--demo-brand {\n    --gap: 8px;\n  }\n}\n"
    );

    let index = fs::read_to_string(out.join("index.css")).unwrap();
    assert_eq!(
        index,
        "@import \"_color-variables__demo-brand-light.css\";\n\
         @import \"_color-variables__demo-brand-dark.css\";\n\
         @import \"_dimensional-variables__demo-brand.css\";\n"
    );
}

#[test]
fn export_json_prints_download_message() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("out");

    let assert = varsheet(tmp.path())
        .args(["export", "--theme", "Demo", "--json"])
        .arg("--input")
        .arg(fixture("demo.json"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["type"], "zip-download");
    assert_eq!(json["themeName"], "Demo");
    assert_eq!(json["files"].as_array().unwrap().len(), 4);
    assert!(!out.exists(), "--json must not write files");
}

#[test]
fn export_reads_yaml_dump() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("out");

    varsheet(tmp.path())
        .args(["export", "--theme", "y"])
        .arg("--input")
        .arg(fixture("demo.yaml"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let dims = fs::read_to_string(out.join("_dimensional-variables__y.css")).unwrap();
    assert_eq!(dims, ".tedi-theme--y {\n  --gap: 16px;\n}\n");
    assert!(!out.join("_color-variables__y-light.css").exists());
}

#[test]
fn blank_theme_fails_without_writing() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("out");

    varsheet(tmp.path())
        .args(["export", "--theme", "   "])
        .arg("--input")
        .arg(fixture("demo.json"))
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAIL varsheet export"))
        .stderr(predicate::str::contains("please enter a theme name"));

    assert!(!out.exists());
}

#[test]
fn missing_input_fails() {
    let tmp = tempdir().unwrap();

    varsheet(tmp.path())
        .args(["export", "--theme", "Demo", "--input"])
        .arg(tmp.path().join("nope.json"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAIL varsheet export"));
}

#[test]
fn export_defaults_to_profile_output_dir() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("from-profile");
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!(
            "version = 1\n[profiles.default]\noutput_dir = \"{}\"\nclass_prefix = \"acme\"\n",
            out.display()
        ),
    )
    .unwrap();

    varsheet(tmp.path())
        .arg("--config")
        .arg(&cfg)
        .args(["export", "--theme", "Demo"])
        .arg("--input")
        .arg(fixture("demo.json"))
        .assert()
        .success();

    let light = fs::read_to_string(out.join("_color-variables__demo-light.css")).unwrap();
    assert!(light.starts_with(".acme--demo {\n"));
}

#[test]
fn blank_theme_is_reported_before_reading_input() {
    let tmp = tempdir().unwrap();

    varsheet(tmp.path())
        .args(["export", "--theme", " ", "--input"])
        .arg(tmp.path().join("missing.json"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAIL varsheet export"))
        .stderr(predicate::str::contains("please enter a theme name"))
        .stderr(predicate::str::contains("missing.json").not());
}
