//! Tests that drive the `levelconv` binary

use slingshot_levels::batch::standard_batch;
use std::path::Path;
use std::process::{Command, Output};

fn levelconv(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_levelconv"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run levelconv binary")
}

fn write_level_set(levels: &Path) {
    std::fs::create_dir_all(levels).unwrap();
    for desc in standard_batch() {
        std::fs::write(
            levels.join(desc.source_name()),
            format!("3\t0\t1\t{}\t0\n100\t40\n", desc.number),
        )
        .unwrap();
    }
}

#[test]
fn test_no_arguments_runs_standard_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_level_set(&dir.path().join("levels"));

    let output = levelconv(&[], dir.path());
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json = std::fs::read_to_string(dir.path().join("levels/standard_7.json")).unwrap();
    assert_eq!(json, r#"{"start":7,"birds":3,"pigs":[{"x":100,"y":40}],"blocks":[]}"#);
    assert!(dir.path().join("levels/custom_3.json").exists());
}

#[test]
fn test_batch_failure_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let levels = dir.path().join("levels");
    write_level_set(&levels);
    std::fs::write(levels.join("customlevel2.tsv"), "3\t1\t0\t0\n").unwrap();

    let output = levelconv(&["batch", "--dir", "levels"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("custom level 2"), "{stderr}");
    assert!(levels.join("custom_3.json").exists());
}

#[test]
fn test_convert_single_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("in.tsv"),
        "3\t1\t1\t25\t0\n10\t10\t100\t50\t1\n200\t60\n",
    )
    .unwrap();

    let output = levelconv(&["convert", "in.tsv", "out.json"], dir.path());
    assert!(output.status.success());

    let json = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    assert_eq!(
        json,
        r#"{"start":25,"birds":3,"pigs":[{"x":200,"y":60}],"blocks":[{"type":"steel","x":100,"y":50,"w":10,"h":10}]}"#
    );
}

#[test]
fn test_check_summarizes_levels() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("good.json"),
        r#"{"start":25,"birds":3,"pigs":[{"x":200,"y":60}],"blocks":[{"type":"steel","x":100,"y":50,"w":10,"h":10}]}"#,
    )
    .unwrap();

    let output = levelconv(&["check", "good.json"], dir.path());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "good.json: start=25 birds=3 pigs=1 blocks=1 (wood=0 steel=1 lead=0)"
    );

    std::fs::write(dir.path().join("bad.json"), "{\"start\":1}").unwrap();
    let output = levelconv(&["check", "good.json", "bad.json"], dir.path());
    assert!(!output.status.success());
}

#[test]
fn test_invalid_verbosity_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = levelconv(&["--verbosity", "loud", "check", "x.json"], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid verbosity level"));
}
