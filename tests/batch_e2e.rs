//! Batch driver tests over a temporary levels directory

use slingshot_levels::{
    batch::{run_batch, standard_batch, BatchConfig, LevelDescriptor},
    level::JsonStyle,
    Level, LevelError,
};
use std::path::Path;

fn level_source(birds: i64, start: i64) -> String {
    format!("{birds}\t1\t1\t{start}\t0\n20\t20\t400\t10\t0\n420\t30\n")
}

fn populate(dir: &Path) {
    for desc in standard_batch() {
        let contents = level_source(i64::from(desc.number), i64::from(desc.number) * 100);
        std::fs::write(dir.join(desc.source_name()), contents).unwrap();
    }
}

fn config(dir: &Path) -> BatchConfig {
    BatchConfig {
        levels_dir: dir.to_path_buf(),
        ..BatchConfig::default()
    }
}

#[test]
fn test_full_batch_converts_every_level() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let report = run_batch(&config(dir.path()), &standard_batch());

    assert!(report.is_success());
    assert_eq!(report.succeeded(), 11);
    for name in ["standard_1.json", "standard_8.json", "custom_1.json", "custom_3.json"] {
        assert!(dir.path().join(name).exists(), "{name} missing");
    }

    let json = std::fs::read_to_string(dir.path().join("custom_2.json")).unwrap();
    let level = Level::from_json(&json).unwrap();
    assert_eq!(level.birds, 2);
    assert_eq!(level.start, 200);
}

#[test]
fn test_batch_continues_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());
    std::fs::write(dir.path().join("level3.tsv"), "3\t1\t0\t0\t0\n1\t1\t1\t1\t7\n").unwrap();
    std::fs::remove_file(dir.path().join("customlevel1.tsv")).unwrap();

    let report = run_batch(&config(dir.path()), &standard_batch());

    assert!(!report.is_success());
    assert_eq!(report.entries.len(), 11);
    assert_eq!(report.succeeded(), 9);

    let failed: Vec<LevelDescriptor> = report.failures().map(|e| e.descriptor).collect();
    assert_eq!(
        failed,
        [LevelDescriptor::standard(3), LevelDescriptor::custom(1)]
    );
    assert!(matches!(
        report.entries[2].outcome,
        Err(LevelError::UnknownBlockType { code: 7, .. })
    ));
    assert!(matches!(
        report.entries[8].outcome,
        Err(LevelError::Read { .. })
    ));

    assert!(!dir.path().join("standard_3.json").exists());
    assert!(dir.path().join("standard_4.json").exists());
    assert!(dir.path().join("custom_3.json").exists());
}

#[test]
fn test_fail_fast_stops_batch() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());
    std::fs::write(dir.path().join("level2.tsv"), "not a level\n").unwrap();

    let config = BatchConfig {
        fail_fast: true,
        ..config(dir.path())
    };
    let report = run_batch(&config, &standard_batch());

    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.succeeded(), 1);
    assert!(!dir.path().join("standard_3.json").exists());
}

#[test]
fn test_pretty_batch_output() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let config = BatchConfig {
        style: JsonStyle::Pretty,
        ..config(dir.path())
    };
    let report = run_batch(&config, &[LevelDescriptor::standard(5)]);
    assert!(report.is_success());

    let json = std::fs::read_to_string(dir.path().join("standard_5.json")).unwrap();
    assert!(json.contains('\n'));
    assert_eq!(Level::from_json(&json).unwrap().start, 500);
}
