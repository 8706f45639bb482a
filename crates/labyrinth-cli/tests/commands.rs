//! Integration tests: `run` and `check` against real configuration files
//! and a temporary output directory.

use std::fs;

use labyrinth_cli::{check, load_config, run, LabyrinthConfig, Overrides};
use labyrinth_search::LengthBounds;

const ONE_BLOCK: &str = r#"
[grid]
vertical = ["A", "B"]
horizontal = ["P", "Q"]

[start]
vertical = "A"
horizontal = "P"
quadrant = "northeast"

[search]
tolerance = 0
beam_width = 0
"#;

fn one_block_in(dir: &std::path::Path) -> LabyrinthConfig {
    let path = dir.join("one-block.toml");
    fs::write(&path, ONE_BLOCK).expect("write config");
    let mut cfg = load_config(&path).expect("load");
    cfg.apply(&Overrides {
        output: Some(dir.join("out")),
        ..Overrides::default()
    });
    cfg
}

fn score_prefix(path: &std::path::Path) -> i64 {
    let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
    // `{score}-{uuid}.txt`, the score possibly negative.
    let uuid_start = name.len() - ".txt".len() - 36;
    name[..uuid_start - 1].parse().expect("score prefix")
}

// ── run ─────────────────────────────────────────────────────────────

#[test]
fn run_writes_one_file_per_accepted_loop() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = one_block_in(temp.path());
    let summary = run(&cfg).expect("run");

    assert_eq!(summary.report.accepted, summary.files.len());
    // Eight block sides: two laps, one on each side of the streets.
    let best = summary.report.best.expect("a loop");
    assert_eq!(best.length, 8);
    assert!(best.unique <= 8);

    let on_disk = fs::read_dir(temp.path().join("out"))
        .expect("read output dir")
        .count();
    assert_eq!(on_disk, summary.files.len());

    let scores: Vec<i64> = summary.files.iter().map(|p| score_prefix(p)).collect();
    for pair in scores.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
    assert_eq!(scores.last(), Some(&best.value));

    let best = fs::read_to_string(summary.files.last().expect("a file")).expect("read");
    let lines: Vec<&str> = best.lines().collect();
    assert!(lines[0].starts_with("Start at the "));
    assert!(lines[0].contains("corner of A and P"));
    let done = lines.iter().position(|l| *l == "Done.").expect("Done. line");
    // One line per segment follows the directions.
    assert_eq!(lines.len() - done - 1, 8);
}

#[test]
fn parallel_run_finds_same_best() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = one_block_in(temp.path());
    let sequential = run(&cfg).expect("sequential run");

    let mut parallel = cfg.clone();
    parallel.apply(&Overrides {
        workers: Some(3),
        seed: Some(5),
        ..Overrides::default()
    });
    let summary = run(&parallel).expect("parallel run");
    assert_eq!(
        summary.report.best.map(|s| s.value),
        sequential.report.best.map(|s| s.value)
    );
}

#[test]
fn loops_below_minimum_score_write_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut cfg = one_block_in(temp.path());
    // Eight segments score at most 80.
    cfg.search.min_score = 81;
    let summary = run(&cfg).expect("run");
    assert!(summary.report.metrics.candidates > 0);
    assert_eq!(summary.report.best, None);
    assert!(summary.files.is_empty());
}

#[test]
fn every_written_loop_ends_on_starting_side() {
    let temp = tempfile::tempdir().expect("tempdir");
    let summary = run(&one_block_in(temp.path())).expect("run");
    assert!(!summary.files.is_empty());
    for file in &summary.files {
        let body = fs::read_to_string(file).expect("read");
        let last = body.lines().last().expect("segment line");
        assert!(last.ends_with("-> northeast of (0, 0)"), "{last}");
    }
}

#[test]
fn invalid_config_writes_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut cfg = one_block_in(temp.path());
    cfg.start.vertical = "Z".to_string();
    assert!(run(&cfg).is_err());
    assert!(!temp.path().join("out").exists());
}

// ── check ───────────────────────────────────────────────────────────

#[test]
fn check_capitol_hill_defaults() {
    let summary = check(&LabyrinthConfig::default()).expect("check");
    assert_eq!(summary.corners, 12);
    assert_eq!(summary.block_sides, 34);
    assert_eq!(summary.segments, 68);
    assert_eq!(summary.exclusions, 0);
    assert_eq!(summary.bounds, LengthBounds::new(29, 39).unwrap());
}

#[test]
fn check_demo_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/capitol-hill.toml");
    let cfg = load_config(&path).expect("load demo");
    let summary = check(&cfg).expect("check");
    assert_eq!(summary.block_sides, 34);
}

#[test]
fn check_reports_bad_exclusions() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("bad.toml");
    fs::write(
        &path,
        r#"
        [exclusions]
        expected_count = 3
        blocks = [[
            { quadrant = "southwest", vertical = "16th", horizontal = "Howell" },
            { quadrant = "northwest", vertical = "16th", horizontal = "Olive" },
        ]]
        "#,
    )
    .expect("write");
    let cfg = load_config(&path).expect("load");
    let err = check(&cfg).unwrap_err();
    assert!(format!("{err:#}").contains("expected 3"));
}
