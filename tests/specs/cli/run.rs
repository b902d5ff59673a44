// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `conductor run` specs

use crate::prelude::*;

#[test]
fn prints_output_lines_in_order() {
    cli()
        .run(&["echo one", "sleep 0.1", "echo two"])
        .passes()
        .stdout_eq("one\ntwo\n");
}

#[test]
fn success_leaves_scratch_dir_empty() {
    let run = cli().run(&["true"]).passes();
    assert!(run.scratch_files().is_empty(), "{:?}", run.scratch_files());
}

#[test]
fn script_runs_from_temp_dir() {
    let run = cli().run(&["echo $0"]).passes();

    let printed = run.stdout();
    let script = std::path::Path::new(printed.trim_end());
    assert_eq!(script.parent(), Some(run.scratch()));
    assert_eq!(script.extension().and_then(|e| e.to_str()), Some("sh"));
}

#[test]
fn failure_exits_one_and_keeps_command_file() {
    let run = cli()
        .run(&["echo partial", "echo boom >&2", "exit 3"])
        .fails()
        .stdout_eq("partial\n")
        .stderr_has("exit status 3: boom")
        .stderr_has("command file kept at");

    let files = run.scratch_files();
    assert_eq!(files.len(), 1);
    assert_eq!(
        std::fs::read_to_string(&files[0]).unwrap(),
        "#!/bin/bash\necho partial\necho boom >&2\nexit 3"
    );
}

#[test]
fn unknown_command_fails_with_shell_diagnostic() {
    cli().run(&["tlop"]).fails().stdout_eq("").stderr_has("tlop");
}

#[test]
fn json_format_prints_one_record_per_line() {
    let run = cli()
        .args(&["--format", "json"])
        .run(&["echo alpha", "echo beta"])
        .passes();

    let records: Vec<serde_json::Value> = run
        .stdout()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["message"], "alpha");
    assert_eq!(records[1]["message"], "beta");
    for record in &records {
        assert_eq!(record["job"], "nightly");
        assert_eq!(record["owner"], "tester");
        assert!(record["timestamp"].is_string());
    }
}

#[test]
fn small_log_capacity_still_delivers_everything() {
    let run = cli()
        .args(&["run", "--log-capacity", "1", "--job", "nightly", "--owner", "tester", "--"])
        .args(&["seq 1 300"])
        .passes();

    let lines: Vec<String> = run.stdout().lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 300);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[299], "300");
}

#[test]
fn missing_temp_dir_fails_before_running() {
    let missing = std::env::temp_dir().join("conductor-specs-missing-dir");
    cli()
        .env("TEMP_DIR", &missing)
        .run(&["echo never"])
        .fails()
        .stdout_eq("")
        .stderr_has("Error:");
}
