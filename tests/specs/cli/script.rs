// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `conductor script` specs

use crate::prelude::*;

#[test]
fn writes_command_file_without_running_it() {
    let run = cli().script(&["touch ran", "echo hi"]).passes();

    let printed = run.stdout();
    let path = std::path::Path::new(printed.trim_end());
    assert_eq!(path.parent(), Some(run.scratch()));
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "#!/bin/bash\ntouch ran\necho hi"
    );
    assert_eq!(run.scratch_files(), vec![path.to_path_buf()]);
}

#[test]
fn keeps_caller_shebang() {
    let run = cli().script(&["#!/bin/bash", "date"]).passes();

    let printed = run.stdout();
    let contents = std::fs::read_to_string(printed.trim_end()).unwrap();
    assert_eq!(contents, "#!/bin/bash\ndate");
}

#[test]
fn json_format_reports_path() {
    let run = cli().args(&["-o", "json"]).script(&["date"]).passes();

    let value: serde_json::Value = serde_json::from_str(run.stdout().trim_end()).unwrap();
    let path = value["command_file"].as_str().unwrap();
    assert!(path.ends_with(".sh"));
    assert!(std::path::Path::new(path).exists());
}
