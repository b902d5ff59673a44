// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::Task;

// ── Proptest strategies ─────────────────────────────────────────────────

pub mod strategies {
    use proptest::prelude::*;

    /// A single script line: printable, no embedded newline.
    pub fn arb_command_line() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("#!/bin/bash".to_string()),
            Just("date".to_string()),
            "[ -~]{0,40}",
        ]
    }

    /// A non-empty command list, sometimes led by the bash shebang.
    pub fn arb_commands() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(arb_command_line(), 1..8)
    }
}

// ── Task factories ──────────────────────────────────────────────────────

pub fn task(commands: &[&str]) -> Task {
    Task::new(commands.iter().copied(), "TaskTest", "Tester")
}
