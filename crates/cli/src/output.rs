// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use conductor_core::LogMessage;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write one log record: the bare message, or the record as a JSON line.
pub fn write_log_message(
    out: &mut impl Write,
    msg: &LogMessage,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", msg.message)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, msg)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the path of a prepared command file.
pub fn write_command_file(
    out: &mut impl Write,
    path: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", path.display())?,
        OutputFormat::Json => {
            let obj = serde_json::json!({ "command_file": path });
            writeln!(out, "{}", serde_json::to_string(&obj)?)?;
        }
    }
    Ok(())
}
