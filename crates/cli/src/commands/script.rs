// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `conductor script`: write a command file for inspection without running it.

use anyhow::Result;
use clap::Args;
use conductor_exec::{Runner, RunnerConfig};

use super::TaskArgs;
use crate::output::{write_command_file, OutputFormat};

#[derive(Args, Debug)]
pub struct ScriptArgs {
    #[command(flatten)]
    pub task: TaskArgs,
}

pub fn handle(args: ScriptArgs, format: OutputFormat) -> Result<()> {
    let runner = Runner::new(RunnerConfig::from_env());
    let mut task = args.task.into_task();
    let path = runner.prepare(&mut task)?;
    write_command_file(&mut std::io::stdout(), &path, format)
}
