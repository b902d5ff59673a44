// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `conductor run`

use std::io::Write;

use anyhow::Result;
use clap::Args;
use conductor_core::ExitClass;
use conductor_exec::{Runner, RunnerConfig, TaskError};

use super::TaskArgs;
use crate::exit_error::ExitError;
use crate::output::{write_log_message, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub task: TaskArgs,

    /// Log records buffered before the command blocks on output
    #[arg(long)]
    pub log_capacity: Option<usize>,
}

impl RunArgs {
    fn config(&self) -> RunnerConfig {
        let config = RunnerConfig::from_env();
        match self.log_capacity {
            Some(capacity) => config.log_capacity(capacity),
            None => config,
        }
    }
}

pub async fn handle(args: RunArgs, format: OutputFormat) -> Result<()> {
    let runner = Runner::new(args.config());
    let mut task = args.task.into_task();
    let mut execution = runner.execute(&mut task)?;

    let mut out = std::io::stdout();
    while let Some(msg) = execution.logs.recv().await {
        write_log_message(&mut out, &msg, format)?;
    }
    out.flush()?;

    let result = execution.result.await.unwrap_or(Err(TaskError::Lost));
    let exit_class = execution.exit_code.await.unwrap_or(ExitClass::Failure);
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            let message = match task.command_file() {
                Some(path) => format!("{err} (command file kept at {})", path.display()),
                None => err.to_string(),
            };
            Err(ExitError::from_class(exit_class, message).into())
        }
    }
}
