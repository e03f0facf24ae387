use anyhow::{Context, Result};
use std::process::{Command, Stdio};

use crate::tokenize::CommandLine;

/// Executes one command and reports its exit code (`None` if a signal
/// ended it).
pub trait Runner {
    fn run(&mut self, command: &CommandLine) -> Result<Option<i32>>;
}

/// Spawns the program with the parent's stdin, stdout and stderr and waits
/// for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct InheritedStdio;

impl Runner for InheritedStdio {
    fn run(&mut self, command: &CommandLine) -> Result<Option<i32>> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to start `{}`", command.program))?;
        Ok(status.code())
    }
}
