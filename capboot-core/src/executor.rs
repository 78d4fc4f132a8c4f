//! Command execution seam
//!
//! The dispatcher talks to external package managers through this trait so it
//! can be exercised in tests with a fake executor instead of real tools.

use std::io;
use std::process::Command;

use crate::rules::CommandSpec;

/// Runs one external command to completion.
///
/// Returns the exit code, or `None` if the process was terminated by a
/// signal. I/O errors mean the command could not be launched at all.
pub trait CommandExecutor {
    fn run(&mut self, spec: &CommandSpec) -> io::Result<Option<i32>>;
}

/// Production executor: spawns the real command with inherited stdio so the
/// package manager's own output and prompts pass through unmodified.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        SystemExecutor
    }
}

impl CommandExecutor for SystemExecutor {
    fn run(&mut self, spec: &CommandSpec) -> io::Result<Option<i32>> {
        let status = Command::new(spec.program).args(spec.args).status()?;
        Ok(status.code())
    }
}

/// Checks whether a command is available in the system PATH.
pub fn is_command_available(command: &str) -> bool {
    which::which(command).is_ok()
}
