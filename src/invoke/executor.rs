//! Process execution for resolved invocations.
//!
//! Three modes:
//!
//! - `Synchronous`: spawn, block until completion, map a non-zero exit
//!   status to `ExecutionFailed`. Used for quick utilities (the mixer)
//!   where the caller wants confirmation.
//! - `AsyncShell`: join the argument list into a fully quoted line and
//!   launch it through a shell without waiting. Used for long-running or
//!   UI-taking programs (transparency setter, screen locker, converter).
//! - `FireAndForget`: spawn the resolved executable directly with its
//!   argument list, no shell at all, optionally with a working-directory
//!   override that applies only to the child. Used for screen capture,
//!   whose tool writes into its working directory.
//!
//! Once an async or fire-and-forget child is spawned it runs independently
//! of the caller; there is no cancellation and no ordering guarantee
//! between rapid launches.

use super::format::shell_line;
use super::{Invocation, Outcome};
use crate::error::{DeskError, Result};
use serde::Serialize;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// How an invocation is executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ExecMode {
    /// Spawn, wait for completion, observe the exit status.
    Synchronous,

    /// Launch through a shell (`<shell> -c <line>`) without waiting.
    /// The exit status is never observed.
    AsyncShell {
        /// The shell program, e.g. "sh".
        shell: String,
    },

    /// Spawn the executable directly, no shell, without waiting.
    FireAndForget,
}

/// Execute a resolved invocation.
///
/// `resolved` must come from the resolver; this function never searches
/// for the program itself.
pub(crate) fn execute(resolved: &Path, invocation: &Invocation) -> Result<Outcome> {
    let program = invocation.program.clone();
    let spawn_err = |e: std::io::Error| DeskError::ExecutionFailed {
        program: invocation.program.clone(),
        reason: format!("failed to spawn: {}", e),
    };

    match &invocation.mode {
        ExecMode::Synchronous => {
            let status = Command::new(resolved)
                .args(&invocation.args)
                .status()
                .map_err(spawn_err)?;
            if status.success() {
                Ok(Outcome::Completed { program })
            } else {
                Err(DeskError::ExecutionFailed {
                    program,
                    reason: describe_status(status),
                })
            }
        }
        ExecMode::AsyncShell { shell } => {
            let line = shell_line(resolved, &invocation.args);
            Command::new(shell)
                .arg("-c")
                .arg(line)
                .spawn()
                .map_err(spawn_err)?;
            Ok(Outcome::Launched { program })
        }
        ExecMode::FireAndForget => {
            let mut command = Command::new(resolved);
            command.args(&invocation.args);
            // current_dir scopes the override to the child: the caller's
            // working directory is untouched even when spawning fails.
            if let Some(dir) = &invocation.workdir {
                command.current_dir(dir);
            }
            command.spawn().map_err(spawn_err)?;
            Ok(Outcome::Launched { program })
        }
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
