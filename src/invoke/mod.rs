//! Command dispatch and invocation layer.
//!
//! Maps a symbolic action plus already-validated parameters to a concrete
//! external command and executes it with the correct execution mode:
//!
//! - resolution: the program name is located on the executable search path
//!   before anything is spawned ([`resolve`]);
//! - formatting: typed parameters become an argument list, joined into a
//!   quoted shell line only when a shell is genuinely required ([`format`]);
//! - execution: synchronous wait, async shell-backed launch, or direct
//!   fire-and-forget spawn ([`executor`]).
//!
//! A single invocation moves through Requested -> Resolving -> Resolved ->
//! Executing and terminates as Succeeded, Failed, or Unresolved. There are
//! no retries; a failed invocation requires a new request.

pub mod executor;
pub mod format;
pub mod resolve;

use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;

pub use executor::ExecMode;
pub use format::VolumeMode;

/// A single invocation request: one external command, fully formatted.
///
/// Created per call and discarded after execution. The program name is
/// logical; resolution to a concrete path happens in [`run`].
#[derive(Debug, Clone, Serialize)]
pub struct Invocation {
    /// Symbolic action name, used for reporting and the history log.
    pub action: String,

    /// Logical program name to resolve on the search path.
    pub program: String,

    /// Ordered, already-formatted argument list.
    pub args: Vec<String>,

    /// Execution mode.
    pub mode: ExecMode,

    /// Working directory for the spawned child, applied only to the child
    /// (never a process-wide chdir). Used by fire-and-forget capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,

    /// Location of the output this invocation produces, if any
    /// (e.g. the capture directory or the converted text file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Outcome of an executed invocation.
///
/// `Completed` is only produced by synchronous runs, which observe the exit
/// status. Async and fire-and-forget launches yield `Launched`: the child
/// was spawned, but completion is unknown by design.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The process ran to completion with exit status zero.
    Completed {
        /// The program that was invoked.
        program: String,
    },

    /// The process was launched; completion is not tracked.
    Launched {
        /// The program that was launched.
        program: String,
    },
}

impl Outcome {
    /// Human-readable status message for display.
    pub fn message(&self) -> String {
        match self {
            Outcome::Completed { program } => format!("'{}' completed successfully", program),
            Outcome::Launched { program } => {
                format!("'{}' launched (completion not tracked)", program)
            }
        }
    }

    /// Short tag for the history log.
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Completed { .. } => "completed",
            Outcome::Launched { .. } => "launched",
        }
    }
}

/// Resolve and execute an invocation request.
///
/// Resolution always happens first: if the program cannot be located, no
/// process is spawned and `ExecutableNotFound` is returned.
pub fn run(invocation: &Invocation) -> Result<Outcome> {
    let resolved = resolve::resolve(&invocation.program, &resolve::search_path_dirs())?;
    executor::execute(&resolved, invocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskError;

    fn request(program: &str, mode: ExecMode) -> Invocation {
        Invocation {
            action: "test".to_string(),
            program: program.to_string(),
            args: vec![],
            mode,
            workdir: None,
            output: None,
        }
    }

    #[test]
    fn run_unresolvable_program_never_spawns() {
        let inv = request("deskctl-test-no-such-program-xyz", ExecMode::Synchronous);
        let result = run(&inv);
        match result {
            Err(DeskError::ExecutableNotFound { program }) => {
                assert_eq!(program, "deskctl-test-no-such-program-xyz");
            }
            other => panic!("expected ExecutableNotFound, got {:?}", other),
        }
    }

    #[test]
    fn run_synchronous_success() {
        let inv = request("true", ExecMode::Synchronous);
        let outcome = run(&inv).unwrap();
        assert!(matches!(outcome, Outcome::Completed { .. }));
        assert_eq!(outcome.tag(), "completed");
    }

    #[test]
    fn run_synchronous_failure_reports_status() {
        let inv = request("false", ExecMode::Synchronous);
        let result = run(&inv);
        match result {
            Err(DeskError::ExecutionFailed { program, reason }) => {
                assert_eq!(program, "false");
                assert!(reason.contains("exit"), "reason was: {}", reason);
            }
            other => panic!("expected ExecutionFailed, got {:?}", other),
        }
    }

    #[test]
    fn launched_message_does_not_claim_success() {
        let outcome = Outcome::Launched {
            program: "xlock".to_string(),
        };
        assert!(outcome.message().contains("completion not tracked"));
        assert!(!outcome.message().contains("success"));
    }
}
