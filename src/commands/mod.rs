//! Command implementations for deskctl.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command module exposes a pure `plan` function
//! building an [`Invocation`](crate::invoke::Invocation) from its
//! arguments and the config; the shared [`finish`] helper then dry-runs,
//! executes, reports, and appends the history entry.

mod capture;
mod lock;
mod pdf;
mod transparency;
mod volume;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::events::{self, Event};
use crate::invoke::{self, Invocation};
use serde::Serialize;
use std::path::Path;

/// Execution options shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print the planned invocation instead of executing it.
    pub dry_run: bool,

    /// Print the result as JSON (success path only; errors go to stderr).
    pub json: bool,
}

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command, config: &Config, opts: &RunOptions) -> Result<()> {
    match command {
        Command::Transparency(args) => transparency::cmd_transparency(args, config, opts),
        Command::WindowTransparency(args) => {
            transparency::cmd_window_transparency(args, config, opts)
        }
        Command::Capture(args) => capture::cmd_capture(args, config, opts),
        Command::Lock => lock::cmd_lock(config, opts),
        Command::Volume(volume) => volume::cmd_volume(volume.action, config, opts),
        Command::PdfToText(args) => pdf::cmd_pdf_to_text(args, config, opts),
    }
}

/// Result report printed on the success path.
#[derive(Debug, Serialize)]
struct Report<'a> {
    action: &'a str,
    program: &'a str,
    args: &'a [String],
    status: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a Path>,
}

/// Shared tail of every command: dry-run, execute, report, log.
///
/// A failed invocation is logged to history and propagated as an error;
/// it never terminates the process from here.
fn finish(invocation: Invocation, opts: &RunOptions) -> Result<()> {
    if opts.dry_run {
        print_dry_run(&invocation, opts)?;
        return Ok(());
    }

    match invoke::run(&invocation) {
        Ok(outcome) => {
            log_invocation(&invocation, outcome.tag());
            print_report(&invocation, outcome.tag(), outcome.message(), opts)?;
            Ok(())
        }
        Err(err) => {
            log_invocation(&invocation, &format!("failed: {}", err));
            Err(err)
        }
    }
}

/// Append a history entry. Disabled under test so unit tests never touch
/// the user's state directory.
fn log_invocation(invocation: &Invocation, outcome: &str) {
    if cfg!(test) {
        return;
    }
    events::append_best_effort(&Event::new(
        &invocation.action,
        &invocation.program,
        &invocation.args,
        outcome,
    ));
}

fn print_dry_run(invocation: &Invocation, opts: &RunOptions) -> Result<()> {
    if opts.json {
        let rendered = serde_json::to_string_pretty(invocation).map_err(|e| {
            crate::error::DeskError::ConfigError(format!("failed to render invocation: {}", e))
        })?;
        println!("{}", rendered);
    } else {
        let mut words: Vec<String> = Vec::with_capacity(invocation.args.len() + 1);
        words.push(invocation.program.clone());
        words.extend(invocation.args.iter().cloned());
        println!("dry-run: {}", shell_words::join(&words));
        if let Some(dir) = &invocation.workdir {
            println!("  workdir: {}", dir.display());
        }
    }
    Ok(())
}

fn print_report(
    invocation: &Invocation,
    status: &str,
    message: String,
    opts: &RunOptions,
) -> Result<()> {
    if opts.json {
        let report = Report {
            action: &invocation.action,
            program: &invocation.program,
            args: &invocation.args,
            status,
            message,
            output: invocation.output.as_deref(),
        };
        let rendered = serde_json::to_string(&report).map_err(|e| {
            crate::error::DeskError::ConfigError(format!("failed to render report: {}", e))
        })?;
        println!("{}", rendered);
    } else {
        println!("{}", message);
        if let Some(output) = &invocation.output {
            println!("Output: {}", output.display());
        }
    }
    Ok(())
}
