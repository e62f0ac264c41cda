//! Screen capture command.

use super::{RunOptions, finish};
use crate::cli::CaptureArgs;
use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::invoke::format::{absolutize, split_args};
use crate::invoke::{ExecMode, Invocation};
use std::path::Path;

/// Build the capture invocation. The capture tool writes its image into
/// the working directory, so the destination directory becomes the child's
/// workdir and the launch is a direct spawn, no shell.
pub fn plan(config: &Config, dir: Option<&Path>) -> Result<Invocation> {
    let dir = match dir {
        Some(dir) => absolutize(dir)?,
        None => absolutize(Path::new(&config.capture.directory))?,
    };

    Ok(Invocation {
        action: "capture".to_string(),
        program: config.capture.program.clone(),
        args: split_args(&config.capture.args)?,
        mode: ExecMode::FireAndForget,
        workdir: Some(dir.clone()),
        output: Some(dir),
    })
}

pub fn cmd_capture(args: CaptureArgs, config: &Config, opts: &RunOptions) -> Result<()> {
    let invocation = plan(config, args.dir.as_deref())?;

    // Directory creation is owned here, not by the invocation layer.
    // create_dir_all is idempotent, so two rapid captures racing on it
    // both proceed.
    if !opts.dry_run
        && let Some(dir) = &invocation.workdir
    {
        std::fs::create_dir_all(dir).map_err(|e| {
            DeskError::ConfigError(format!(
                "failed to create capture directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    finish(invocation, opts)
}
