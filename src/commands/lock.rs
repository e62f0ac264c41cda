//! Screen lock command.

use super::{RunOptions, finish};
use crate::config::Config;
use crate::error::Result;
use crate::invoke::format::split_args;
use crate::invoke::{ExecMode, Invocation};

/// Build the lock invocation. The locker takes over the display until the
/// user unlocks, so it launches detached through a shell.
pub fn plan(config: &Config) -> Result<Invocation> {
    Ok(Invocation {
        action: "lock".to_string(),
        program: config.locker.program.clone(),
        args: split_args(&config.locker.args)?,
        mode: ExecMode::AsyncShell {
            shell: config.shell.clone(),
        },
        workdir: None,
        output: None,
    })
}

pub fn cmd_lock(config: &Config, opts: &RunOptions) -> Result<()> {
    let invocation = plan(config)?;
    finish(invocation, opts)
}
