//! Volume mixer commands.

use super::{RunOptions, finish};
use crate::cli::VolumeAction;
use crate::config::Config;
use crate::error::Result;
use crate::invoke::format::{VolumeMode, format_volume, split_args};
use crate::invoke::{ExecMode, Invocation};

/// Build a mixer invocation: configured args, then the signed value.
/// The mixer is quick, so it runs synchronously and the exit status is
/// reported.
pub fn plan(config: &Config, mode: VolumeMode, value: u32) -> Result<Invocation> {
    let mut args = split_args(&config.mixer.args)?;
    args.push(format_volume(mode, value));

    Ok(Invocation {
        action: format!("volume-{}", mode),
        program: config.mixer.program.clone(),
        args,
        mode: ExecMode::Synchronous,
        workdir: None,
        output: None,
    })
}

pub fn cmd_volume(action: VolumeAction, config: &Config, opts: &RunOptions) -> Result<()> {
    let invocation = match action {
        VolumeAction::Set(args) => plan(config, args.mode, args.value)?,
        VolumeAction::Raise(args) => plan(
            config,
            VolumeMode::Raise,
            args.factor.unwrap_or(config.mixer.step),
        )?,
        VolumeAction::Lower(args) => plan(
            config,
            VolumeMode::Lower,
            args.factor.unwrap_or(config.mixer.step),
        )?,
        VolumeAction::Mute => {
            let mut invocation = plan(config, VolumeMode::Set, 0)?;
            invocation.action = "volume-mute".to_string();
            invocation
        }
    };
    finish(invocation, opts)
}
