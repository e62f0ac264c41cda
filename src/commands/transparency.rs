//! Screen and window transparency commands.

use super::{RunOptions, finish};
use crate::cli::{TransparencyArgs, WindowTransparencyArgs};
use crate::config::Config;
use crate::error::Result;
use crate::invoke::{ExecMode, Invocation};
use crate::invoke::format::{format_opacity, split_args};

/// Build the transparency invocation: configured args, then any extra
/// args, then the formatted opacity. The setter takes over the pointer
/// (it waits for a window pick), so it launches detached through a shell.
pub fn plan(config: &Config, opacity: Option<f64>, extra: Option<&str>) -> Result<Invocation> {
    let opacity = opacity.unwrap_or(config.transparency.default_opacity);

    let mut args = split_args(&config.transparency.args)?;
    if let Some(extra) = extra {
        args.extend(split_args(extra)?);
    }
    args.push(format_opacity(opacity)?);

    Ok(Invocation {
        action: "transparency".to_string(),
        program: config.transparency.program.clone(),
        args,
        mode: ExecMode::AsyncShell {
            shell: config.shell.clone(),
        },
        workdir: None,
        output: None,
    })
}

/// Window variant: delegates to [`plan`] with the configured fixed extra
/// argument.
pub fn plan_window(config: &Config, opacity: Option<f64>) -> Result<Invocation> {
    let window_args = config.transparency.window_args.clone();
    let mut invocation = plan(config, opacity, Some(&window_args))?;
    invocation.action = "window-transparency".to_string();
    Ok(invocation)
}

pub fn cmd_transparency(
    args: TransparencyArgs,
    config: &Config,
    opts: &RunOptions,
) -> Result<()> {
    let invocation = plan(config, args.opacity, args.args.as_deref())?;
    finish(invocation, opts)
}

pub fn cmd_window_transparency(
    args: WindowTransparencyArgs,
    config: &Config,
    opts: &RunOptions,
) -> Result<()> {
    let invocation = plan_window(config, args.opacity)?;
    finish(invocation, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_uses_configured_program_and_shell() {
        let config = Config::default();
        let invocation = plan(&config, Some(0.8), None).unwrap();
        assert_eq!(invocation.program, "transset");
        assert_eq!(invocation.args, vec!["0.8"]);
        assert_eq!(
            invocation.mode,
            ExecMode::AsyncShell {
                shell: "sh".to_string()
            }
        );
    }

    #[test]
    fn plan_appends_extra_args_before_opacity() {
        let config = Config::default();
        let invocation = plan(&config, Some(0.5), Some("--inc -v")).unwrap();
        assert_eq!(invocation.args, vec!["--inc", "-v", "0.5"]);
    }

    #[test]
    fn plan_falls_back_to_configured_default_opacity() {
        let mut config = Config::default();
        config.transparency.default_opacity = 0.6;
        let invocation = plan(&config, None, None).unwrap();
        assert_eq!(invocation.args, vec!["0.6"]);
    }

    #[test]
    fn plan_clamps_out_of_range_opacity() {
        let config = Config::default();
        let invocation = plan(&config, Some(2.5), None).unwrap();
        assert_eq!(invocation.args, vec!["1.0"]);
    }

    #[test]
    fn window_plan_injects_fixed_extra_arg() {
        let config = Config::default();
        let invocation = plan_window(&config, Some(0.7)).unwrap();
        assert_eq!(invocation.action, "window-transparency");
        assert_eq!(invocation.args, vec!["-a", "0.7"]);
    }

    #[test]
    fn window_plan_honors_configured_window_args() {
        let mut config = Config::default();
        config.transparency.window_args = "-p".to_string();
        let invocation = plan_window(&config, Some(0.7)).unwrap();
        assert_eq!(invocation.args, vec!["-p", "0.7"]);
    }

    #[test]
    fn plan_rejects_unparsable_extra_args() {
        let config = Config::default();
        assert!(plan(&config, Some(0.5), Some("\"unmatched")).is_err());
    }
}
