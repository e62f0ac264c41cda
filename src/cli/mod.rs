//! CLI argument parsing for deskctl.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::invoke::VolumeMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deskctl: thin wrappers over external desktop utilities.
///
/// Every command resolves its utility on the executable search path,
/// formats an argument list, and invokes it with the right execution mode
/// (blocking for quick tools, detached for long-running ones).
#[derive(Parser, Debug)]
#[command(name = "deskctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to an alternate config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the resolved invocation without spawning anything.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Print the invocation result as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands for deskctl.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set screen transparency.
    ///
    /// Launches the configured transparency setter (default: transset)
    /// detached through a shell.
    Transparency(TransparencyArgs),

    /// Set transparency for the active window.
    ///
    /// Delegates to `transparency` with the configured fixed extra
    /// argument (default: -a).
    WindowTransparency(WindowTransparencyArgs),

    /// Capture the screen to an image file.
    ///
    /// Spawns the capture tool (default: scrot) directly with the
    /// destination directory as its working directory; the directory is
    /// created if absent.
    Capture(CaptureArgs),

    /// Lock the screen.
    ///
    /// Launches the configured screen locker (default: xlock) detached.
    Lock,

    /// Volume mixer commands.
    ///
    /// Runs the configured mixer (default: aumix) synchronously and
    /// reports its exit status.
    Volume(VolumeCommand),

    /// Convert a PDF file to text.
    ///
    /// The source must exist; the destination defaults to the source
    /// path with a .txt extension.
    PdfToText(PdfToTextArgs),
}

/// Arguments for the `transparency` command.
#[derive(Parser, Debug)]
pub struct TransparencyArgs {
    /// Opacity in [0, 1]; out-of-range values are clamped.
    /// Defaults to the configured default opacity.
    pub opacity: Option<f64>,

    /// Extra arguments passed before the opacity (shell-style quoting).
    /// Values are usually tool flags, so leading hyphens are accepted.
    #[arg(long, allow_hyphen_values = true)]
    pub args: Option<String>,
}

/// Arguments for the `window-transparency` command.
#[derive(Parser, Debug)]
pub struct WindowTransparencyArgs {
    /// Opacity in [0, 1]; out-of-range values are clamped.
    /// Defaults to the configured default opacity.
    pub opacity: Option<f64>,
}

/// Arguments for the `capture` command.
#[derive(Parser, Debug)]
pub struct CaptureArgs {
    /// Destination directory for the captured image.
    /// Defaults to the configured capture directory.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

/// Volume subcommands.
#[derive(Parser, Debug)]
pub struct VolumeCommand {
    #[command(subcommand)]
    pub action: VolumeAction,
}

/// Available volume actions.
#[derive(Subcommand, Debug)]
pub enum VolumeAction {
    /// Set the volume to a value, absolute by default.
    ///
    /// `--mode raise` / `--mode lower` apply the value as a signed delta.
    Set(VolumeSetArgs),

    /// Raise the volume by a factor (default: configured step).
    Raise(VolumeStepArgs),

    /// Lower the volume by a factor (default: configured step).
    Lower(VolumeStepArgs),

    /// Mute audio (set volume to 0).
    Mute,
}

/// Arguments for the `volume set` command.
#[derive(Parser, Debug)]
pub struct VolumeSetArgs {
    /// Volume value.
    pub value: u32,

    /// Direction for the change: set (absolute), raise, or lower.
    /// Anything else is rejected before a command is formatted.
    #[arg(long, default_value = "set")]
    pub mode: VolumeMode,
}

/// Arguments for the `volume raise` / `volume lower` commands.
#[derive(Parser, Debug)]
pub struct VolumeStepArgs {
    /// Step factor. Defaults to the configured mixer step.
    pub factor: Option<u32>,
}

/// Arguments for the `pdf-to-text` command.
#[derive(Parser, Debug)]
pub struct PdfToTextArgs {
    /// Source PDF file (must exist).
    pub source: PathBuf,

    /// Destination text file. Defaults to the source with a .txt extension.
    pub dest: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
