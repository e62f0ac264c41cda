//! Typed parameter formatting for external commands.
//!
//! Formatters produce argument lists, never raw command strings; a shell
//! line is only assembled (fully quoted) when the shell-backed mode needs
//! one. Malformed parameters fail here, before anything is resolved or
//! spawned.

use crate::error::{DeskError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Direction for a volume change.
///
/// A closed set: parsing anything else fails fast rather than silently
/// defaulting to `Set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeMode {
    /// Absolute value, no sign prefix.
    Set,
    /// Increase, "+" prefix.
    Raise,
    /// Decrease, "-" prefix.
    Lower,
}

impl std::str::FromStr for VolumeMode {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "set" => Ok(VolumeMode::Set),
            "raise" => Ok(VolumeMode::Raise),
            "lower" => Ok(VolumeMode::Lower),
            other => Err(DeskError::InvalidParameter(format!(
                "unknown volume mode '{}' (expected set, raise, or lower)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for VolumeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolumeMode::Set => write!(f, "set"),
            VolumeMode::Raise => write!(f, "raise"),
            VolumeMode::Lower => write!(f, "lower"),
        }
    }
}

/// Format a volume value with the sign prefix for its mode.
///
/// `Raise(5)` -> `"+5"`, `Lower(5)` -> `"-5"`, `Set(50)` -> `"50"`.
pub fn format_volume(mode: VolumeMode, value: u32) -> String {
    match mode {
        VolumeMode::Set => value.to_string(),
        VolumeMode::Raise => format!("+{}", value),
        VolumeMode::Lower => format!("-{}", value),
    }
}

/// Format an opacity value with one decimal place.
///
/// Policy: out-of-range values are clamped into [0, 1] rather than
/// rejected (the external setter clamps anyway, and clamping keeps
/// configured defaults usable). Non-finite values are invalid.
pub fn format_opacity(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(DeskError::InvalidParameter(format!(
            "opacity must be a finite number, got {}",
            value
        )));
    }
    Ok(format!("{:.1}", value.clamp(0.0, 1.0)))
}

/// Split a user- or config-supplied argument string into words using
/// shell quoting rules.
pub fn split_args(s: &str) -> Result<Vec<String>> {
    shell_words::split(s).map_err(|e| {
        DeskError::InvalidParameter(format!(
            "failed to parse arguments '{}': {}\nFix: check for unmatched quotes.",
            s, e
        ))
    })
}

/// Join a resolved program and its arguments into a single shell line with
/// every word quoted. Only used by the shell-backed execution mode.
pub fn shell_line(program: &Path, args: &[String]) -> String {
    let mut words: Vec<String> = Vec::with_capacity(args.len() + 1);
    words.push(program.to_string_lossy().into_owned());
    words.extend(args.iter().cloned());
    shell_words::join(&words)
}

/// Expand a path to absolute form against the current directory, with
/// leading `~` expanded to the user's home directory.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let path = expand_tilde(path);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|e| {
        DeskError::InvalidParameter(format!(
            "cannot resolve relative path '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(cwd.join(path))
}

fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
