//! Config struct definitions and default implementations.

use crate::error::{DeskError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for deskctl.
///
/// Each wrapped utility gets its own section with the program name and a
/// default argument string. Argument strings are split with shell-style
/// word rules at plan time, never passed through a shell unquoted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Transparency setter settings.
    pub transparency: TransparencyConfig,

    /// Screen locker settings.
    pub locker: LockerConfig,

    /// Screen capture settings.
    pub capture: CaptureConfig,

    /// Volume mixer settings.
    pub mixer: MixerConfig,

    /// PDF-to-text converter settings.
    pub pdf: PdfConfig,

    /// Shell used for async shell-backed launches (default: "sh").
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Settings for the transparency setter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransparencyConfig {
    /// Program name (default: "transset").
    #[serde(default = "default_transparency_program")]
    pub program: String,

    /// Default extra arguments, prepended before the opacity value.
    #[serde(default)]
    pub args: String,

    /// Fixed extra argument used by the window-transparency command.
    #[serde(default = "default_window_args")]
    pub window_args: String,

    /// Opacity used when the command is given none (range [0, 1]).
    #[serde(default = "default_opacity")]
    pub default_opacity: f64,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Settings for the screen locker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LockerConfig {
    /// Program name (default: "xlock").
    #[serde(default = "default_locker_program")]
    pub program: String,

    /// Default arguments.
    #[serde(default)]
    pub args: String,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Settings for the screen capture tool.
///
/// The default tool (scrot) writes its image into the working directory,
/// so capture runs as a direct spawn with the destination directory as the
/// child's working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Program name (default: "scrot").
    #[serde(default = "default_capture_program")]
    pub program: String,

    /// Default arguments.
    #[serde(default)]
    pub args: String,

    /// Directory captures are saved under (default: "~/screenshots").
    #[serde(default = "default_capture_directory")]
    pub directory: String,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Settings for the volume mixer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    /// Program name (default: "aumix").
    #[serde(default = "default_mixer_program")]
    pub program: String,

    /// Default arguments, placed before the volume value (default: "-v").
    #[serde(default = "default_mixer_args")]
    pub args: String,

    /// Step used by raise/lower when no factor is given (default: 5).
    #[serde(default = "default_mixer_step")]
    pub step: u32,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Settings for the PDF-to-text converter.
///
/// The program is resolved on the search path like every other utility; an
/// absolute path here bypasses the search for environment-specific installs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Program name (default: "pdftotext").
    #[serde(default = "default_pdf_program")]
    pub program: String,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transparency: TransparencyConfig::default(),
            locker: LockerConfig::default(),
            capture: CaptureConfig::default(),
            mixer: MixerConfig::default(),
            pdf: PdfConfig::default(),
            shell: default_shell(),
            extra: BTreeMap::new(),
        }
    }
}

impl Default for TransparencyConfig {
    fn default() -> Self {
        Self {
            program: default_transparency_program(),
            args: String::new(),
            window_args: default_window_args(),
            default_opacity: default_opacity(),
            extra: BTreeMap::new(),
        }
    }
}

impl Default for LockerConfig {
    fn default() -> Self {
        Self {
            program: default_locker_program(),
            args: String::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            program: default_capture_program(),
            args: String::new(),
            directory: default_capture_directory(),
            extra: BTreeMap::new(),
        }
    }
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            program: default_mixer_program(),
            args: default_mixer_args(),
            step: default_mixer_step(),
            extra: BTreeMap::new(),
        }
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            program: default_pdf_program(),
            extra: BTreeMap::new(),
        }
    }
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_transparency_program() -> String {
    "transset".to_string()
}

fn default_window_args() -> String {
    "-a".to_string()
}

fn default_opacity() -> f64 {
    0.8
}

fn default_locker_program() -> String {
    "xlock".to_string()
}

fn default_capture_program() -> String {
    "scrot".to_string()
}

fn default_capture_directory() -> String {
    "~/screenshots".to_string()
}

fn default_mixer_program() -> String {
    "aumix".to_string()
}

fn default_mixer_args() -> String {
    "-v".to_string()
}

fn default_mixer_step() -> u32 {
    5
}

fn default_pdf_program() -> String {
    "pdftotext".to_string()
}

impl Config {
    /// Validate the configuration.
    ///
    /// Validation rules:
    /// - Program names and the shell must not be empty
    /// - The mixer step must be greater than 0
    /// - The default opacity must be within [0, 1]
    pub fn validate(&self) -> Result<()> {
        let programs = [
            ("transparency.program", &self.transparency.program),
            ("locker.program", &self.locker.program),
            ("capture.program", &self.capture.program),
            ("mixer.program", &self.mixer.program),
            ("pdf.program", &self.pdf.program),
        ];
        for (field, value) in programs {
            if value.trim().is_empty() {
                return Err(DeskError::ConfigError(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }

        if self.shell.trim().is_empty() {
            return Err(DeskError::ConfigError(
                "config validation failed: shell must not be empty".to_string(),
            ));
        }

        if self.mixer.step == 0 {
            return Err(DeskError::ConfigError(
                "config validation failed: mixer.step must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.transparency.default_opacity) {
            return Err(DeskError::ConfigError(format!(
                "config validation failed: transparency.default_opacity must be within [0, 1], got {}",
                self.transparency.default_opacity
            )));
        }

        Ok(())
    }
}
