//! Error types for the deskctl CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Every error is surfaced to the caller as a structured result;
//! a failed invocation never aborts the process mid-way.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deskctl operations.
///
/// Each variant maps to a specific exit code. `ExecutableNotFound` is
/// produced by the resolver before any process is spawned;
/// `ExecutionFailed` can only report a non-zero status for synchronous
/// invocations, since async launches do not observe completion.
#[derive(Error, Debug)]
pub enum DeskError {
    /// A parameter was malformed (e.g. an unrecognized volume mode).
    /// Raised before any command is formatted.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input file for a conversion does not exist. Blocks invocation.
    #[error("source file does not exist: {}", .0.display())]
    SourceFileMissing(PathBuf),

    /// The configuration file could not be read or parsed.
    #[error("config error: {0}")]
    ConfigError(String),

    /// The program could not be located on the executable search path.
    #[error("executable '{program}' not found on the search path\nFix: install it or set a different program in the config file.")]
    ExecutableNotFound {
        /// The logical program name that failed to resolve.
        program: String,
    },

    /// The program was spawned but failed, or spawning itself failed.
    #[error("'{program}' failed: {reason}")]
    ExecutionFailed {
        /// The program that was invoked.
        program: String,
        /// Exit status description or spawn error.
        reason: String,
    },
}

impl DeskError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeskError::InvalidParameter(_) => exit_codes::USER_ERROR,
            DeskError::SourceFileMissing(_) => exit_codes::USER_ERROR,
            DeskError::ConfigError(_) => exit_codes::USER_ERROR,
            DeskError::ExecutableNotFound { .. } => exit_codes::NOT_FOUND,
            DeskError::ExecutionFailed { .. } => exit_codes::EXECUTION_FAILURE,
        }
    }
}

/// Result type alias for deskctl operations.
pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_has_correct_exit_code() {
        let err = DeskError::InvalidParameter("bad mode".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn source_file_missing_has_correct_exit_code() {
        let err = DeskError::SourceFileMissing(PathBuf::from("/tmp/nope.pdf"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = DeskError::ConfigError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn executable_not_found_has_correct_exit_code() {
        let err = DeskError::ExecutableNotFound {
            program: "aumix".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn execution_failed_has_correct_exit_code() {
        let err = DeskError::ExecutionFailed {
            program: "aumix".to_string(),
            reason: "exit status 1".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::EXECUTION_FAILURE);
    }

    #[test]
    fn not_found_message_names_the_program() {
        let err = DeskError::ExecutableNotFound {
            program: "transset".to_string(),
        };
        assert!(err.to_string().contains("transset"));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = DeskError::InvalidParameter("unknown volume mode 'louder'".to_string());
        assert_eq!(
            err.to_string(),
            "invalid parameter: unknown volume mode 'louder'"
        );

        let err = DeskError::SourceFileMissing(PathBuf::from("/docs/a.pdf"));
        assert!(err.to_string().contains("/docs/a.pdf"));
    }
}
