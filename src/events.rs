//! Invocation history log.
//!
//! Append-only NDJSON log (one JSON object per line) of every invocation
//! deskctl performs, stored at `$XDG_STATE_HOME/deskctl/history.ndjson`.
//!
//! Each line has:
//! - `ts`: RFC3339 timestamp
//! - `actor`: `user@host`
//! - `action`: the symbolic action name
//! - `program`: the logical program that was invoked
//! - `args`: the formatted argument list
//! - `outcome`: `completed`, `launched`, or `failed: <reason>`
//!
//! Logging is best-effort: a failure to append warns on stderr and never
//! fails the command that triggered it.

use crate::error::{DeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A single history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the invocation happened.
    pub ts: DateTime<Utc>,

    /// Who ran it, as `user@host`.
    pub actor: String,

    /// Symbolic action name (e.g. "volume-raise").
    pub action: String,

    /// Logical program name.
    pub program: String,

    /// Formatted argument list.
    pub args: Vec<String>,

    /// Outcome tag or failure description.
    pub outcome: String,
}

impl Event {
    /// Create an event timestamped now, attributed to the current user.
    pub fn new(action: &str, program: &str, args: &[String], outcome: &str) -> Self {
        Self {
            ts: Utc::now(),
            actor: current_actor(),
            action: action.to_string(),
            program: program.to_string(),
            args: args.to_vec(),
            outcome: outcome.to_string(),
        }
    }
}

/// Build the `user@host` actor string.
fn current_actor() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .unwrap_or_else(|_| "unknown".to_string());
    let host = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string());
    format!("{}@{}", user, host)
}

/// Default history file path: `$XDG_STATE_HOME/deskctl/history.ndjson`.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|d| d.join("deskctl").join("history.ndjson"))
}

/// Append an event to the history file, creating parent directories as
/// needed.
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DeskError::ConfigError(format!(
                "failed to create history directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let line = serde_json::to_string(event)
        .map_err(|e| DeskError::ConfigError(format!("failed to serialize event: {}", e)))?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            DeskError::ConfigError(format!(
                "failed to open history file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line).map_err(|e| {
        DeskError::ConfigError(format!(
            "failed to write history file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Append to the default history file, warning on stderr instead of
/// failing when the log cannot be written.
pub fn append_best_effort(event: &Event) {
    let Some(path) = default_history_path() else {
        return;
    };
    if let Err(e) = append_event(&path, event) {
        eprintln!("Warning: failed to log invocation: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn append_creates_file_and_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("history.ndjson");

        let event = Event::new("lock", "xlock", &[], "launched");
        append_event(&path, &event).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn appended_lines_parse_back_as_events() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.ndjson");

        let first = Event::new("volume-raise", "aumix", &["-v".into(), "+5".into()], "completed");
        let second = Event::new("lock", "xlock", &[], "launched");
        append_event(&path, &first).unwrap();
        append_event(&path, &second).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: Event = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.action, "volume-raise");
        assert_eq!(parsed.args, vec!["-v", "+5"]);
        assert_eq!(parsed.outcome, "completed");

        let parsed: Event = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.program, "xlock");
    }

    #[test]
    fn actor_has_user_at_host_shape() {
        let event = Event::new("lock", "xlock", &[], "launched");
        assert!(event.actor.contains('@'));
    }
}
