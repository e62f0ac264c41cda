//! Executable resolution against the search path.
//!
//! Pure aside from filesystem stat calls: given a logical program name and
//! an ordered set of directories, return the first entry that is an
//! executable file, or `ExecutableNotFound`. Never substitutes alternate
//! binaries, and never spawns anything (shelling out to `which` would).

use crate::error::{DeskError, Result};
use std::path::{Path, PathBuf};

/// The process's executable search path, in order.
pub fn search_path_dirs() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).collect())
        .unwrap_or_default()
}

/// Resolve a logical program name to an executable path.
///
/// Names containing a path separator are checked directly rather than
/// searched, so configured absolute paths keep working.
pub fn resolve(program: &str, dirs: &[PathBuf]) -> Result<PathBuf> {
    let not_found = || DeskError::ExecutableNotFound {
        program: program.to_string(),
    };

    if program.is_empty() {
        return Err(not_found());
    }

    if program.contains(std::path::MAIN_SEPARATOR) {
        let candidate = PathBuf::from(program);
        if is_executable(&candidate) {
            return Ok(candidate);
        }
        return Err(not_found());
    }

    for dir in dirs {
        let candidate = dir.join(program);
        if is_executable(&candidate) {
            return Ok(candidate);
        }
    }

    Err(not_found())
}

/// Check that a path is an executable regular file.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
