//! Exit code constants for the deskctl CLI.
//!
//! - 0: Success (including fire-and-forget launches)
//! - 1: User error (bad parameter, missing source file, unusable config)
//! - 2: Executable not found on the search path
//! - 3: External command failure (spawn error or non-zero exit)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid parameter, missing source file, or unusable config.
pub const USER_ERROR: i32 = 1;

/// The external program could not be located on the search path.
pub const NOT_FOUND: i32 = 2;

/// The external program was spawned but failed, or could not be spawned.
pub const EXECUTION_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, NOT_FOUND, EXECUTION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
