//! Exit code constants for the promptpad CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing library, unreadable files)
//! - 2: Validation failure (undeclared placeholders, invalid values)
//! - 3: Resolution failure (unknown prompt, composition too deep)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, uninitialized library, or I/O failure.
pub const USER_ERROR: i32 = 1;

/// Validation failure: missing variable declarations or rejected values.
pub const VALIDATION_FAILURE: i32 = 2;

/// Resolution failure: prompt not found or depth bound exceeded.
pub const RESOLUTION_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, RESOLUTION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
