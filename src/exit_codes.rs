//! Exit code constants for the poster-gen CLI.
//!
//! - 0: Success
//! - 1: Any failure (missing credential, API failure, invalid input, cancellation)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Failure: the run did not produce its final artifact or was cancelled.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, FAILURE, "Exit codes must be distinct");
    }

    #[test]
    fn exit_codes_match_cli_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
