//! Exit code constants for the gh-rr CLI.
//!
//! - 0: Success (including dry runs and `--help`)
//! - 1: Any handled failure (bad args, missing config, unknown group, `gh` errors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Handled failure: the error has been reported on stderr.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, FAILURE);
    }

    #[test]
    fn exit_codes_match_cli_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
