//! Build status validation
//!
//! The `status` input is accepted when it *contains* `success` or `failure`
//! anywhere in the string (unanchored match). Workflows normally pass
//! `${{ job.status }}`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{ReporterError, Result};

/// Status string that marks a failed build
pub const FAILED_BUILD_STATUS: &str = "failure";

static VALID_BUILD_STATUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(success|failure)").expect("Invalid build status pattern")
});

/// Outcome of the workflow run being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Success,
    Failure,
}

impl BuildOutcome {
    pub fn is_failure(self) -> bool {
        self == BuildOutcome::Failure
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildOutcome::Success => f.write_str("success"),
            BuildOutcome::Failure => f.write_str("failure"),
        }
    }
}

/// Validate the `status` input and derive the build outcome.
///
/// Only the exact string `failure` counts as a failed build; any other
/// accepted string (e.g. `not-a-failure`) is reported as a success.
pub fn validate_status(status: &str) -> Result<BuildOutcome> {
    if !VALID_BUILD_STATUS.is_match(status) {
        return Err(ReporterError::InvalidStatus(status.to_string()));
    }

    if status == FAILED_BUILD_STATUS {
        Ok(BuildOutcome::Failure)
    } else {
        Ok(BuildOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_success_string() {
        assert_eq!(validate_status("success"), Ok(BuildOutcome::Success));
    }

    #[test]
    fn test_valid_failure_string() {
        assert_eq!(validate_status("failure"), Ok(BuildOutcome::Failure));
    }

    #[test]
    fn test_invalid_status_string() {
        assert_eq!(
            validate_status("foo"),
            Err(ReporterError::InvalidStatus("foo".to_string()))
        );
        assert!(validate_status("").is_err());
        assert!(validate_status("cancelled").is_err());
        assert!(validate_status("Success").is_err());
    }

    #[test]
    fn test_substring_match_is_loose() {
        // Accepted, but only an exact "failure" is a failed build
        assert_eq!(validate_status("not-a-success"), Ok(BuildOutcome::Success));
        assert_eq!(validate_status("not-a-failure"), Ok(BuildOutcome::Success));
        assert_eq!(validate_status("failures"), Ok(BuildOutcome::Success));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(BuildOutcome::Success.to_string(), "success");
        assert_eq!(BuildOutcome::Failure.to_string(), "failure");
        assert!(BuildOutcome::Failure.is_failure());
        assert!(!BuildOutcome::Success.is_failure());
    }

    proptest! {
        #[test]
        fn prop_contains_keyword_validates(
            prefix in "[a-z -]{0,12}",
            suffix in "[a-z -]{0,12}",
            keyword in prop::sample::select(vec!["success", "failure"]),
        ) {
            let status = format!("{prefix}{keyword}{suffix}");
            prop_assert!(validate_status(&status).is_ok());
        }

        #[test]
        fn prop_without_keyword_is_rejected(status in "[A-Za-z0-9 _-]{0,24}") {
            prop_assume!(!status.contains("success") && !status.contains("failure"));
            prop_assert_eq!(
                validate_status(&status),
                Err(ReporterError::InvalidStatus(status.clone()))
            );
        }
    }
}
