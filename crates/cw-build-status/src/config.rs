//! Action configuration
//!
//! All inputs are read once, in `main`, and normalized here into an
//! immutable [`ActionConfig`]. The GitHub Actions runner exposes an input
//! named `project-name` as the environment variable `INPUT_PROJECT-NAME`;
//! the binary maps those variables onto [`ActionInputs`] through clap.

use crate::error::{ReporterError, Result};

/// Trigger event name of scheduled (cron) workflow runs
pub const SCHEDULE_EVENT_NAME: &str = "schedule";

/// Raw, unvalidated inputs as handed over by the runner
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    pub namespace: Option<String>,
    pub project_name: Option<String>,
    pub status: Option<String>,
    pub workflow: Option<String>,
    pub event_name: Option<String>,
}

/// Validated configuration for one reporter run
#[derive(Debug, Clone, PartialEq)]
pub struct ActionConfig {
    /// CloudWatch namespace the metrics are published under
    pub namespace: String,
    /// Value of the `ProjectName` dimension
    pub project_name: String,
    /// Raw `status` input, validated later by the runner
    pub status: String,
    /// Name of the workflow being reported, when known
    pub workflow: Option<String>,
    /// True if the run was triggered by a schedule
    pub is_scheduled: bool,
}

impl ActionConfig {
    /// Normalize raw inputs.
    ///
    /// Values are trimmed and empty strings are treated as absent, matching
    /// how the Actions runner passes unset inputs. Only `status` is required.
    pub fn from_inputs(inputs: ActionInputs) -> Result<Self> {
        let status =
            non_empty(inputs.status).ok_or_else(|| ReporterError::missing_input("status"))?;

        let is_scheduled = non_empty(inputs.event_name)
            .map(|event| event == SCHEDULE_EVENT_NAME)
            .unwrap_or(false);

        Ok(Self {
            namespace: non_empty(inputs.namespace).unwrap_or_default(),
            project_name: non_empty(inputs.project_name).unwrap_or_default(),
            status,
            workflow: non_empty(inputs.workflow),
            is_scheduled,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
