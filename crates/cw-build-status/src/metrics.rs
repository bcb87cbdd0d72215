//! Metric datum construction
//!
//! Every datum carries the `ProjectName` and `IsCronJob` dimensions, in that
//! order. A `WorkflowName` dimension follows when the workflow is known.

use serde::Serialize;

use crate::config::ActionConfig;
use crate::status::BuildOutcome;

pub const NUM_BUILDS_METRIC_NAME: &str = "Builds";
pub const FAILED_BUILDS_METRIC_NAME: &str = "FailedBuilds";
pub const SUCCESS_BUILDS_METRIC_NAME: &str = "SucceededBuilds";

pub const PROJECT_DIMENSION: &str = "ProjectName";
pub const IS_CRON_JOB_DIMENSION: &str = "IsCronJob";
pub const WORKFLOW_DIMENSION: &str = "WorkflowName";

/// Value of a metric that counts the event
pub const SUCCESS_METRIC_VALUE: f64 = 1.0;
/// Value of a metric that does not count the event
pub const FAILED_METRIC_VALUE: f64 = 0.0;

/// A single dimension attached to a datum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    #[serde(rename = "Name")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One named, valued, tagged measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDatum {
    #[serde(rename = "MetricName")]
    name: String,
    #[serde(rename = "Value")]
    value: f64,
    #[serde(rename = "Dimensions")]
    tags: Vec<Tag>,
}

impl MetricDatum {
    /// Construct a datum tagged with the project and scheduled-run flag.
    ///
    /// The flag is rendered as the strings `True`/`False`. `value` is not
    /// range checked; callers pass 0.0 or 1.0.
    pub fn build(
        metric_name: impl Into<String>,
        project_name: impl Into<String>,
        is_scheduled: bool,
        value: f64,
    ) -> Self {
        let cron_job = if is_scheduled { "True" } else { "False" };

        Self {
            name: metric_name.into(),
            value,
            tags: vec![
                Tag::new(PROJECT_DIMENSION, project_name),
                Tag::new(IS_CRON_JOB_DIMENSION, cron_job),
            ],
        }
    }

    /// Append the workflow name dimension
    pub fn with_workflow(mut self, workflow: impl Into<String>) -> Self {
        self.tags.push(Tag::new(WORKFLOW_DIMENSION, workflow));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Look up a tag value by key
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }
}

/// Build the `Builds`, `FailedBuilds` and `SucceededBuilds` batch for one run
pub fn build_batch(config: &ActionConfig, outcome: BuildOutcome) -> Vec<MetricDatum> {
    let (failed, succeeded) = if outcome.is_failure() {
        (SUCCESS_METRIC_VALUE, FAILED_METRIC_VALUE)
    } else {
        (FAILED_METRIC_VALUE, SUCCESS_METRIC_VALUE)
    };

    [
        (NUM_BUILDS_METRIC_NAME, SUCCESS_METRIC_VALUE),
        (FAILED_BUILDS_METRIC_NAME, failed),
        (SUCCESS_BUILDS_METRIC_NAME, succeeded),
    ]
    .into_iter()
    .map(|(name, value)| {
        let datum = MetricDatum::build(name, &config.project_name, config.is_scheduled, value);
        match &config.workflow {
            Some(workflow) => datum.with_workflow(workflow),
            None => datum,
        }
    })
    .collect()
}
