//! Top-level reporter flow: load inputs, validate, build, publish.

use crate::config::{ActionConfig, ActionInputs};
use crate::error::Result;
use crate::metrics::build_batch;
use crate::publisher::{publish, MetricsPublisher};
use crate::status::validate_status;
use crate::workflow::{self, ActionStatus};

/// Validate the configured status, build the batch and publish it.
///
/// Input errors are returned before anything is sent. A publish failure is
/// recorded on `status` instead.
pub async fn post_build_status(
    config: &ActionConfig,
    publisher: &dyn MetricsPublisher,
    status: &mut ActionStatus,
) -> Result<()> {
    let outcome = validate_status(&config.status)?;

    tracing::info!(
        namespace = %config.namespace,
        project = %config.project_name,
        outcome = %outcome,
        scheduled = config.is_scheduled,
        "Reporting build status"
    );

    let metric_data = build_batch(config, outcome);
    publish(publisher, &config.namespace, &metric_data, status).await;

    if !status.is_failed() {
        workflow::info("Successfully published metrics");
    }
    Ok(())
}

/// Run the reporter once and return the final status of the run.
///
/// Every error is caught here and converted into a failed status carrying
/// the error message.
pub async fn run(inputs: ActionInputs, publisher: &dyn MetricsPublisher) -> ActionStatus {
    let mut status = ActionStatus::new();

    let result = match ActionConfig::from_inputs(inputs) {
        Ok(config) => post_build_status(&config, publisher, &mut status).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        if e.is_input_error() {
            tracing::warn!("Check the `status`, `namespace` and `project-name` inputs of the step");
        }
        status.set_failed(e.to_string());
    }
    status
}
