//! Metric publication
//!
//! [`MetricsPublisher`] is the seam to the monitoring backend; the
//! production implementation is [`CloudWatchPublisher`]. [`publish`] makes
//! exactly one backend call and never retries.

mod cloudwatch;

pub use cloudwatch::CloudWatchPublisher;

use async_trait::async_trait;

use crate::error::Result;
use crate::metrics::MetricDatum;
use crate::workflow::{self, ActionStatus};

/// Batch-write access to a metrics backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsPublisher: Send + Sync {
    /// Backend identifier used in logs
    fn name(&self) -> &'static str;

    /// Write the whole batch under `namespace` in a single call
    async fn put_metric_data(&self, namespace: &str, data: &[MetricDatum]) -> Result<()>;
}

/// Publish a batch, converting any backend error into a failed run.
///
/// The error is logged and recorded on `status`; it is not returned.
pub async fn publish(
    publisher: &dyn MetricsPublisher,
    namespace: &str,
    data: &[MetricDatum],
    status: &mut ActionStatus,
) {
    let rendered = serde_json::to_string_pretty(data).unwrap_or_else(|e| e.to_string());
    workflow::info(&format!(
        "Publishing metrics {} under namespace {}",
        rendered, namespace
    ));
    tracing::debug!(
        backend = publisher.name(),
        namespace = namespace,
        datapoints = data.len(),
        "Publishing metric data"
    );

    if let Err(e) = publisher.put_metric_data(namespace, data).await {
        tracing::warn!(backend = publisher.name(), "Failed to publish metric data");
        workflow::error("Failed to publish metric data");
        status.set_failed(e.to_string());
    }
}
