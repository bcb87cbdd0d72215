//! CloudWatch `PutMetricData` publisher

use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum as CwMetricDatum};
use aws_sdk_cloudwatch::Client;

use super::MetricsPublisher;
use crate::error::{ReporterError, Result};
use crate::metrics::MetricDatum;

/// Publishes metric data through the AWS CloudWatch API
#[derive(Debug, Clone)]
pub struct CloudWatchPublisher {
    client: Client,
}

impl CloudWatchPublisher {
    /// Wrap an existing CloudWatch client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS credential and region chain.
    ///
    /// SDK retries are disabled: each publish is a single attempt.
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        tracing::debug!(
            region = ?sdk_config.region(),
            "Loaded AWS configuration"
        );

        Self::new(Client::new(&sdk_config))
    }
}

/// Convert a datum into the SDK's request shape
fn to_cloudwatch(datum: &MetricDatum) -> CwMetricDatum {
    let dimensions = datum
        .tags()
        .iter()
        .map(|tag| Dimension::builder().name(&tag.key).value(&tag.value).build())
        .collect();

    CwMetricDatum::builder()
        .metric_name(datum.name())
        .value(datum.value())
        .set_dimensions(Some(dimensions))
        .build()
}

#[async_trait]
impl MetricsPublisher for CloudWatchPublisher {
    fn name(&self) -> &'static str {
        "cloudwatch"
    }

    async fn put_metric_data(&self, namespace: &str, data: &[MetricDatum]) -> Result<()> {
        let metric_data = data.iter().map(to_cloudwatch).collect();

        self.client
            .put_metric_data()
            .namespace(namespace)
            .set_metric_data(Some(metric_data))
            .send()
            .await
            .map_err(|e| ReporterError::remote(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
