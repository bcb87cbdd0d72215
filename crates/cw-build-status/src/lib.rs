//! CloudWatch Build Status
//!
//! Turns the outcome of a GitHub Actions workflow run into three CloudWatch
//! datapoints (`Builds`, `FailedBuilds`, `SucceededBuilds`) and publishes
//! them under a caller-chosen namespace.
//!
//! # Flow
//!
//! 1. **Config** (`config`): action inputs and runner context are loaded once
//!    into an immutable [`ActionConfig`].
//! 2. **Status** (`status`): the `status` input is checked against
//!    `(success|failure)` and mapped to a [`BuildOutcome`].
//! 3. **Metrics** (`metrics`): the batch of [`MetricDatum`] values is built.
//! 4. **Publisher** (`publisher`): the batch is written through a
//!    [`MetricsPublisher`] in a single call.
//!
//! The process exit code is the only success signal; failures surface as
//! `::error::` workflow commands through [`ActionStatus`].

pub mod config;
pub mod error;
pub mod metrics;
pub mod publisher;
pub mod runner;
pub mod status;
pub mod workflow;

pub use config::{ActionConfig, ActionInputs};
pub use error::{ReporterError, Result};
pub use metrics::{build_batch, MetricDatum, Tag};
pub use publisher::{publish, CloudWatchPublisher, MetricsPublisher};
pub use runner::{post_build_status, run};
pub use status::{validate_status, BuildOutcome};
pub use workflow::ActionStatus;
