//! CloudWatch Build Status entry point
//!
//! Invoked once per workflow run by the GitHub Actions runner. Inputs arrive
//! as `INPUT_*` environment variables; each can also be given as a flag.
//!
//! # Exit Codes
//!
//! - 0: Metrics published
//! - 1: Invalid input or the publish call failed

use clap::{Parser, ValueEnum};
use cw_build_status::{run, ActionInputs, CloudWatchPublisher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cw-build-status")]
#[command(about = "Publish a workflow's build status as CloudWatch metrics")]
#[command(version)]
struct Cli {
    /// CloudWatch namespace to publish under
    #[arg(long, env = "INPUT_NAMESPACE")]
    namespace: Option<String>,

    /// Value of the ProjectName dimension
    #[arg(long, env = "INPUT_PROJECT-NAME")]
    project_name: Option<String>,

    /// Build status: success or failure
    #[arg(long, env = "INPUT_STATUS")]
    status: Option<String>,

    /// Name of the workflow being reported
    #[arg(long, env = "GITHUB_WORKFLOW")]
    workflow: Option<String>,

    /// Event that triggered the workflow run
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "text", env = "LOG_FORMAT")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

impl From<Cli> for ActionInputs {
    fn from(cli: Cli) -> Self {
        ActionInputs {
            namespace: cli.namespace,
            project_name: cli.project_name,
            status: cli.status,
            workflow: cli.workflow,
            event_name: cli.event_name,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let publisher = CloudWatchPublisher::from_env().await;
    let status = run(cli.into(), &publisher).await;

    std::process::exit(status.exit_code());
}
