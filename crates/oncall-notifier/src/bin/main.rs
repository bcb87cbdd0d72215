//! On-call Notifier entry point
//!
//! # Exit Codes
//!
//! - 0: Mail sent, or the send failed and was logged
//! - 1: Required environment variables are missing

use clap::Parser;
use oncall_notifier::{notify_and_log, NotifierConfig, SendGridClient};

#[derive(Parser)]
#[command(name = "oncall-notify")]
#[command(about = "Email the on-call address that a workflow is failing")]
#[command(version)]
struct Cli {
    /// Request timeout in milliseconds
    #[arg(long, default_value_t = oncall_notifier::config::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false);
    if cli.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    let config = NotifierConfig::from_env()?.with_timeout_ms(cli.timeout_ms);
    let client = SendGridClient::from_config(&config);

    let code = notify_and_log(&config, &client).await;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
