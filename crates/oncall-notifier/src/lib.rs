//! On-call Notifier
//!
//! Sends a single "workflow is failing" email to the on-call address through
//! the SendGrid v3 mail-send API. Meant to run as the last step of a failed
//! GitHub Actions job.

pub mod client;
pub mod config;
pub mod error;
pub mod message;

pub use client::{MailSender, SendGridClient};
pub use config::NotifierConfig;
pub use error::{NotifierError, Result};
pub use message::NotificationMessage;

/// Compose the failure email and send it exactly once
pub async fn notify(config: &NotifierConfig, sender: &dyn MailSender) -> Result<()> {
    let message = NotificationMessage::workflow_failing(config);

    tracing::info!(
        repository = %config.repository,
        workflow = %config.workflow,
        to = %message.to,
        "Sending on-call notification"
    );

    sender.send(&message).await?;

    tracing::info!("Mail sent successfully");
    Ok(())
}

/// Send the notification and return the process exit code.
///
/// A send failure is logged and still yields 0; the notifier is the last
/// step of a failed job and does not fail it further.
pub async fn notify_and_log(config: &NotifierConfig, sender: &dyn MailSender) -> i32 {
    if let Err(e) = notify(config, sender).await {
        tracing::error!(error = %e, "Failed to send on-call notification");
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockMailSender;

    fn config() -> NotifierConfig {
        NotifierConfig {
            api_key: "SG.test".to_string(),
            recipient: "oncall@x.com".to_string(),
            sender: "bot@x.com".to_string(),
            repository: "org/repo".to_string(),
            workflow: "CI".to_string(),
            api_url: config::DEFAULT_SENDGRID_API_URL.to_string(),
            timeout_ms: config::DEFAULT_TIMEOUT_MS,
        }
    }

    #[tokio::test]
    async fn test_notify_sends_once() {
        let mut sender = MockMailSender::new();
        sender
            .expect_send()
            .withf(|message| message.subject == "A workflow in org/repo is failing")
            .times(1)
            .returning(|_| Ok(()));

        notify(&config(), &sender).await.unwrap();
    }

    #[tokio::test]
    async fn test_notify_propagates_send_error() {
        let mut sender = MockMailSender::new();
        sender.expect_send().times(1).returning(|_| {
            Err(NotifierError::Server {
                status: 401,
                message: "unauthorized".to_string(),
            })
        });

        let err = notify(&config(), &sender).await.unwrap_err();
        assert!(matches!(err, NotifierError::Server { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_send_failure_still_exits_zero() {
        let mut sender = MockMailSender::new();
        sender
            .expect_send()
            .times(1)
            .returning(|_| Err(NotifierError::Network("connection reset".to_string())));

        assert_eq!(notify_and_log(&config(), &sender).await, 0);
    }

    #[tokio::test]
    async fn test_successful_send_exits_zero() {
        let mut sender = MockMailSender::new();
        sender.expect_send().times(1).returning(|_| Ok(()));

        assert_eq!(notify_and_log(&config(), &sender).await, 0);
    }
}
