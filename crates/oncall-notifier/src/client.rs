//! SendGrid mail-send client
//!
//! Posts one message to `/v3/mail/send`. SendGrid answers `202 Accepted`
//! on success; any other status is surfaced as [`NotifierError::Server`].

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::config::NotifierConfig;
use crate::error::{NotifierError, Result};
use crate::message::NotificationMessage;

/// Delivery of a composed notification
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<()>;
}

/// SendGrid v3 API client
pub struct SendGridClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl SendGridClient {
    /// Create new client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
            timeout: Duration::from_millis(crate::config::DEFAULT_TIMEOUT_MS),
        }
    }

    /// Create a client for the configured endpoint and key
    pub fn from_config(config: &NotifierConfig) -> Self {
        Self::new(&config.api_url, &config.api_key)
            .with_timeout(Duration::from_millis(config.timeout_ms))
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl MailSender for SendGridClient {
    async fn send(&self, message: &NotificationMessage) -> Result<()> {
        let url = format!("{}/v3/mail/send", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&MailSendRequest::from(message))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| NotifierError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(NotifierError::Server {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 2],
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

impl<'a> From<&'a NotificationMessage> for MailSendRequest<'a> {
    fn from(message: &'a NotificationMessage) -> Self {
        Self {
            personalizations: [Personalization {
                to: [Address { email: &message.to }],
            }],
            from: Address {
                email: &message.from,
            },
            subject: &message.subject,
            content: [
                Content {
                    content_type: "text/plain",
                    value: &message.text,
                },
                Content {
                    content_type: "text/html",
                    value: &message.html,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mail_send_request_shape() {
        let message = NotificationMessage {
            to: "oncall@x.com".to_string(),
            from: "bot@x.com".to_string(),
            subject: "A workflow in org/repo is failing".to_string(),
            text: "text body".to_string(),
            html: "<p>html body</p>".to_string(),
        };

        let body = serde_json::to_value(MailSendRequest::from(&message)).unwrap();
        assert_eq!(
            body,
            json!({
                "personalizations": [{ "to": [{ "email": "oncall@x.com" }] }],
                "from": { "email": "bot@x.com" },
                "subject": "A workflow in org/repo is failing",
                "content": [
                    { "type": "text/plain", "value": "text body" },
                    { "type": "text/html", "value": "<p>html body</p>" }
                ]
            })
        );
    }

    #[test]
    fn test_client_builder() {
        let client = SendGridClient::new("http://localhost:8080", "SG.key")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.timeout, Duration::from_millis(250));
    }
}
