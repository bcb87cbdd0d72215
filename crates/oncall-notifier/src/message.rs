//! Notification email composition

use serde::Serialize;

use crate::config::NotifierConfig;

/// A single outgoing email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl NotificationMessage {
    /// Build the "workflow is failing" alert for the configured repository
    pub fn workflow_failing(config: &NotifierConfig) -> Self {
        let repo = &config.repository;
        let workflow = &config.workflow;

        Self {
            to: config.recipient.clone(),
            from: config.sender.clone(),
            subject: format!("A workflow in {} is failing", repo),
            text: format!("The workflow {} in {} is failing.", workflow, repo),
            html: format!(
                "<p>The workflow {} in <a href=\"https://www.github.com/{}\">{}</a> is failing.</p>",
                workflow, repo, repo
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SENDGRID_API_URL, DEFAULT_TIMEOUT_MS};

    fn config() -> NotifierConfig {
        NotifierConfig {
            api_key: "SG.test".to_string(),
            recipient: "oncall@x.com".to_string(),
            sender: "bot@x.com".to_string(),
            repository: "org/repo".to_string(),
            workflow: "CI".to_string(),
            api_url: DEFAULT_SENDGRID_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    #[test]
    fn test_workflow_failing_message() {
        let message = NotificationMessage::workflow_failing(&config());

        assert_eq!(message.to, "oncall@x.com");
        assert_eq!(message.from, "bot@x.com");
        assert_eq!(message.subject, "A workflow in org/repo is failing");
        assert_eq!(message.text, "The workflow CI in org/repo is failing.");
    }

    #[test]
    fn test_html_links_repository() {
        let message = NotificationMessage::workflow_failing(&config());

        assert!(message.html.starts_with("<p>"));
        assert!(message
            .html
            .contains("<a href=\"https://www.github.com/org/repo\">org/repo</a>"));
        assert!(message.html.contains("The workflow CI in"));
    }
}
