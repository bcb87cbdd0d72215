//! Notifier configuration
//!
//! Loaded once from the process environment. GitHub sets
//! `GITHUB_REPOSITORY` and `GITHUB_WORKFLOW`; the rest come from the
//! workflow's secrets.

use crate::error::{NotifierError, Result};

pub const SENDGRID_API_KEY: &str = "SENDGRID_API_KEY";
pub const ONCALL_PAGE_EMAIL: &str = "AWS_ONCALL_PAGE_EMAIL";
pub const ONCALL_EMAIL: &str = "AWS_ONCALL_EMAIL";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_WORKFLOW: &str = "GITHUB_WORKFLOW";
pub const SENDGRID_API_URL: &str = "SENDGRID_API_URL";

pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Everything needed to compose and deliver one notification
#[derive(Clone)]
pub struct NotifierConfig {
    pub api_key: String,
    /// On-call address the alert is sent to
    pub recipient: String,
    /// Address the alert is sent from
    pub sender: String,
    /// `owner/name` of the failing repository
    pub repository: String,
    pub workflow: String,
    pub api_url: String,
    pub timeout_ms: u64,
}

impl NotifierConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| NotifierError::MissingEnv(name.to_string()));

        Ok(Self {
            api_key: require(SENDGRID_API_KEY)?,
            recipient: require(ONCALL_PAGE_EMAIL)?,
            sender: require(ONCALL_EMAIL)?,
            repository: require(GITHUB_REPOSITORY)?,
            workflow: require(GITHUB_WORKFLOW)?,
            api_url: get(SENDGRID_API_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SENDGRID_API_URL.to_string()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl std::fmt::Debug for NotifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierConfig")
            .field("api_key", &"<redacted>")
            .field("recipient", &self.recipient)
            .field("sender", &self.sender)
            .field("repository", &self.repository)
            .field("workflow", &self.workflow)
            .field("api_url", &self.api_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
