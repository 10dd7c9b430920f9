//! Gateway configuration: endpoint, credentials and the retry hint.

use std::fmt;

use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://gateway.citcall.com/";
pub const DEFAULT_VERSION: &str = "v3";

/// Largest `limit_try` value the gateway accepts.
pub const MAX_RETRY: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} is not set")]
    Missing { field: &'static str },

    #[error("invalid API url {value:?}: {reason}")]
    InvalidApiUrl { value: String, reason: String },

    #[error("invalid retry value {value:?}")]
    InvalidRetry { value: String },
}

/// Connection settings and credentials for the Citcall gateway.
///
/// The value is immutable once built; every `with_*` method returns a new
/// configuration. Credentials may be left unset here and are only required
/// when a request is issued.
///
/// Deserializes from the camelCase keys `apiUrl`, `version`, `appName`, `userId`,
/// `senderId`, `apiKey` and `retry`; missing keys take their defaults.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    api_url: String,
    version: String,
    app_name: Option<String>,
    user_id: Option<String>,
    sender_id: Option<String>,
    api_key: Option<String>,
    retry: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            version: DEFAULT_VERSION.to_owned(),
            app_name: None,
            user_id: None,
            sender_id: None,
            api_key: None,
            retry: 0,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("version", &self.version)
            .field("app_name", &self.app_name)
            .field("user_id", &self.user_id)
            .field("sender_id", &self.sender_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("retry", &self.retry)
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from `CITCALL_*` environment variables.
    ///
    /// Recognized variables: `CITCALL_API_URL`, `CITCALL_VERSION`, `CITCALL_APP_NAME`,
    /// `CITCALL_USER_ID`, `CITCALL_SENDER_ID`, `CITCALL_API_KEY` and `CITCALL_RETRY`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(api_url) = lookup("CITCALL_API_URL") {
            config.api_url = api_url;
        }
        if let Some(version) = lookup("CITCALL_VERSION") {
            config.version = version;
        }
        config.app_name = lookup("CITCALL_APP_NAME");
        config.user_id = lookup("CITCALL_USER_ID");
        config.sender_id = lookup("CITCALL_SENDER_ID");
        config.api_key = lookup("CITCALL_API_KEY");
        if let Some(retry) = lookup("CITCALL_RETRY") {
            config.retry = retry
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidRetry { value: retry })?;
        }
        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_sender_id(mut self, sender_id: impl Into<String>) -> Self {
        self.sender_id = Some(sender_id.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Number of delivery attempts the gateway should make (`limit_try`).
    ///
    /// Only `1..=20` is forwarded; `0` and larger values leave the field out.
    pub fn with_retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.sender_id.as_deref()
    }

    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// The retry hint to forward as `limit_try`, if any.
    pub fn limit_try(&self) -> Option<u32> {
        (1..=MAX_RETRY).contains(&self.retry).then_some(self.retry)
    }

    /// Check that everything a request needs is present.
    pub(crate) fn credentials(&self) -> Result<Credentials<'_>, ConfigError> {
        let api_url = non_empty(Some(self.api_url.as_str())).ok_or(ConfigError::Missing {
            field: "API url",
        })?;
        let user_id =
            non_empty(self.user_id.as_deref()).ok_or(ConfigError::Missing { field: "user id" })?;
        let api_key =
            non_empty(self.api_key.as_deref()).ok_or(ConfigError::Missing { field: "API key" })?;

        Ok(Credentials {
            api_url,
            version: self.version.trim(),
            user_id,
            api_key,
            sender_id: non_empty(self.sender_id.as_deref()).unwrap_or(user_id),
            app_name: self.app_name.as_deref().unwrap_or_default(),
            limit_try: self.limit_try(),
        })
    }
}

/// Borrowed view of a [`Config`] that passed the completeness check.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Credentials<'a> {
    pub api_url: &'a str,
    pub version: &'a str,
    pub user_id: &'a str,
    pub api_key: &'a str,
    pub sender_id: &'a str,
    pub app_name: &'a str,
    pub limit_try: Option<u32>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
