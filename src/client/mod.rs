//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{Config, ConfigError, Credentials};
use crate::domain::{
    Call, CallbackPayload, GatewayResponse, SendOtp, SendSms, ValidationError, VerifyOtp,
};
use crate::transport::{
    GatewayRequest, HttpResponse, ResponseOutcome, SEND_OTP_PATH, SEND_SMS_PATH,
    VERIFY_OTP_PATH,
};

/// Connect timeout applied unless the builder overrides it.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        request: &'a GatewayRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        request: &'a GatewayRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .post(request.url.clone())
                .form(&request.params);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`CitcallClient`].
///
/// [`CitcallError::Config`] and [`CitcallError::Validation`] are raised before any
/// network call. The other variants describe what happened on the wire.
pub enum CitcallError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway rejected the request with a non-2xx status.
    #[error("gateway error {code}: {message}")]
    Gateway { code: u16, message: String },

    /// The gateway answered without a body.
    #[error("gateway returned an empty response")]
    Unavailable,

    /// A required setting is missing or unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`CitcallClient`].
///
/// Use this when you need to customize timeouts or the user-agent, or prefer to set
/// credentials one by one instead of passing a [`Config`].
pub struct CitcallClientBuilder {
    config: Config,
    connect_timeout: Duration,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl Default for CitcallClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CitcallClientBuilder {
    /// Create a builder with the default configuration and a 500 ms connect timeout.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: None,
            user_agent: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.config = self.config.with_api_url(api_url);
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.with_version(version);
        self
    }

    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.config = self.config.with_app_name(app_name);
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.config = self.config.with_user_id(user_id);
        self
    }

    pub fn sender_id(mut self, sender_id: impl Into<String>) -> Self {
        self.config = self.config.with_sender_id(sender_id);
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.with_api_key(api_key);
        self
    }

    pub fn retry(mut self, retry: u32) -> Self {
        self.config = self.config.with_retry(retry);
        self
    }

    /// Override the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`CitcallClient`].
    ///
    /// Credentials are not checked here; requests fail with [`CitcallError::Config`]
    /// until they are set.
    pub fn build(self) -> Result<CitcallClient, CitcallError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.connect_timeout);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| CitcallError::Transport(Box::new(err)))?;

        Ok(CitcallClient::from_parts(
            self.config,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

#[derive(Clone)]
/// High-level Citcall gateway client.
///
/// Every operation checks that the API url, user id and API key are set, encodes the
/// typed request as a form, and posts it to `{api_url}/{version}/{operation}` with an
/// `Authorization` header carrying base64 of `user_id:api_key`.
///
/// The raw reply of the last call is kept for diagnostics, see
/// [`CitcallClient::last_response`].
pub struct CitcallClient {
    config: Arc<Config>,
    http: Arc<dyn HttpTransport>,
    last_response: Arc<Mutex<Option<HttpResponse>>>,
}

impl fmt::Debug for CitcallClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CitcallClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CitcallClient {
    /// Create a client from `config` with the default transport settings.
    ///
    /// For more customization, use [`CitcallClient::builder`].
    pub fn new(config: Config) -> Result<Self, CitcallError> {
        CitcallClientBuilder::new().config(config).build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> CitcallClientBuilder {
        CitcallClientBuilder::new()
    }

    fn from_parts(config: Config, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            http,
            last_response: Arc::new(Mutex::new(None)),
        }
    }

    /// Derive a client using `config`, sharing this client's HTTP connection pool.
    ///
    /// The derived client starts with no recorded response.
    pub fn with_config(&self, config: Config) -> Self {
        Self::from_parts(config, Arc::clone(&self.http))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Raw HTTP reply of the most recent call, or `None` if there was none or the
    /// transport failed before a reply arrived.
    pub fn last_response(&self) -> Option<HttpResponse> {
        self.last_response
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
    }

    /// Send a plain SMS (`sms`).
    ///
    /// `senderid` is the configured sender id, or the user id when none is set.
    pub async fn send(&self, request: SendSms) -> Result<GatewayResponse, CitcallError> {
        let credentials = self.config.credentials()?;
        let params = crate::transport::encode_send_sms_form(&request, credentials.sender_id);
        self.execute(&credentials, SEND_SMS_PATH, params).await
    }

    /// Place a missed-call verification ping (`call`, or `asynccall` when
    /// [`CallOptions::asynchronous`](crate::CallOptions::asynchronous) is set).
    pub async fn call(&self, request: Call) -> Result<GatewayResponse, CitcallError> {
        let credentials = self.config.credentials()?;
        let params = crate::transport::encode_call_form(&request);
        self.execute(&credentials, crate::transport::call_path(&request), params)
            .await
    }

    /// Send an OTP SMS (`smsotp`).
    ///
    /// The reply carries the `trxid` needed by [`CitcallClient::verify_otp`].
    pub async fn send_otp(&self, request: SendOtp) -> Result<GatewayResponse, CitcallError> {
        let credentials = self.config.credentials()?;
        let params = crate::transport::encode_send_otp_form(
            &request,
            credentials.sender_id,
            credentials.app_name,
        );
        self.execute(&credentials, SEND_OTP_PATH, params).await
    }

    /// Verify a code against a previously issued OTP (`verify`).
    pub async fn verify_otp(&self, request: VerifyOtp) -> Result<GatewayResponse, CitcallError> {
        let credentials = self.config.credentials()?;
        let params = crate::transport::encode_verify_otp_form(&request);
        self.execute(&credentials, VERIFY_OTP_PATH, params).await
    }

    /// Decode the raw body of a callback the gateway pushed to your server.
    ///
    /// No request is made. An empty or well-formed JSON body yields
    /// [`CallbackPayload::default`]; a body that fails to parse yields an empty payload.
    pub fn get_callback(&self, body: impl AsRef<[u8]>) -> CallbackPayload {
        crate::transport::decode_callback_body(body.as_ref())
    }

    async fn execute(
        &self,
        credentials: &Credentials<'_>,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<GatewayResponse, CitcallError> {
        let request = crate::transport::build_gateway_request(credentials, path, params)?;
        debug!(operation = path, url = %request.url, "sending gateway request");

        let response = match self.http.post_form(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(operation = path, error = %err, "gateway transport failed");
                self.record(None);
                return Err(CitcallError::Transport(err));
            }
        };
        debug!(operation = path, status = response.status, "gateway responded");

        let outcome = crate::transport::classify_response(&response);
        self.record(Some(response));

        match outcome {
            ResponseOutcome::Success(body) => Ok(GatewayResponse::new(body)),
            ResponseOutcome::Failure { code, message } => {
                warn!(operation = path, code, %message, "gateway rejected request");
                Err(CitcallError::Gateway { code, message })
            }
            ResponseOutcome::Empty => {
                warn!(operation = path, "gateway returned an empty body");
                Err(CitcallError::Unavailable)
            }
        }
    }

    fn record(&self, response: Option<HttpResponse>) {
        if let Ok(mut slot) = self.last_response.lock() {
            *slot = response;
        }
    }
}
