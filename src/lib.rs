//! Typed Rust client for the Citcall SMS, missed-call and OTP gateway.
//!
//! The crate is split into a domain layer of validated types (MSISDN normalization,
//! OTP token bounds, gateway selector), a transport layer for wire-format details
//! (form encoding, authorization header, response classification), and a small
//! client layer orchestrating requests.
//!
//! ```rust,no_run
//! use citcall::{CitcallClient, Config, MessageText, Msisdn, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), citcall::CitcallError> {
//!     let config = Config::new().with_user_id("...").with_api_key("...");
//!     let client = CitcallClient::new(config)?;
//!     let request = SendSms::new(Msisdn::new("+6281234567890")?, MessageText::new("hello"));
//!     let _resp = client.send(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{CitcallClient, CitcallClientBuilder, CitcallError};
pub use config::{Config, ConfigError};
pub use domain::{
    Call, CallOptions, CallbackPayload, GatewayNumber, GatewayResponse, MessageText, Msisdn,
    OtpToken, PhoneNumber, SendOtp, SendOtpOptions, SendSms, TrxId, ValidationError,
    VerificationCode, VerifyOtp,
};
pub use transport::HttpResponse;
