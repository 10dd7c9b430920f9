//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Call, CallOptions, SendOtp, SendOtpOptions, SendSms, VerifyOtp};
pub use response::{CallbackPayload, GatewayResponse, INVALID_CALLBACK_MESSAGE};
pub use validation::ValidationError;
pub use value::{
    GatewayNumber, MessageText, Msisdn, OtpToken, PhoneNumber, TrxId, VerificationCode,
};
