//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod callback;
mod form;
mod outcome;
mod request;

pub use callback::decode_callback_body;
pub use form::{
    SEND_OTP_PATH, SEND_SMS_PATH, VERIFY_OTP_PATH, call_path, encode_call_form,
    encode_send_otp_form, encode_send_sms_form, encode_verify_otp_form,
};
pub use outcome::{HttpResponse, ResponseOutcome, classify_response};
pub use request::{GatewayRequest, build_gateway_request};
