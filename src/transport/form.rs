use crate::domain::{
    Call, GatewayNumber, MessageText, Msisdn, OtpToken, SendOtp, SendSms, TrxId,
    VerificationCode, VerifyOtp,
};

pub const SEND_SMS_PATH: &str = "sms";
pub const CALL_PATH: &str = "call";
pub const ASYNC_CALL_PATH: &str = "asynccall";
pub const SEND_OTP_PATH: &str = "smsotp";
pub const VERIFY_OTP_PATH: &str = "verify";

const SENDER_ID_FIELD: &str = "senderid";
const VALID_TIME_FIELD: &str = "valid_time";
const LIMIT_TRY_FIELD: &str = "limit_try";

pub fn encode_send_sms_form(request: &SendSms, sender_id: &str) -> Vec<(String, String)> {
    vec![
        (SENDER_ID_FIELD.to_owned(), sender_id.to_owned()),
        (
            Msisdn::FIELD.to_owned(),
            request.msisdn().as_str().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
    ]
}

pub fn call_path(request: &Call) -> &'static str {
    if request.options().asynchronous {
        ASYNC_CALL_PATH
    } else {
        CALL_PATH
    }
}

pub fn encode_call_form(request: &Call) -> Vec<(String, String)> {
    vec![
        (
            Msisdn::FIELD.to_owned(),
            request.msisdn().as_str().to_owned(),
        ),
        (
            GatewayNumber::FIELD.to_owned(),
            request.options().gateway.value().to_string(),
        ),
    ]
}

/// OTP text is `"{token} is your {app_name}OTP code."`; there is no space after the app name.
pub fn encode_send_otp_form(
    request: &SendOtp,
    sender_id: &str,
    app_name: &str,
) -> Vec<(String, String)> {
    let token = request.token().as_str();
    let mut params = vec![
        (
            Msisdn::FIELD.to_owned(),
            request.msisdn().as_str().to_owned(),
        ),
        (SENDER_ID_FIELD.to_owned(), sender_id.to_owned()),
        (OtpToken::FIELD.to_owned(), token.to_owned()),
        (
            MessageText::FIELD.to_owned(),
            format!("{token} is your {app_name}OTP code."),
        ),
    ];

    let expires = request.options().expires;
    if expires > 0 {
        params.push((VALID_TIME_FIELD.to_owned(), expires.to_string()));
    }

    params
}

pub fn encode_verify_otp_form(request: &VerifyOtp) -> Vec<(String, String)> {
    vec![
        (TrxId::FIELD.to_owned(), request.trx_id().as_str().to_owned()),
        (
            Msisdn::FIELD.to_owned(),
            request.msisdn().as_str().to_owned(),
        ),
        (
            VerificationCode::FIELD.to_owned(),
            request.token().as_str().to_owned(),
        ),
    ]
}

pub fn push_limit_try(params: &mut Vec<(String, String)>, limit_try: Option<u32>) {
    if let Some(limit_try) = limit_try {
        params.push((LIMIT_TRY_FIELD.to_owned(), limit_try.to_string()));
    }
}
