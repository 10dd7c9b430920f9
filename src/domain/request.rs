use crate::domain::value::{
    GatewayNumber, MessageText, Msisdn, OtpToken, TrxId, VerificationCode,
};

/// Plain SMS delivered through `sms`.
#[derive(Debug, Clone)]
pub struct SendSms {
    msisdn: Msisdn,
    text: MessageText,
}

impl SendSms {
    pub fn new(msisdn: Msisdn, text: MessageText) -> Self {
        Self { msisdn, text }
    }

    pub fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CallOptions {
    pub gateway: GatewayNumber,
    /// Use `asynccall` instead of waiting for the call to be placed.
    pub asynchronous: bool,
}

/// Missed-call verification ping through `call` or `asynccall`.
#[derive(Debug, Clone)]
pub struct Call {
    msisdn: Msisdn,
    options: CallOptions,
}

impl Call {
    pub fn new(msisdn: Msisdn, options: CallOptions) -> Self {
        Self { msisdn, options }
    }

    pub fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }

    pub fn options(&self) -> &CallOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SendOtpOptions {
    /// Validity window in seconds (`valid_time`); `0` leaves it to the gateway.
    pub expires: u32,
}

/// OTP SMS issued through `smsotp`.
#[derive(Debug, Clone)]
pub struct SendOtp {
    msisdn: Msisdn,
    token: OtpToken,
    options: SendOtpOptions,
}

impl SendOtp {
    pub fn new(msisdn: Msisdn, token: OtpToken, options: SendOtpOptions) -> Self {
        Self {
            msisdn,
            token,
            options,
        }
    }

    pub fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }

    pub fn token(&self) -> &OtpToken {
        &self.token
    }

    pub fn options(&self) -> &SendOtpOptions {
        &self.options
    }
}

/// Check of a code against a previously issued OTP through `verify`.
#[derive(Debug, Clone)]
pub struct VerifyOtp {
    trx_id: TrxId,
    msisdn: Msisdn,
    token: VerificationCode,
}

impl VerifyOtp {
    pub fn new(trx_id: TrxId, msisdn: Msisdn, token: VerificationCode) -> Self {
        Self {
            trx_id,
            msisdn,
            token,
        }
    }

    pub fn trx_id(&self) -> &TrxId {
        &self.trx_id
    }

    pub fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }

    pub fn token(&self) -> &VerificationCode {
        &self.token
    }
}
