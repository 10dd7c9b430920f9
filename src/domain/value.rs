use std::sync::LazyLock;

use phonenumber::country;
use regex::Regex;

use crate::domain::validation::ValidationError;

static INTERNATIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^62[1-9][0-9]{1,2}[0-9]{6,8}\n?\z").expect("static regex should not panic")
});
static INTERNATIONAL_PLUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+62[1-9][0-9]{1,2}[0-9]{6,8}\n?\z").expect("static regex should not panic")
});
static LOCAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0[1-9][0-9]{1,2}[0-9]{6,8}\n?\z").expect("static regex should not panic")
});

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Indonesian MSISDN in the local format expected by Citcall (`msisdn`).
///
/// Invariant: matches `0[1-9][0-9]{1,2}[0-9]{6,8}`, i.e. 9 to 12 digits starting with `0`.
///
/// Accepted inputs are the local form (`081234567890`), the international form without
/// a plus (`6281234567890`) and with one (`+6281234567890`). All three normalize to the
/// same local value. Spaces and dashes inside the number are not stripped; a single
/// trailing newline is tolerated and trimmed away.
pub struct Msisdn(String);

impl Msisdn {
    /// Form field name used by Citcall (`msisdn`).
    pub const FIELD: &'static str = "msisdn";

    /// Normalize `raw` into the local format, or reject it.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let local = if INTERNATIONAL.is_match(&raw) {
            format!("0{}", &raw[2..])
        } else if INTERNATIONAL_PLUS.is_match(&raw) {
            format!("0{}", &raw[3..])
        } else {
            raw.clone()
        };

        if !LOCAL.is_match(&local) {
            return Err(ValidationError::InvalidMsisdn { input: raw });
        }
        Ok(Self(local.trim().to_owned()))
    }

    /// Borrow the normalized local number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<PhoneNumber> for Msisdn {
    type Error = ValidationError;

    /// Convert a parsed phone number through its E.164 form; only `+62` numbers convert.
    fn try_from(value: PhoneNumber) -> Result<Self, Self::Error> {
        Self::new(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Use this when the input comes in free-form notation (`+62 812-3456-7890`) and
/// convert it into [`Msisdn`] afterwards.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Msisdn::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidMsisdn { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`), sent exactly as given.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Citcall (`text`).
    pub const FIELD: &'static str = "text";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One-time password issued through `smsotp` (`token`).
///
/// Invariant: `4..=8` characters after trimming.
pub struct OtpToken(String);

impl OtpToken {
    /// Form field name used by Citcall (`token`).
    pub const FIELD: &'static str = "token";

    /// Minimum token length.
    pub const MIN_LEN: usize = 4;
    /// Maximum token length.
    pub const MAX_LEN: usize = 8;

    /// Create a validated token.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(ValidationError::TokenLength {
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the trimmed token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Code typed in by the user when verifying an OTP (`token`).
///
/// Only trimmed; the gateway decides whether it matches.
pub struct VerificationCode(String);

impl VerificationCode {
    /// Form field name used by Citcall (`token`).
    pub const FIELD: &'static str = "token";

    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(value.trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Transaction id returned by `smsotp` and echoed back to `verify` (`trxid`).
///
/// Passed through untouched; the gateway rejects unknown ids.
pub struct TrxId(String);

impl TrxId {
    /// Form field name used by Citcall (`trxid`).
    pub const FIELD: &'static str = "trxid";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the transaction id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Missed-call gateway selector (`gateway`).
///
/// Invariant: `0..=5`.
pub struct GatewayNumber(u8);

impl GatewayNumber {
    /// Form field name used by Citcall (`gateway`).
    pub const FIELD: &'static str = "gateway";

    /// Minimum gateway number.
    pub const MIN: u8 = 0;
    /// Maximum gateway number.
    pub const MAX: u8 = 5;

    /// Create a validated gateway number.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match u8::try_from(value) {
            Ok(number) if (Self::MIN..=Self::MAX).contains(&number) => Ok(Self(number)),
            _ => Err(ValidationError::GatewayOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            }),
        }
    }

    /// Get the underlying gateway number.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for GatewayNumber {
    fn default() -> Self {
        Self(1)
    }
}
