use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidMsisdn { input: String },
    GatewayOutOfRange { min: u8, max: u8, actual: i64 },
    TokenLength { min: usize, max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidMsisdn { input } => write!(f, "invalid MSISDN number: {input}"),
            Self::GatewayOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "invalid gateway number: {actual} (expected {min}..={max})"
                )
            }
            Self::TokenLength { min, max, actual } => {
                write!(
                    f,
                    "OTP token length out of range: {actual} (expected {min}..={max})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "msisdn" };
        assert_eq!(err.to_string(), "msisdn must not be empty");

        let err = ValidationError::InvalidMsisdn {
            input: "123".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid MSISDN number: 123");

        let err = ValidationError::GatewayOutOfRange {
            min: 0,
            max: 5,
            actual: 6,
        };
        assert_eq!(err.to_string(), "invalid gateway number: 6 (expected 0..=5)");

        let err = ValidationError::TokenLength {
            min: 4,
            max: 8,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "OTP token length out of range: 3 (expected 4..=8)"
        );
    }
}
