use serde_json::Value;

/// Raw HTTP reply as handed back by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// 2xx with a body; JSON is decoded, anything else is kept as a string value.
    Success(Value),
    /// The gateway answered with a non-2xx status.
    Failure { code: u16, message: String },
    /// 2xx without a body.
    Empty,
}

pub fn classify_response(response: &HttpResponse) -> ResponseOutcome {
    let body = response.body.trim();

    if !(200..=299).contains(&response.status) {
        let message = if body.is_empty() {
            reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("unknown error")
                .to_owned()
        } else {
            body.to_owned()
        };
        return ResponseOutcome::Failure {
            code: response.status,
            message,
        };
    }

    if body.is_empty() {
        return ResponseOutcome::Empty;
    }

    let payload =
        serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::String(body.to_owned()));
    ResponseOutcome::Success(payload)
}
