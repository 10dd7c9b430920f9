use serde_json::{Map, Value};

/// Successful gateway reply.
///
/// Citcall answers with a JSON object carrying at least `rc` (result code) and `info`.
/// Bodies that are not JSON are kept as a JSON string so nothing is lost.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    body: Value,
}

impl GatewayResponse {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Result code reported by the gateway, whether sent as a number or a numeric string.
    pub fn rc(&self) -> Option<i64> {
        value_as_i64(self.body.get("rc")?)
    }

    pub fn info(&self) -> Option<&str> {
        self.body.get("info").and_then(Value::as_str)
    }

    /// Transaction id, present on `smsotp` replies and needed for `verify`.
    pub fn trxid(&self) -> Option<&str> {
        self.body.get("trxid").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

/// Message carried by [`CallbackPayload::default`].
pub const INVALID_CALLBACK_MESSAGE: &str = "invalid callback response";

/// Body of an inbound status notification pushed by the gateway.
///
/// Loosely typed on purpose: the set of keys differs between SMS, call and OTP callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackPayload(Map<String, Value>);

impl CallbackPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn rc(&self) -> Option<i64> {
        value_as_i64(self.0.get("rc")?)
    }

    pub fn msg(&self) -> Option<&str> {
        self.0.get("msg").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `true` when this is the `{rc: 0, msg: "invalid callback response"}` fallback.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl Default for CallbackPayload {
    fn default() -> Self {
        let mut fields = Map::new();
        fields.insert("rc".to_owned(), Value::from(0));
        fields.insert("msg".to_owned(), Value::from(INVALID_CALLBACK_MESSAGE));
        Self(fields)
    }
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
