use serde_json::{Map, Value};

use crate::domain::CallbackPayload;

/// Decode the raw body of a gateway callback.
///
/// The decision is inverted relative to what the fallback suggests: an empty body
/// or a body that parses as JSON yields [`CallbackPayload::default`], and only a
/// body that fails to parse replaces it, with an empty payload since nothing was
/// decoded.
// TODO: return the parsed object once Citcall confirms which branch is intended.
pub fn decode_callback_body(body: &[u8]) -> CallbackPayload {
    if body.is_empty() {
        tracing::debug!("empty callback body, using default payload");
        return CallbackPayload::default();
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(_) => {
            tracing::debug!("callback body parsed, keeping default payload");
            CallbackPayload::default()
        }
        Err(err) => {
            tracing::debug!(error = %err, "callback body is not valid JSON");
            CallbackPayload::new(Map::new())
        }
    }
}
