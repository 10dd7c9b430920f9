use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use url::Url;

use crate::config::{ConfigError, Credentials};

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Fully assembled outbound call: target url, form params and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRequest {
    pub url: Url,
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

/// Assemble `{api_url}/{version}/{path}` with the authorization header and retry hint.
pub fn build_gateway_request(
    credentials: &Credentials<'_>,
    path: &str,
    mut params: Vec<(String, String)>,
) -> Result<GatewayRequest, ConfigError> {
    let url = endpoint_url(credentials.api_url, credentials.version, path)?;
    super::form::push_limit_try(&mut params, credentials.limit_try);

    Ok(GatewayRequest {
        url,
        params,
        headers: vec![(
            AUTHORIZATION_HEADER.to_owned(),
            authorization(credentials.user_id, credentials.api_key),
        )],
    })
}

/// Base64 of `user_id:api_key`, sent as-is (no `Basic ` scheme prefix).
pub fn authorization(user_id: &str, api_key: &str) -> String {
    BASE64.encode(format!("{user_id}:{api_key}"))
}

fn endpoint_url(api_url: &str, version: &str, path: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(api_url).map_err(|err| ConfigError::InvalidApiUrl {
        value: api_url.to_owned(),
        reason: err.to_string(),
    })?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| ConfigError::InvalidApiUrl {
                value: api_url.to_owned(),
                reason: "url cannot be a base".to_owned(),
            })?;
        segments
            .pop_if_empty()
            .extend(version.split('/').filter(|segment| !segment.is_empty()))
            .push(path);
    }

    Ok(url)
}
