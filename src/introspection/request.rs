/// Sending the introspection request.
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use tracing::{debug, info, warn};

use super::errors::IntrospectError;

/// Default `User-Agent`, replaced when the caller passes one with `-H`.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the blocking HTTP client used for the single request.
///
/// # Errors
///
/// Returns `IntrospectError::Request` if the TLS backend cannot initialize.
pub fn build_client() -> Result<Client, IntrospectError> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Split a raw `"Key: Value"` string into a typed header pair.
///
/// # Errors
///
/// Returns `IntrospectError::InvalidHeader` when there is no `:` or the name or
/// value contains bytes HTTP does not allow.
pub fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), IntrospectError> {
    let invalid = |reason: String| IntrospectError::InvalidHeader {
        header: raw.to_owned(),
        reason,
    };

    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| invalid("expected \"Key: Value\"".to_owned()))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let value = HeaderValue::from_str(value.trim()).map_err(|e| invalid(e.to_string()))?;
    Ok((name, value))
}

/// POST `body` to `endpoint` once and return the response body as text.
///
/// `Content-Type: application/json` is always set; `headers` are appended
/// after it. Values sharing a name keep their given order and header names go
/// out in the order each first appears. Non-2xx responses are returned like
/// any other body.
///
/// # Errors
///
/// Returns `IntrospectError::InvalidHeader` before sending when a header is
/// malformed, and `IntrospectError::Request` on any transport failure.
pub fn execute(
    client: &Client,
    endpoint: &str,
    headers: &[String],
    body: &str,
) -> Result<String, IntrospectError> {
    let parsed = headers
        .iter()
        .map(|h| parse_header(h))
        .collect::<Result<Vec<_>, _>>()?;

    let mut request = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .body(body.to_owned());
    for (name, value) in parsed {
        request = request.header(name, value);
    }

    info!("Querying {endpoint}");
    let response = request.send()?;

    let status = response.status();
    debug!(%status, "response received");
    if !status.is_success() {
        warn!(%status, "endpoint returned a non-success status");
    }

    Ok(response.text()?)
}
