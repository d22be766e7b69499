//! Authenticated HTTP transport.
//!
//! Builds one outbound call (method, URL, bearer token, optional JSON
//! body), sends it through the shared connection pool and classifies
//! the outcome. Exactly one attempt is made per call; retry policy, if
//! any, belongs to the caller.

use recona_core::{ReconaError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, Response};
use serde::Serialize;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Authorization header value for the given token. An empty token
/// produces the literal `Bearer` with the trailing space trimmed.
fn bearer(token: &str) -> String {
    format!("Bearer {token}").trim_end().to_string()
}

/// Send one authenticated request and classify the outcome.
///
/// - body serialization failure → [`ReconaError::Encoding`]
/// - network-level failure → [`ReconaError::Transport`]
/// - HTTP status >= 400 → [`ReconaError::Api`] carrying the full
///   response body read eagerly
/// - otherwise the still-open response, owned by the caller
pub(crate) async fn send<B: Serialize + ?Sized>(
    http: &HttpClient,
    method: Method,
    url: &str,
    token: &str,
    body: Option<&B>,
) -> Result<Response> {
    let mut request = http
        .request(method, url)
        .header(AUTHORIZATION, bearer(token))
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
        .header(ACCEPT, CONTENT_TYPE_JSON);

    if let Some(body) = body {
        let payload = serde_json::to_vec(body).map_err(ReconaError::Encoding)?;
        request = request.body(payload);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ReconaError::Transport(e.to_string()))?;

    let status = response.status();
    if status.as_u16() >= 400 {
        return Err(match response.text().await {
            Ok(body) => ReconaError::Api {
                status: status.as_u16(),
                body,
            },
            Err(e) => body_read_error(status.as_u16(), e),
        });
    }

    Ok(response)
}

/// The error body could not be read off the wire. The status is folded
/// into the message since there is no body to carry it with.
fn body_read_error(status: u16, err: impl std::fmt::Display) -> ReconaError {
    ReconaError::Transport(format!(
        "API error {status}: failed to read response body: {err}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefixes_token() {
        assert_eq!(bearer("secret-token"), "Bearer secret-token");
    }

    #[test]
    fn bearer_trims_trailing_space_for_empty_token() {
        assert_eq!(bearer(""), "Bearer");
    }

    #[test]
    fn unreadable_error_body_reports_the_status_and_cause() {
        let err = body_read_error(502, "connection reset by peer");
        match err {
            ReconaError::Transport(msg) => {
                assert_eq!(
                    msg,
                    "API error 502: failed to read response body: connection reset by peer"
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
