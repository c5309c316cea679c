//! HTTP transport: one request in, one normalized outcome out.
//!
//! [`HttpTransport`] wraps a [`reqwest::Client`] and collapses the many ways a
//! request can go wrong into the three-variant [`FetchError`]:
//!
//! - [`FetchError::Network`]: the call failed before any status was known
//!   (connect error, body read error)
//! - [`FetchError::Status`]: a response arrived with a non-2xx status
//! - [`FetchError::Decode`]: the body of a successful response was not valid
//!   JSON (or a POST body failed to serialize)
//!
//! Success means the status family is 2xx, checked as `status / 100 == 2`
//! rather than against a list of exact codes. Decoding happens only after the
//! status check passes.
//!
//! The transport issues exactly one outbound call per invocation. It does not
//! retry, does not log, and holds no state beyond the client's connection pool.

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

/// Shared client so every default transport reuses one connection pool.
static SHARED_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Why a request produced no usable payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed before a status code was obtained.
    #[error("{0}")]
    Network(String),
    /// A response arrived, but outside the 2xx family.
    #[error("Error. Status code: {0}")]
    Status(u16),
    /// The response body (or request body) was not valid JSON.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// The normalized result of one transport call: decoded JSON or a [`FetchError`].
///
/// Produced once per request and consumed exactly once by the caller.
pub type RequestOutcome = Result<serde_json::Value, FetchError>;

/// Thin wrapper over [`reqwest::Client`] producing [`RequestOutcome`]s.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            client: SHARED_CLIENT.clone(),
        }
    }
}

impl HttpTransport {
    /// Build a transport around an explicit client (e.g. one with custom TLS
    /// or proxy settings).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issue a single GET request and normalize the outcome.
    pub async fn get(&self, url: &str) -> RequestOutcome {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Self::read_payload(response).await
    }

    /// Issue a single POST request with a JSON-serialized body.
    ///
    /// Header pairs are attached in the order supplied. Order across keys
    /// carries no meaning, but it is deterministic for a given call.
    pub async fn post<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> RequestOutcome {
        let payload = serde_json::to_string(body)?;

        let mut request = self.client.post(url).body(payload);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Self::read_payload(response).await
    }

    /// Status check first, then body read, then JSON decode.
    async fn read_payload(response: reqwest::Response) -> RequestOutcome {
        let status = response.status().as_u16();
        if status / 100 != 2 {
            return Err(FetchError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_success_decodes_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": []})))
            .mount(&server)
            .await;

        let transport = HttpTransport::default();
        let outcome = transport.get(&format!("{}/payload", server.uri())).await;

        let payload = outcome.unwrap();
        assert!(payload["articles"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_accepts_whole_2xx_family() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"created": true})))
            .mount(&server)
            .await;

        let transport = HttpTransport::default();
        let outcome = transport.get(&server.uri()).await;

        assert_eq!(outcome.unwrap()["created"], json!(true));
    }

    #[tokio::test]
    async fn test_get_non_2xx_yields_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let transport = HttpTransport::default();
        let err = transport.get(&server.uri()).await.unwrap_err();

        assert!(matches!(err, FetchError::Status(404)));
        assert_eq!(err.to_string(), "Error. Status code: 404");
    }

    #[tokio::test]
    async fn test_get_server_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let transport = HttpTransport::default();
        let err = transport.get(&server.uri()).await.unwrap_err();

        assert!(matches!(err, FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_get_malformed_body_yields_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let transport = HttpTransport::default();
        let err = transport.get(&server.uri()).await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_connection_refused_yields_network_error() {
        // Nothing listens on port 1.
        let transport = HttpTransport::default();
        let err = transport.get("http://127.0.0.1:1/unreachable").await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_post_sends_json_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header("x-api-key", "secret"))
            .and(body_json(json!({"q": "rust"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::default();
        let outcome = transport
            .post(
                &format!("{}/submit", server.uri()),
                &json!({"q": "rust"}),
                &[("x-api-key".to_string(), "secret".to_string())],
            )
            .await;

        assert_eq!(outcome.unwrap()["ok"], json!(true));
    }

    #[tokio::test]
    async fn test_post_non_2xx_yields_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let transport = HttpTransport::default();
        let err = transport
            .post(&server.uri(), &json!({}), &[])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error. Status code: 403");
    }
}
