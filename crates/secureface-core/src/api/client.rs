use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{Reply, TransportError};
use crate::config::Config;
use crate::model::{Endpoint, FormData};

/// Client for the recognition service.
///
/// Cheap to clone; the runtime hands a clone to every spawned request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// A trailing `/` is trimmed so endpoint paths join cleanly.
    ///
    /// # Errors
    /// Returns an error if the base URL is not an http(s) URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed =
            Url::parse(base_url).with_context(|| format!("Invalid API base URL '{base_url}'"))?;
        anyhow::ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "API base URL must use http or https, got '{}'",
            parsed.scheme()
        );

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the effective configuration.
    ///
    /// # Errors
    /// See [`ApiClient::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Sends one request and decodes the JSON reply.
    ///
    /// `/register` carries the form as its JSON body; `/login` has no body.
    /// The body is decoded before the status is looked at, so a non-JSON
    /// reply is a transport failure whatever its status.
    ///
    /// # Errors
    /// Returns a [`TransportError`] when no decodable reply was received.
    pub async fn send(&self, endpoint: Endpoint, form: &FormData) -> Result<Reply, TransportError> {
        let url = self.endpoint_url(endpoint);
        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json");
        if endpoint == Endpoint::Register {
            request = request.json(form);
        }

        debug!(%url, "sending request");
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| TransportError::InvalidBody(e.to_string()))?;

        debug!(%url, status = status.as_u16(), "received reply");
        Ok(Reply::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = ApiClient::new("http://127.0.0.1:5000/", None).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(
            client.endpoint_url(Endpoint::Register),
            "http://127.0.0.1:5000/register"
        );
    }

    #[test]
    fn test_new_rejects_non_http_urls() {
        assert!(ApiClient::new("not a url", None).is_err());
        assert!(ApiClient::new("ftp://example.com", None).is_err());
    }

    #[tokio::test]
    async fn test_register_posts_form_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"name": "Ann", "email": "ann@x.com"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"message": "User Ann registered successfully!"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let reply = client
            .send(Endpoint::Register, &FormData::new("Ann", "ann@x.com"))
            .await
            .unwrap();

        assert_eq!(reply.status, reqwest::StatusCode::CREATED);
        assert_eq!(reply.message(), Some("User Ann registered successfully!"));
    }

    #[tokio::test]
    async fn test_login_sends_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "ann"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let reply = client
            .send(Endpoint::Login, &FormData::new("ignored", "ignored@x.com"))
            .await
            .unwrap();
        assert_eq!(reply.username().as_deref(), Some("ann"));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_still_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Face not recognized"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let reply = client
            .send(Endpoint::Login, &FormData::default())
            .await
            .unwrap();

        assert!(!reply.is_success());
        assert_eq!(reply.error_message(), Some("Face not recognized"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), None).unwrap();
        let err = client
            .send(Endpoint::Login, &FormData::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::InvalidBody(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = ApiClient::new(&format!("http://127.0.0.1:{port}"), None).unwrap();
        let err = client
            .send(Endpoint::Login, &FormData::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Unreachable(_)), "{err:?}");
        assert_eq!(err.kind(), "unreachable");
    }

    #[tokio::test]
    async fn test_slow_reply_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"username": "ann"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri(), Some(Duration::from_millis(100))).unwrap();
        let err = client
            .send(Endpoint::Login, &FormData::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Timeout(_)), "{err:?}");
    }
}
