//! `HttpClient` adapter backed by reqwest.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use converter_types::{HttpClient, HttpResponse, RequestError, TransportError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default transport. Timeouts and proxies are whatever the wrapped
/// `reqwest::Client` is configured with.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Builds a transport with a fresh client.
    pub fn new() -> Result<Self, RequestError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                RequestError::FailedToAccessNetworkManager
            })?;
        Ok(Self { http })
    }

    /// Wraps an already configured client.
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpClient for ReqwestTransport {
    async fn get(&self, url: &Url, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let mut req = self.http.get(url.clone());
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
