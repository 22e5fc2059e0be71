//! HTTP transport port.
//!
//! The request helper only ever needs a GET with headers. Implementations can
//! wrap reqwest, another HTTP stack, or return scripted responses in tests.

use url::Url;

use crate::error::TransportError;

/// Status and body of an HTTP response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Port trait for the HTTP transport.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs one GET request.
    ///
    /// Returns `Err` only when no response was received (DNS, connect, timeout,
    /// reset). Non-2xx statuses are returned as `Ok`.
    async fn get(
        &self,
        url: &Url,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError>;
}

#[async_trait::async_trait]
impl<T: HttpClient + ?Sized> HttpClient for std::sync::Arc<T> {
    async fn get(
        &self,
        url: &Url,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        (**self).get(url, headers).await
    }
}
