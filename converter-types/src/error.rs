//! Error types for the currency converter.

/// Failure of a rate or conversion request.
///
/// Carries only its kind. Every public operation reports exactly one of these
/// through its `Result`; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RequestError {
    #[error("Failed to build a request URL from the configured endpoint")]
    FailedToConfigureURL,

    #[error("Failed to get a response from the exchange rate provider")]
    FailedToGetResponse,

    #[error("Exchange rate provider returned a non-200 status")]
    InvalidResponse,

    #[error("Failed to decode the exchange rate provider response")]
    FailedToDecodeResponse,

    #[error("No exchange rates API key is configured")]
    FailedToGetApiKey,

    #[error("HTTP transport is not available")]
    FailedToAccessNetworkManager,
}

/// Error reported by an `HttpClient` when no HTTP response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Transport error: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<TransportError> for RequestError {
    fn from(_: TransportError) -> Self {
        RequestError::FailedToGetResponse
    }
}

/// A currency code that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);
