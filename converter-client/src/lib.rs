//! # Converter Client
//!
//! Request helper for the exchange rate provider, plus the default reqwest
//! transport.
//!
//! `ExchangeRatesClient` builds the query, performs exactly one GET through the
//! injected `HttpClient`, checks the status and decodes the JSON body. Every
//! failure is reported as a `RequestError`.

mod transport;

pub use transport::ReqwestTransport;

use serde::de::DeserializeOwned;
use url::Url;

use converter_types::dto::{
    AMOUNT_PARAM, API_KEY_HEADER, BASE_PARAM, ConvertResponse, FROM_PARAM, RatesResponse,
    SYMBOLS_PARAM, TO_PARAM,
};
use converter_types::{Currency, HttpClient, HttpResponse, RateTable, RequestError, join_codes};

/// Exchange rate provider request helper.
///
/// Generic over `H: HttpClient` so tests can script responses.
pub struct ExchangeRatesClient<H: HttpClient> {
    transport: H,
}

impl<H: HttpClient> ExchangeRatesClient<H> {
    pub fn new(transport: H) -> Self {
        Self { transport }
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &H {
        &self.transport
    }

    /// Fetches the latest rates for `targets` relative to `base`.
    ///
    /// `targets` may be empty; the provider decides what an empty `symbols`
    /// means. The returned table keeps every code the provider sent.
    #[tracing::instrument(skip(self, api_key))]
    pub async fn fetch_rates(
        &self,
        api_key: &str,
        endpoint: &str,
        base: Currency,
        targets: &[Currency],
    ) -> Result<RateTable, RequestError> {
        let symbols = join_codes(targets);
        let url = build_url(
            endpoint,
            &[(BASE_PARAM, base.code()), (SYMBOLS_PARAM, symbols.as_str())],
        )?;

        let response = self.send(api_key, &url).await?;
        let body: RatesResponse = decode(&response)?;
        let table = RateTable::new(base, body.rates);

        let unrecognized = table.unrecognized();
        if !unrecognized.is_empty() {
            tracing::debug!("Provider returned codes outside the catalog: {:?}", unrecognized);
        }
        Ok(table)
    }

    /// Converts `amount` from `base` to `target` on the provider side.
    #[tracing::instrument(skip(self, api_key))]
    pub async fn convert(
        &self,
        api_key: &str,
        endpoint: &str,
        amount: f64,
        base: Currency,
        target: Currency,
    ) -> Result<f64, RequestError> {
        let amount = amount.to_string();
        let url = build_url(
            endpoint,
            &[
                (FROM_PARAM, base.code()),
                (TO_PARAM, target.code()),
                (AMOUNT_PARAM, amount.as_str()),
            ],
        )?;

        let response = self.send(api_key, &url).await?;
        let body: ConvertResponse = decode(&response)?;
        Ok(body.result)
    }

    async fn send(&self, api_key: &str, url: &Url) -> Result<HttpResponse, RequestError> {
        tracing::debug!(
            endpoint = url.path(),
            query = url.query().unwrap_or_default(),
            "Sending provider request"
        );

        let response = self
            .transport
            .get(url, &[(API_KEY_HEADER, api_key)])
            .await
            .map_err(|e| {
                tracing::warn!("Provider request failed: {}", e);
                RequestError::from(e)
            })?;

        tracing::debug!(status = response.status, "Provider responded");
        if !response.is_ok() {
            return Err(RequestError::InvalidResponse);
        }
        Ok(response)
    }
}

/// Replaces the query of `endpoint` with `query`.
///
/// Only absolute `http`/`https` URLs are accepted.
pub fn build_url(endpoint: &str, query: &[(&str, &str)]) -> Result<Url, RequestError> {
    let mut url = Url::parse(endpoint.trim()).map_err(|_| RequestError::FailedToConfigureURL)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(RequestError::FailedToConfigureURL);
    }
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (name, value) in query {
            pairs.append_pair(name, value);
        }
    }
    Ok(url)
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, RequestError> {
    serde_json::from_slice(&response.body).map_err(|e| {
        tracing::debug!("Failed to decode provider response: {}", e);
        RequestError::FailedToDecodeResponse
    })
}
