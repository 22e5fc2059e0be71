//! Currency Converter Facade
//!
//! The object applications call. Delegates every request to the
//! `ExchangeRatesClient` and reshapes its rate tables into the maps each
//! operation promises.

use std::collections::HashMap;

use async_trait::async_trait;

use converter_client::{ExchangeRatesClient, ReqwestTransport};
use converter_types::{Currency, ExchangeRateConverter, HttpClient, RateTable, RequestError};

use crate::config::{Config, ConverterOptions, Endpoints};

/// Converter facade.
///
/// Generic over `H: HttpClient` - the transport is injected at construction.
/// Immutable once built, so one instance can serve concurrent callers.
pub struct CurrencyConverter<H: HttpClient> {
    api_key: String,
    endpoints: Endpoints,
    client: ExchangeRatesClient<H>,
}

impl CurrencyConverter<ReqwestTransport> {
    /// Creates a converter using the default reqwest transport.
    pub fn new(options: ConverterOptions) -> Result<Self, RequestError> {
        Self::with_transport(options, ReqwestTransport::new()?)
    }
}

impl<H: HttpClient> CurrencyConverter<H> {
    /// Creates a converter over `transport`.
    ///
    /// Options left unset are read from the environment; a missing API key is
    /// reported as `FailedToGetApiKey`.
    pub fn with_transport(options: ConverterOptions, transport: H) -> Result<Self, RequestError> {
        let config = if options.is_complete() {
            Config::default()
        } else {
            Config::from_env()
        };
        Self::from_config(config.merge(options), transport)
    }

    /// Creates a converter from an already resolved configuration.
    pub fn from_config(config: Config, transport: H) -> Result<Self, RequestError> {
        let api_key = config.api_key()?.to_string();
        Ok(Self {
            api_key,
            endpoints: config.endpoints,
            client: ExchangeRatesClient::new(transport),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &H {
        self.client.transport()
    }

    async fn latest(&self, base: Currency, targets: &[Currency]) -> Result<RateTable, RequestError> {
        self.client
            .fetch_rates(&self.api_key, &self.endpoints.latest, base, targets)
            .await
    }
}

#[async_trait]
impl<H: HttpClient> ExchangeRateConverter for CurrencyConverter<H> {
    async fn get_exchange_rate(
        &self,
        base: Currency,
        targets: &[Currency],
    ) -> Result<HashMap<Currency, f64>, RequestError> {
        Ok(self.latest(base, targets).await?.typed())
    }

    async fn get_exchange_rate_table(
        &self,
        base: Currency,
        targets: &[Currency],
    ) -> Result<RateTable, RequestError> {
        self.latest(base, targets).await
    }

    async fn convert(
        &self,
        amount: f64,
        base: Currency,
        target: Currency,
    ) -> Result<f64, RequestError> {
        self.client
            .convert(&self.api_key, &self.endpoints.convert, amount, base, target)
            .await
    }

    async fn convert_many(
        &self,
        amount: f64,
        base: Currency,
        targets: &[Currency],
    ) -> Result<HashMap<Currency, f64>, RequestError> {
        Ok(self.latest(base, targets).await?.scaled(amount).typed())
    }
}

impl<H: HttpClient> std::fmt::Debug for CurrencyConverter<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyConverter")
            .field("api_key", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
