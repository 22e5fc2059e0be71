//! Converter port.
//!
//! The public contract of the converter facade. Object safe, so a single
//! instance can be shared as `Arc<dyn ExchangeRateConverter>`.

use std::collections::HashMap;

use crate::domain::{Currency, RateTable};
use crate::error::RequestError;

#[async_trait::async_trait]
pub trait ExchangeRateConverter: Send + Sync {
    /// Latest rates for `targets` relative to `base`, keyed by catalog currency.
    /// Codes the provider returns outside the catalog are dropped.
    async fn get_exchange_rate(
        &self,
        base: Currency,
        targets: &[Currency],
    ) -> Result<HashMap<Currency, f64>, RequestError>;

    /// Same request as `get_exchange_rate`, keeping every code the provider sent.
    async fn get_exchange_rate_table(
        &self,
        base: Currency,
        targets: &[Currency],
    ) -> Result<RateTable, RequestError>;

    /// Converts `amount` of `base` into `target` using the provider's convert
    /// endpoint. The provider's result is returned as is.
    async fn convert(
        &self,
        amount: f64,
        base: Currency,
        target: Currency,
    ) -> Result<f64, RequestError>;

    /// Converts `amount` of `base` into every currency in `targets` with one
    /// latest-rates request, multiplying each rate by `amount` locally.
    async fn convert_many(
        &self,
        amount: f64,
        base: Currency,
        targets: &[Currency],
    ) -> Result<HashMap<Currency, f64>, RequestError>;
}
