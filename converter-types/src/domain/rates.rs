//! Exchange rates returned by a single provider request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Rates relative to `base`, keyed by the code exactly as the provider sent it.
///
/// Codes outside the catalog are kept here; `typed()` is the projection that
/// drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    base: Currency,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: Currency, rates: HashMap<String, f64>) -> Self {
        Self { base, rates }
    }

    /// The currency every rate is expressed against.
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Raw provider entries, unrecognized codes included.
    pub fn raw(&self) -> &HashMap<String, f64> {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate for a catalog currency, if the provider returned one.
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(currency.code()).copied()
    }

    /// Catalog-keyed view. Entries whose code is not a `Currency` are dropped.
    pub fn typed(&self) -> HashMap<Currency, f64> {
        self.rates
            .iter()
            .filter_map(|(code, rate)| Currency::from_code(code).map(|c| (c, *rate)))
            .collect()
    }

    /// Provider codes that `typed()` drops, sorted.
    pub fn unrecognized(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .rates
            .keys()
            .map(String::as_str)
            .filter(|code| Currency::from_code(code).is_none())
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Multiplies every rate by `amount`. No rounding is applied.
    pub fn scaled(&self, amount: f64) -> RateTable {
        RateTable {
            base: self.base,
            rates: self
                .rates
                .iter()
                .map(|(code, rate)| (code.clone(), rate * amount))
                .collect(),
        }
    }
}
