//! Wire format of the exchange rate provider.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Query and header names
// ─────────────────────────────────────────────────────────────────────────────

pub const API_KEY_HEADER: &str = "apikey";

pub const BASE_PARAM: &str = "base";
pub const SYMBOLS_PARAM: &str = "symbols";
pub const FROM_PARAM: &str = "from";
pub const TO_PARAM: &str = "to";
pub const AMOUNT_PARAM: &str = "amount";

// ─────────────────────────────────────────────────────────────────────────────
// Response bodies
// ─────────────────────────────────────────────────────────────────────────────

/// Body of a successful "latest rates" response.
///
/// Only `rates` is required; the provider's other fields (`base`, `date`,
/// `timestamp`, `success`) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    pub rates: HashMap<String, f64>,
}

/// Body of a successful "convert" response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub result: f64,
}
