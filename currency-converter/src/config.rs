//! Configuration loading from environment.
//!
//! The API key and provider base URL come from the process environment.
//! Loading a `.env` file is left to the binary.

use std::env;

use converter_types::RequestError;

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "EXCHANGE_RATES_API_KEY";

/// Environment variable overriding the provider base URL.
pub const BASE_URL_VAR: &str = "EXCHANGE_RATES_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.apilayer.com/exchangerates_data";

/// The two provider endpoints the converter calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Latest rates for a base currency.
    pub latest: String,
    /// Single amount conversion.
    pub convert: String,
}

impl Endpoints {
    /// Derives `<base>/latest` and `<base>/convert`.
    pub fn from_base(base_url: &str) -> Self {
        let base = base_url.trim().trim_end_matches('/');
        Self {
            latest: format!("{}/latest", base),
            convert: format!("{}/convert", base),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base(DEFAULT_BASE_URL)
    }
}

/// Options a caller passes when constructing a converter.
///
/// Anything left `None` is taken from `Config::from_env`.
#[derive(Clone, Default)]
pub struct ConverterOptions {
    pub api_key: Option<String>,
    pub endpoints: Option<Endpoints>,
}

impl ConverterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// True when nothing needs to be read from the environment.
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some() && self.endpoints.is_some()
    }
}

impl std::fmt::Debug for ConverterOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

/// Converter configuration.
#[derive(Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoints: Endpoints,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR);
        let endpoints = lookup(BASE_URL_VAR)
            .map(|base| Endpoints::from_base(&base))
            .unwrap_or_default();

        Self { api_key, endpoints }
    }

    /// Applies explicit options on top of this configuration.
    pub fn merge(self, options: ConverterOptions) -> Self {
        Self {
            api_key: options.api_key.or(self.api_key),
            endpoints: options.endpoints.unwrap_or(self.endpoints),
        }
    }

    /// The configured API key. Blank keys count as missing.
    pub fn api_key(&self) -> Result<&str, RequestError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(RequestError::FailedToGetApiKey)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
