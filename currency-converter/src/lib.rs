//! # Currency Converter
//!
//! Fetches exchange rates and converts amounts through a remote exchange
//! rates API.
//!
//! ## Architecture
//!
//! - `service/` - The `CurrencyConverter` facade
//! - `config/` - API key and endpoint configuration
//! - `locator/` - Capability registry backing the shared instance
//! - `shared/` - Opt-in process-wide converter (`setup` / `shared`)
//!
//! The facade is generic over `H: HttpClient`, so the HTTP transport can be
//! swapped for a scripted one in tests.
//!
//! ## Example
//!
//! ```no_run
//! use currency_converter::{ConverterOptions, Currency, CurrencyConverter, ExchangeRateConverter};
//!
//! # async fn run() -> Result<(), currency_converter::RequestError> {
//! let converter = CurrencyConverter::new(ConverterOptions::new().with_api_key("my-key"))?;
//! let rates = converter
//!     .get_exchange_rate(Currency::USD, &[Currency::GBP, Currency::JPY])
//!     .await?;
//! let yen = converter.convert(25.0, Currency::GBP, Currency::JPY).await?;
//! # let _ = (rates, yen);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod locator;
pub mod service;
pub mod shared;


pub use config::{Config, ConverterOptions, Endpoints};
pub use converter_client::ReqwestTransport;
pub use converter_types::{
    Currency, ExchangeRateConverter, HttpClient, HttpResponse, RateTable, RequestError,
    TransportError,
};
pub use locator::ServiceLocator;
pub use service::CurrencyConverter;
pub use shared::{register_shared, setup, setup_with_transport, shared};
