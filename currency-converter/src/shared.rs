//! Opt-in process-wide converter.
//!
//! `setup` builds a converter and registers it in the global
//! `ServiceLocator` under `dyn ExchangeRateConverter`; `shared` resolves it.
//! Code that prefers explicit dependency passing can ignore this module and
//! construct `CurrencyConverter` directly.

use std::sync::Arc;

use converter_types::{ExchangeRateConverter, HttpClient, RequestError};

use crate::config::ConverterOptions;
use crate::locator::ServiceLocator;
use crate::service::CurrencyConverter;

/// Builds a converter with the default transport and makes it the shared one.
pub fn setup(options: ConverterOptions) -> Result<Arc<dyn ExchangeRateConverter>, RequestError> {
    let converter = CurrencyConverter::new(options)?;
    Ok(register_shared(Arc::new(converter)))
}

/// Builds a converter over `transport` and makes it the shared one.
pub fn setup_with_transport<H>(
    options: ConverterOptions,
    transport: H,
) -> Result<Arc<dyn ExchangeRateConverter>, RequestError>
where
    H: HttpClient + 'static,
{
    let converter = CurrencyConverter::with_transport(options, transport)?;
    Ok(register_shared(Arc::new(converter)))
}

/// Makes `converter` the shared instance, replacing any earlier one.
pub fn register_shared(
    converter: Arc<dyn ExchangeRateConverter>,
) -> Arc<dyn ExchangeRateConverter> {
    ServiceLocator::global().register::<dyn ExchangeRateConverter>(converter.clone());
    tracing::info!("Shared currency converter registered");
    converter
}

/// The shared converter.
///
/// When nothing has been registered yet, runs `setup` with default options, so
/// the API key must then be available from the environment. Two threads racing
/// through the first call may each build an instance; the last registration
/// wins and both instances behave identically.
pub fn shared() -> Result<Arc<dyn ExchangeRateConverter>, RequestError> {
    match ServiceLocator::global().resolve::<dyn ExchangeRateConverter>() {
        Some(converter) => Ok(converter),
        None => setup(ConverterOptions::default()),
    }
}
