//! Port traits (interfaces for adapters).
//!
//! The converter depends on `HttpClient`, never on a concrete HTTP stack.
//! Callers depend on `ExchangeRateConverter`, never on the concrete facade.

mod converter;
mod transport;

pub use converter::ExchangeRateConverter;
pub use transport::{HttpClient, HttpResponse};
