//! # Converter Types
//!
//! Domain types and port traits for the currency converter.
//! This crate performs no IO - only the currency catalog, rate tables,
//! error types, provider DTOs and trait definitions.
//!
//! ## Layout
//!
//! - `domain/` - Currency catalog and rate tables
//! - `ports/` - Traits that transports and converters implement
//! - `dto/` - Provider response bodies and query/header names
//! - `error/` - Request and transport error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Currency, RateTable, join_codes};
pub use error::{RequestError, TransportError, UnknownCurrency};
pub use ports::{ExchangeRateConverter, HttpClient, HttpResponse};
pub use url::Url;
