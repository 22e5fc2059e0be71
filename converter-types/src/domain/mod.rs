//! Domain models for the currency converter.

pub mod currency;
pub mod rates;

pub use currency::{Currency, join_codes};
pub use rates::RateTable;
