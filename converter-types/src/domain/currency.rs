//! Closed catalog of currencies the converter can quote.
//!
//! Currencies are declared once in the `define_currencies!` invocation at the
//! bottom of this file; the macro generates the enum, its code/symbol lookups
//! and the string conversions in both directions.
//!
//! # Adding a New Currency
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     CHF => ("CHF", "Fr"),
//! }
//! ```

use crate::error::UnknownCurrency;

/// Generates the `Currency` enum and its lookups.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "SYMBOL"),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal)
        ),* $(,)?
    ) => {
        /// Currencies supported by the exchange rate provider.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum Currency {
            $($name),*
        }

        impl Currency {
            /// ISO 4217 code, as sent to and returned by the provider.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Currency::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(Currency::$name => $symbol),*
                }
            }

            /// Looks up a provider code. Codes are matched exactly, so lowercase
            /// or unknown codes yield `None`.
            pub fn from_code(code: &str) -> Option<Currency> {
                match code {
                    $($code => Some(Currency::$name),)*
                    _ => None,
                }
            }

            pub fn all() -> &'static [Currency] {
                &[$(Currency::$name),*]
            }
        }
    };
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = UnknownCurrency;

    /// Case-insensitive parse for user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(&s.trim().to_uppercase())
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// Joins currency codes into the provider's `symbols` query value.
pub fn join_codes(currencies: &[Currency]) -> String {
    currencies
        .iter()
        .map(Currency::code)
        .collect::<Vec<_>>()
        .join(",")
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "$"),
    EUR => ("EUR", "€"),
    GBP => ("GBP", "£"),
    JPY => ("JPY", "¥"),
}
