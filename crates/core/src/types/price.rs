//! Price conversion to EUR and display formatting.
//!
//! Every price in the catalog is an integer amount in the currency's minor
//! unit (cents for EUR/USD, yen for JPY). Conversion multiplies by a static
//! rate using decimal arithmetic, then rounds half away from zero back to a
//! whole minor unit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Static exchange rates to EUR as `(code, mantissa, scale)`.
///
/// Approximate rates from January 2024.
const EXCHANGE_RATES: &[(&str, i64, u32)] = &[
    ("EUR", 100, 2),
    ("USD", 92, 2),
    ("GBP", 117, 2),
    ("CHF", 105, 2),
    ("JPY", 67, 4),
];

/// Rate applied to an unknown currency code.
const FALLBACK_RATE: Decimal = Decimal::ONE;

/// Look up the EUR rate for a currency code (case-insensitive).
fn rate_for(currency_code: &str) -> Decimal {
    let code = currency_code.trim().to_ascii_uppercase();
    EXCHANGE_RATES
        .iter()
        .find(|(known, _, _)| *known == code)
        .map_or(FALLBACK_RATE, |&(_, mantissa, scale)| {
            Decimal::new(mantissa, scale)
        })
}

/// Convert an amount in minor units of `currency_code` to EUR minor units.
///
/// Unknown currency codes use a rate of 1.0. The result is rounded half away
/// from zero, so `convert_to_eur(10050, "USD")` is `9246`.
#[must_use]
pub fn convert_to_eur(amount: i64, currency_code: &str) -> i64 {
    let converted = (Decimal::from(amount) * rate_for(currency_code))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // Rates are at most 1.17, so only amounts near i64::MAX can overflow.
    converted
        .to_i64()
        .unwrap_or(if amount < 0 { i64::MIN } else { i64::MAX })
}

/// Format an amount of EUR minor units as `"12.34 €"`.
#[must_use]
pub fn format_price_eur(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02} €", abs / 100, abs % 100)
}

/// Convert to EUR, then format.
#[must_use]
pub fn convert_and_format_price(amount: i64, currency_code: &str) -> String {
    format_price_eur(convert_to_eur(amount, currency_code))
}

/// A price in minor units with its ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Amount in the currency's minor unit.
    pub amount: i64,
    /// ISO 4217 currency code as reported upstream.
    pub currency_code: String,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub fn new(amount: i64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// Amount converted to EUR minor units.
    #[must_use]
    pub fn to_eur(&self) -> i64 {
        convert_to_eur(self.amount, &self.currency_code)
    }

    /// Converted and formatted for display (e.g., "12.34 €").
    #[must_use]
    pub fn display_eur(&self) -> String {
        format_price_eur(self.to_eur())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_usd() {
        assert_eq!(convert_to_eur(10000, "USD"), 9200);
    }

    #[test]
    fn test_convert_gbp() {
        assert_eq!(convert_to_eur(10000, "GBP"), 11700);
    }

    #[test]
    fn test_convert_eur_is_identity() {
        assert_eq!(convert_to_eur(10000, "EUR"), 10000);
        assert_eq!(convert_to_eur(1, "EUR"), 1);
        assert_eq!(convert_to_eur(0, "EUR"), 0);
    }

    #[test]
    fn test_convert_unknown_currency_uses_unit_rate() {
        assert_eq!(convert_to_eur(10000, "UNKNOWN"), 10000);
        assert_eq!(convert_to_eur(10000, ""), 10000);
    }

    #[test]
    fn test_convert_is_case_insensitive() {
        assert_eq!(convert_to_eur(10000, "usd"), 9200);
        assert_eq!(convert_to_eur(10000, "UsD"), 9200);
    }

    #[test]
    fn test_convert_rounds_to_nearest_minor_unit() {
        // 10050 * 0.92 = 9246.0
        assert_eq!(convert_to_eur(10050, "USD"), 9246);
        // 150 * 0.0067 = 1.005
        assert_eq!(convert_to_eur(150, "JPY"), 1);
        // 75 * 0.0067 = 0.5025
        assert_eq!(convert_to_eur(75, "JPY"), 1);
    }

    #[test]
    fn test_convert_rounds_half_away_from_zero() {
        // 50 * 1.17 = 58.5
        assert_eq!(convert_to_eur(50, "GBP"), 59);
        assert_eq!(convert_to_eur(-50, "GBP"), -59);
        // 10 * 1.05 = 10.5
        assert_eq!(convert_to_eur(10, "CHF"), 11);
    }

    #[test]
    fn test_convert_non_negative_for_known_codes() {
        for code in ["EUR", "USD", "GBP", "CHF", "JPY"] {
            for amount in [0, 1, 99, 12_345, 1_000_000] {
                assert!(convert_to_eur(amount, code) >= 0, "{code} {amount}");
            }
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price_eur(1234), "12.34 €");
        assert_eq!(format_price_eur(100), "1.00 €");
        assert_eq!(format_price_eur(1000), "10.00 €");
        assert_eq!(format_price_eur(0), "0.00 €");
        assert_eq!(format_price_eur(5), "0.05 €");
        assert_eq!(format_price_eur(12_345_678), "123456.78 €");
    }

    #[test]
    fn test_format_negative_price() {
        assert_eq!(format_price_eur(-150), "-1.50 €");
    }

    #[test]
    fn test_convert_and_format() {
        assert_eq!(convert_and_format_price(100, "USD"), "0.92 €");
        assert_eq!(convert_and_format_price(100, "GBP"), "1.17 €");
        assert_eq!(convert_and_format_price(1234, "EUR"), "12.34 €");
        assert_eq!(convert_and_format_price(0, "USD"), "0.00 €");
    }

    #[test]
    fn test_price_helpers() {
        let price = Price::new(100_000, "USD");
        assert_eq!(price.to_eur(), 92_000);
        assert_eq!(price.display_eur(), "920.00 €");
    }
}
