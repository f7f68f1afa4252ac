//! Price estimates in Moroccan dirham.
//!
//! Pieces are made to order, so the catalog only ever shows an estimate.
//! Amounts use decimal arithmetic; the currency is always MAD.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::locale::Locale;

/// An estimated price in MAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceEstimate(Decimal);

impl PriceEstimate {
    /// ISO 4217 currency code for every estimate.
    pub const CURRENCY: &'static str = "MAD";

    /// Create a new estimate.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The amount in dirhams.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Zero means "contact us for a price".
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Format for display, e.g. `1 500 MAD` (fr) or `1.500 د.م.` (ar).
    ///
    /// At most two fraction digits, trailing zeros dropped.
    #[must_use]
    pub fn display(&self, locale: Locale) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let text = rounded.abs().to_string();
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let (group_sep, suffix) = match locale {
            Locale::Fr => ('\u{202f}', "MAD"),
            Locale::Ar => ('.', "د.م."),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(group_sep);
            }
            grouped.push(c);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        if frac_part.is_empty() {
            format!("{sign}{grouped} {suffix}")
        } else {
            format!("{sign}{grouped},{frac_part} {suffix}")
        }
    }
}

impl From<Decimal> for PriceEstimate {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn price(s: &str) -> PriceEstimate {
        PriceEstimate::new(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_display_french_groups_thousands() {
        assert_eq!(price("1500").display(Locale::Fr), "1\u{202f}500 MAD");
        assert_eq!(price("950").display(Locale::Fr), "950 MAD");
        assert_eq!(
            price("1234567").display(Locale::Fr),
            "1\u{202f}234\u{202f}567 MAD"
        );
    }

    #[test]
    fn test_display_arabic() {
        assert_eq!(price("1500").display(Locale::Ar), "1.500 د.م.");
    }

    #[test]
    fn test_display_fraction_digits() {
        assert_eq!(price("1500.50").display(Locale::Fr), "1\u{202f}500,5 MAD");
        assert_eq!(price("99.999").display(Locale::Fr), "100 MAD");
        assert_eq!(price("12.00").display(Locale::Fr), "12 MAD");
    }

    #[test]
    fn test_deserialize_from_number_and_string() {
        let from_number: PriceEstimate = serde_json::from_str("2500").unwrap();
        let from_string: PriceEstimate = serde_json::from_str("\"2500\"").unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_is_zero() {
        assert!(price("0").is_zero());
        assert!(!price("1").is_zero());
    }
}
