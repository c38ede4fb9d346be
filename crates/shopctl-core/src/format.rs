//! Display formatting for table rows.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Formats a price with two decimal places and its currency code,
/// e.g. `19.90 USD`.
#[must_use]
pub fn format_price(amount: Decimal, currency: &str) -> String {
    format!("{amount:.2} {currency}")
}

/// Formats a timestamp as `YYYY-MM-DD` for table display.
#[must_use]
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn price_is_padded_to_two_decimals() {
        assert_eq!(format_price(Decimal::new(199, 1), "EUR"), "19.90 EUR");
        assert_eq!(format_price(Decimal::new(5, 0), "USD"), "5.00 USD");
    }

    #[test]
    fn date_is_day_precision() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(format_date(ts), "2025-03-14");
    }
}
