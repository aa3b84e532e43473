//! Currency and count abbreviation for cards, legends and tooltips.
//!
//! Rounding is half-up (midpoint away from zero) at the displayed precision.
//! Negative inputs keep their sign in front of the formatted magnitude.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{iso, Money};

fn rounded(value: Decimal, dp: u32) -> Decimal {
    let mut value = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(dp);
    value
}

/// `$1.6M` above a million, `$49K` above a thousand, `$500` otherwise.
pub fn format_currency<V: Into<Decimal>>(value: V) -> String {
    let value = value.into();
    if value.is_sign_negative() && !value.is_zero() {
        return format!("-{}", format_currency(value.abs()));
    }

    let million = Decimal::from(1_000_000);
    let thousand = Decimal::ONE_THOUSAND;

    if value >= million {
        format!("${}M", rounded(value / million, 1))
    } else if value >= thousand {
        format!("${}K", rounded(value / thousand, 0))
    } else {
        format!("${}", value.normalize())
    }
}

/// `13.3K` above a thousand, the raw value otherwise.
pub fn format_number<V: Into<Decimal>>(value: V) -> String {
    let value = value.into();
    if value.is_sign_negative() && !value.is_zero() {
        return format!("-{}", format_number(value.abs()));
    }

    if value >= Decimal::ONE_THOUSAND {
        format!("{}K", rounded(value / Decimal::ONE_THOUSAND, 1))
    } else {
        value.normalize().to_string()
    }
}

/// Whole-percent label, e.g. `72%`.
pub fn format_percent<V: Into<Decimal>>(value: V) -> String {
    format!("{}%", value.into().normalize())
}

/// Full dollar amount with thousands separators, used in hover text.
pub fn format_currency_exact<V: Into<Decimal>>(value: V) -> String {
    Money::from_decimal(value.into(), iso::USD).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_currency_thresholds() {
        assert_eq!(format_currency(48_510), "$49K");
        assert_eq!(format_currency(500), "$500");
        assert_eq!(format_currency(1_600_000), "$1.6M");
        assert_eq!(format_currency(1_000_000), "$1.0M");
        assert_eq!(format_currency(1_000), "$1K");
        assert_eq!(format_currency(999), "$999");
    }

    #[test]
    fn test_format_currency_dataset_values() {
        // 800,590 sits below the million threshold and rounds to whole thousands.
        assert_eq!(format_currency(800_590), "$801K");
        assert_eq!(format_currency(Decimal::new(160_118, 2)), "$2K");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(2_500), "$3K");
        assert_eq!(format_currency(1_250_000), "$1.3M");
        assert_eq!(format_currency(1_449_999), "$1.4M");
    }

    #[test]
    fn test_format_currency_keeps_fractional_small_values() {
        assert_eq!(format_currency(Decimal::new(9995, 1)), "$999.5");
        assert_eq!(format_currency(Decimal::new(50000, 2)), "$500");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-5_000), "-$5K");
        assert_eq!(format_currency(-250), "-$250");
        assert_eq!(format_currency(0), "$0");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5_738), "5.7K");
        assert_eq!(format_number(500), "500");
        assert_eq!(format_number(13_314), "13.3K");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(1_250), "1.3K");
        assert_eq!(format_number(-1_500), "-1.5K");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(72u8), "72%");
        assert_eq!(format_percent(Decimal::new(610, 1)), "61%");
        assert_eq!(format_percent(Decimal::new(231, 1)), "23.1%");
    }

    #[test]
    fn test_format_currency_exact_groups_thousands() {
        let text = format_currency_exact(48_510);
        assert!(text.starts_with("$48,510"), "got {}", text);
    }

    proptest! {
        #[test]
        fn test_format_currency_is_total(value in 0u64..10_000_000_000u64) {
            let text = format_currency(value);
            prop_assert!(text.starts_with('$'));
            if value >= 1_000_000 {
                prop_assert!(text.ends_with('M'));
            } else if value >= 1_000 {
                prop_assert!(text.ends_with('K'));
            } else {
                prop_assert_eq!(text, format!("${}", value));
            }
        }

        #[test]
        fn test_format_number_is_total(value in 0u64..10_000_000_000u64) {
            let text = format_number(value);
            if value >= 1_000 {
                prop_assert!(text.ends_with('K'));
                let digits = text.trim_end_matches('K');
                prop_assert_eq!(digits.split('.').nth(1).map(str::len), Some(1));
            } else {
                prop_assert_eq!(text, value.to_string());
            }
        }
    }
}
