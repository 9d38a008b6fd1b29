use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a value as whole-dollar USD currency text, e.g. `$1,235`.
///
/// Rounds to the nearest dollar (midpoints away from zero, matching the
/// UI locale formatter) and groups thousands with commas. Negative amounts
/// render as `-$1,235`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_thousands(&rounded.abs().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Renders a value as a percentage string with exactly two decimal places,
/// e.g. `5.50%`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded)
}

// Comma goes after the digit in reversed form so it appears before the group
// when un-reversed.
fn group_thousands(digits: &str) -> String {
    digits
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                format!("{},", c)
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(1234.56)), "$1,235");
        assert_eq!(format_currency(dec!(-1234.56)), "-$1,235");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000");
        assert_eq!(format_currency(dec!(999.4)), "$999");
        assert_eq!(format_currency(dec!(0)), "$0");
    }

    #[test]
    fn test_format_currency_rounds_midpoints_away_from_zero() {
        assert_eq!(format_currency(dec!(2.5)), "$3");
        assert_eq!(format_currency(dec!(-2.5)), "-$3");
        assert_eq!(format_currency(dec!(-0.4)), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(5.5)), "5.50%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
        assert_eq!(format_percent(dec!(-1.7519)), "-1.75%");
        assert_eq!(format_percent(dec!(58.5555)), "58.56%");
    }
}
