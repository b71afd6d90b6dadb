use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

const SYMBOL: &str = "R$";

/// Format a monetary amount with comma thousands-grouping and a dot decimal
/// separator. Without the symbol the value keeps its minimal representation
/// (`1,000`, `3,333.6`); with it the amount is rounded half-up to two forced
/// decimals and prefixed (`R$ 1,000.00`).
pub fn format_currency(amount: Money, with_symbol: bool) -> String {
    let value = if with_symbol {
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    } else {
        amount.normalize()
    };

    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f.to_string()),
        None => (text.as_str(), String::new()),
    };

    let mut frac = frac_part;
    if with_symbol {
        while frac.len() < 2 {
            frac.push('0');
        }
    }

    let sign = if value < Decimal::ZERO { "-" } else { "" };
    let grouped = group_thousands(int_part);
    let digits = if frac.is_empty() {
        grouped
    } else {
        format!("{grouped}.{frac}")
    };

    if with_symbol {
        format!("{SYMBOL} {sign}{digits}")
    } else {
        format!("{sign}{digits}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn plain_format_groups_thousands() {
        assert_eq!(format_currency(dec!(1000), false), "1,000");
        assert_eq!(format_currency(dec!(1234567), false), "1,234,567");
        assert_eq!(format_currency(dec!(999), false), "999");
    }

    #[test]
    fn plain_format_keeps_minimal_decimals() {
        assert_eq!(format_currency(dec!(3333.6), false), "3,333.6");
        assert_eq!(format_currency(dec!(3333.60), false), "3,333.6");
    }

    #[test]
    fn symbol_format_forces_two_decimals() {
        assert_eq!(format_currency(dec!(1000), true), "R$ 1,000.00");
        assert!(format_currency(dec!(1000), true).contains("1,000.00"));
        assert_eq!(format_currency(dec!(138.9), true), "R$ 138.90");
    }

    #[test]
    fn symbol_format_rounds_half_up() {
        assert_eq!(format_currency(dec!(1234567.895), true), "R$ 1,234,567.90");
    }

    #[test]
    fn negative_amounts_keep_the_sign_with_the_digits() {
        assert_eq!(format_currency(dec!(-1000), false), "-1,000");
        assert_eq!(format_currency(dec!(-1000), true), "R$ -1,000.00");
    }
}
