//! Rupiah parsing and formatting.
//!
//! Amounts are whole rupiah grouped with dots (`5.000.000`); large
//! values abbreviate to `jt` (juta) and `M` (miliar) for chart labels.
use anyhow::{Context, Result};

/// Groups an amount with dot thousand separators, `id-ID` style.
pub fn format_grouped(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount with the currency symbol, e.g. `Rp 1.200.000`.
pub fn format_rupiah(amount: i64) -> String {
    let grouped = format_grouped(amount);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-Rp {rest}"),
        None => format!("Rp {grouped}"),
    }
}

/// Parses user-entered text into whole rupiah.
///
/// Every non-digit character is dropped, so `"Rp 5.000.000"`, `"5,000,000"`
/// and `"5000000"` all parse to the same amount. Empty input (or input
/// with no digits at all) means 0.
pub fn parse_amount(text: &str) -> Result<i64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<i64>()
        .with_context(|| format!("Amount is too large: {text}"))
}

/// Abbreviates an amount for chart labels: miliar with one decimal,
/// juta and thousands with none.
pub fn format_short(amount: i64) -> String {
    if amount >= 1_000_000_000 {
        format!("{:.1}M", amount as f64 / 1_000_000_000.0)
    } else if amount >= 1_000_000 {
        format!("{:.0}jt", amount as f64 / 1_000_000.0)
    } else {
        format!("{:.0}k", amount as f64 / 1_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1_000), "1.000");
        assert_eq!(format_grouped(5_000_000), "5.000.000");
        assert_eq!(format_grouped(1_234_567_890), "1.234.567.890");
        assert_eq!(format_grouped(-42_000), "-42.000");
    }

    #[test]
    fn test_rupiah_symbol() {
        assert_eq!(format_rupiah(1_200_000), "Rp 1.200.000");
        assert_eq!(format_rupiah(-500_000), "-Rp 500.000");
        assert_eq!(format_rupiah(0), "Rp 0");
    }

    #[test]
    fn test_parse_strips_formatting() {
        assert_eq!(parse_amount("5.000.000").unwrap(), 5_000_000);
        assert_eq!(parse_amount("Rp 1.200.000").unwrap(), 1_200_000);
        assert_eq!(parse_amount("5,000,000").unwrap(), 5_000_000);
        assert_eq!(parse_amount("5000000").unwrap(), 5_000_000);
    }

    #[test]
    fn test_parse_empty_means_zero() {
        assert_eq!(parse_amount("").unwrap(), 0);
        assert_eq!(parse_amount("Rp ").unwrap(), 0);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let too_big = "9".repeat(25);
        assert!(parse_amount(&too_big).is_err());
    }

    #[test]
    fn test_parse_format_round_trip() {
        for amount in [0, 1, 999, 1_000, 250_000, 5_000_000, 1_350_000_000] {
            assert_eq!(parse_amount(&format_grouped(amount)).unwrap(), amount);
            assert_eq!(parse_amount(&format_rupiah(amount)).unwrap(), amount);
        }
    }

    #[test]
    fn test_short_magnitudes() {
        assert_eq!(format_short(0), "0k");
        assert_eq!(format_short(500_000), "500k");
        assert_eq!(format_short(12_000_000), "12jt");
        assert_eq!(format_short(999_999_999), "1000jt");
        assert_eq!(format_short(1_200_000_000), "1.2M");
    }
}
