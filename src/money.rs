//! Currency token parsing and monetary formatting.
//!
//! Quote text carries prices as `$1,234.56` tokens; output rows carry them as
//! plain `1234.56` strings with exactly two decimal digits. Both directions
//! live here so the extractor and the transformer agree on the shape.

/// Parse a currency token into an amount.
///
/// Strips a leading `$` and thousands separators before parsing. Unparsable
/// input yields `0.0`; a malformed price is never an error, it just produces
/// a zero-priced line (the orchestration layer decides what is fatal).
///
/// # Example
///
/// ```
/// use quotebom::money::parse_currency;
///
/// assert_eq!(parse_currency("$113,400.00"), 113400.0);
/// assert_eq!(parse_currency("7590"), 7590.0);
/// assert_eq!(parse_currency("n/a"), 0.0);
/// ```
pub fn parse_currency(token: &str) -> f64 {
    let cleaned: String = token
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Format an amount with exactly two decimal digits and no separators.
///
/// # Example
///
/// ```
/// use quotebom::money::format_amount;
///
/// assert_eq!(format_amount(113400.0), "113400.00");
/// assert_eq!(format_amount(7590.5), "7590.50");
/// ```
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Round an amount to cent precision.
///
/// Used for identity comparisons (dedup keys) where raw `f64` equality would
/// be unreliable.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$500.00"), 500.0);
        assert_eq!(parse_currency("$15,180.00"), 15180.0);
        assert_eq!(parse_currency("$113,400.00"), 113400.0);
        assert_eq!(parse_currency("  $90.00 "), 90.0);
        assert_eq!(parse_currency("42"), 42.0);
    }

    #[test]
    fn test_parse_currency_unparsable_is_zero() {
        assert_eq!(parse_currency(""), 0.0);
        assert_eq!(parse_currency("$"), 0.0);
        assert_eq!(parse_currency("TBD"), 0.0);
        assert_eq!(parse_currency("$12.34.56"), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(87.0), "87.00");
        assert_eq!(format_amount(109620.0), "109620.00");
        assert_eq!(format_amount(50.005), "50.01");
    }

    #[test]
    fn test_round_trip_within_precision() {
        for x in [0.0, 3.0, 87.0, 7590.0, 113400.0, 0.01, 12.345] {
            let back = parse_currency(&format_amount(x));
            assert!((back - x).abs() < 0.005, "round trip drifted for {}", x);
        }
    }

    #[test]
    fn test_to_cents() {
        assert_eq!(to_cents(113400.0), 11340000);
        assert_eq!(to_cents(0.015), 2);
        assert_eq!(to_cents(-3.0), -300);
    }
}
