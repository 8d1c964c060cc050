//! Parsing and formatting of Brazilian currency strings ("R$ 1.250,50").

/// Parse a localized currency string into a number.
///
/// Strips the "R$" symbol, thousands dots and whitespace, then treats the
/// decimal comma as a decimal point. Malformed input yields `None`; callers
/// that aggregate must fold `None` as a zero contribution instead of
/// propagating it into displayed totals.
///
/// # Examples
///
/// ```
/// use contracts::shared::money::parse_currency;
/// assert_eq!(parse_currency("R$ 1.250,50"), Some(1250.50));
/// assert_eq!(parse_currency("R$ 500.000"), Some(500000.0));
/// assert_eq!(parse_currency("sem valor"), None);
/// ```
pub fn parse_currency(s: &str) -> Option<f64> {
    let mut cleaned = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'R' | '$' | '.' => {}
            ',' => cleaned.push('.'),
            c if c.is_whitespace() => {}
            c => cleaned.push(c),
        }
    }
    cleaned.parse::<f64>().ok()
}

/// Format an integer with Brazilian thousands separators (dots).
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Format a value as a full currency string. Whole amounts omit the cents,
/// matching the registry records ("R$ 500.000", "R$ 1.250,50").
pub fn format_currency(value: f64) -> String {
    let int_part = value.trunc() as i64;
    let cents = ((value.abs() - value.abs().trunc()) * 100.0).round() as i64;
    if cents == 0 {
        format!("R$ {}", format_thousands(int_part))
    } else {
        format!("R$ {},{:02}", format_thousands(int_part), cents)
    }
}

/// Compact currency used by summary cards: thousands collapse to "k"
/// (rounded), millions to one decimal "M" with a comma.
pub fn format_currency_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("R$ {:.1}M", value / 1_000_000.0).replace('.', ",")
    } else if abs >= 1_000.0 {
        format!("R$ {}k", (value / 1_000.0).round() as i64)
    } else {
        format_currency(value)
    }
}

/// Percentage of a used/limit pair, rounded. A zero or unparsable limit is
/// defined as 0% — never NaN or infinity.
pub fn credit_percentage(used: &str, limit: &str) -> u32 {
    let used = parse_currency(used).unwrap_or(0.0);
    let limit = parse_currency(limit).unwrap_or(0.0);
    if limit <= 0.0 {
        return 0;
    }
    (used / limit * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("R$ 1.250,50"), Some(1250.50));
        assert_eq!(parse_currency("R$ 45.800"), Some(45800.0));
        assert_eq!(parse_currency("R$ 2.850.000"), Some(2850000.0));
        assert_eq!(parse_currency("R$ 0"), Some(0.0));
    }

    #[test]
    fn test_parse_currency_malformed() {
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("R$ "), None);
        assert_eq!(parse_currency("abc"), None);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(45800), "45.800");
        assert_eq!(format_thousands(2850000), "2.850.000");
        assert_eq!(format_thousands(-1234), "-1.234");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(500000.0), "R$ 500.000");
        assert_eq!(format_currency(1250.50), "R$ 1.250,50");
        assert_eq!(format_currency(8750.0), "R$ 8.750");
    }

    #[test]
    fn test_format_currency_compact() {
        assert_eq!(format_currency_compact(485000.0), "R$ 485k");
        assert_eq!(format_currency_compact(45800.0), "R$ 46k");
        assert_eq!(format_currency_compact(2800000.0), "R$ 2,8M");
        assert_eq!(format_currency_compact(750.0), "R$ 750");
    }

    #[test]
    fn test_credit_percentage() {
        assert_eq!(credit_percentage("R$ 125.000", "R$ 500.000"), 25);
        assert_eq!(credit_percentage("R$ 45.000", "R$ 200.000"), 23);
        assert_eq!(credit_percentage("R$ 2.500", "R$ 15.000"), 17);
    }

    #[test]
    fn test_credit_percentage_zero_limit() {
        assert_eq!(credit_percentage("R$ 45.000", "R$ 0"), 0);
        assert_eq!(credit_percentage("R$ 45.000", "inválido"), 0);
    }
}
