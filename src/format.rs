//! Display formatting for pre-aggregated numbers
//!
//! en-US conventions: comma thousands separators, whole-dollar currency.

/// Group the integer part with commas, keeping up to three fraction digits.
///
/// `30100.0` → `"30,100"`, `1234.5` → `"1,234.5"`.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Whole-dollar currency: `940000.0` → `"$940,000"`
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let whole = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && whole != "0" { "-" } else { "" };
    format!("{}${}", sign, group(&whole))
}

/// Return multiple with one decimal: `3.8` → `"3.8x"`
pub fn multiple(value: f64) -> String {
    format!("{:.1}x", value)
}

/// Format an optional reading, `—` when absent
pub fn or_dash(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| "—".to_string())
}

fn group(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(30100.0), "30,100");
        assert_eq!(thousands(1488.0), "1,488");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1234567.25), "1,234,567.25");
        assert_eq!(thousands(-4200.0), "-4,200");
        assert_eq!(thousands(0.0), "0");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(940000.0), "$940,000");
        assert_eq!(currency(49000.0), "$49,000");
        assert_eq!(currency(1120000.4), "$1,120,000");
        assert_eq!(currency(-18000.0), "-$18,000");
    }

    #[test]
    fn test_multiple_and_dash() {
        assert_eq!(multiple(3.8), "3.8x");
        assert_eq!(multiple(2.0), "2.0x");
        assert_eq!(or_dash(None, thousands), "—");
        assert_eq!(or_dash(Some(128.0), thousands), "128");
    }
}
