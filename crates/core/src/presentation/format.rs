//! Number formatting shared by cards, charts and tables.

/// `$1,234.56`; negatives render as `-$1,234.56`.
#[must_use]
pub fn currency(value: f64) -> String {
    let body = grouped(value.abs());
    let sign = if value < 0.0 && body != "0.00" { "-" } else { "" };
    format!("{sign}${body}")
}

/// Two decimals with `,` thousands separators.
#[must_use]
pub fn grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{out}.{frac_part}")
}

/// `$12.34` without separators, as used in table cells and tooltips.
#[must_use]
pub fn dollars(value: f64) -> String {
    format!("${value:.2}")
}

/// Leading `+` for non-negative values, then two decimals.
#[must_use]
pub fn signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

/// Plain number as typed (10, 10.5), empty when absent.
#[must_use]
pub fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Apply `f` when the value is present; absent values render as an empty cell.
#[must_use]
pub fn cell(value: Option<f64>, f: impl Fn(f64) -> String) -> String {
    value.filter(|v| v.is_finite()).map(f).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(1234567.891), "$1,234,567.89");
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(999.999), "$1,000.00");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(currency(-1234.5), "-$1,234.50");
    }

    #[test]
    fn grouped_small_values() {
        assert_eq!(grouped(12.0), "12.00");
        assert_eq!(grouped(123.456), "123.46");
    }

    #[test]
    fn signed_prefixes_plus_only_when_non_negative() {
        assert_eq!(signed(12.5), "+12.50");
        assert_eq!(signed(0.0), "+0.00");
        assert_eq!(signed(-12.5), "-12.50");
    }

    #[test]
    fn number_matches_plain_display() {
        assert_eq!(number(Some(10.0)), "10");
        assert_eq!(number(Some(2.5)), "2.5");
        assert_eq!(number(None), "");
    }

    #[test]
    fn cell_is_empty_for_missing_or_nan() {
        assert_eq!(cell(None, dollars), "");
        assert_eq!(cell(Some(f64::NAN), dollars), "");
        assert_eq!(cell(Some(3.0), dollars), "$3.00");
    }
}
