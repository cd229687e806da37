//! Keystroke normalization for numeric text fields.
//!
//! The form stores what the user typed, not a parsed number, so that an
//! in-progress edit like `"12."` or a cleared field survives redisplay.
//! [`normalize`] is applied to every text edit before it is stored.

/// Normalize raw field text into a numeric string no greater than `max`.
///
/// Keeps digits and the first decimal point, drops everything else, collapses
/// redundant leading zeros and clamps values above `max` down to `max`. An
/// empty result stays empty and a trailing decimal point is kept.
///
/// ```
/// use valuecalc_core::normalize;
///
/// assert_eq!(normalize("$1,250", 999_999.0), "1250");
/// assert_eq!(normalize("12.", 100.0), "12.");
/// assert_eq!(normalize("250", 100.0), "100");
/// assert_eq!(normalize("", 100.0), "");
/// ```
pub fn normalize(raw: &str, max: f64) -> String {
    let filtered = strip_non_numeric(raw);
    if filtered.is_empty() {
        return filtered;
    }

    let collapsed = collapse_leading_zeros(&filtered);
    let max = max.max(0.0);
    match collapsed.parse::<f64>() {
        Ok(value) if value <= max => collapsed,
        _ => format_number(max),
    }
}

/// Render a number the way the form stores it: no trailing `.0` on whole values.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

fn strip_non_numeric(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '.' && !seen_point {
            seen_point = true;
            out.push(c);
        }
    }
    out
}

fn collapse_leading_zeros(digits: &str) -> String {
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };

    match fraction {
        Some(fraction) => format!("{}.{}", whole, fraction),
        None => whole.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_and_grouping() {
        assert_eq!(normalize("$1,250", 999_999.0), "1250");
        assert_eq!(normalize("12 units", 999_999.0), "12");
        assert_eq!(normalize("abc", 999_999.0), "");
    }

    #[test]
    fn keeps_only_first_decimal_point() {
        assert_eq!(normalize("1.2.3", 100.0), "1.23");
        assert_eq!(normalize("6..25", 100.0), "6.25");
    }

    #[test]
    fn preserves_trailing_point() {
        assert_eq!(normalize("12.", 100.0), "12.");
        assert_eq!(normalize("100.", 100.0), "100.");
    }

    #[test]
    fn bare_point_gets_leading_zero() {
        assert_eq!(normalize(".", 100.0), "0.");
        assert_eq!(normalize(".5", 100.0), "0.5");
    }

    #[test]
    fn collapses_leading_zeros() {
        assert_eq!(normalize("007", 100.0), "7");
        assert_eq!(normalize("000", 100.0), "0");
        assert_eq!(normalize("00.5", 100.0), "0.5");
    }

    #[test]
    fn clamps_to_max() {
        assert_eq!(normalize("101", 100.0), "100");
        assert_eq!(normalize("150.", 100.0), "100");
        assert_eq!(normalize("1234567", 999_999.0), "999999");
        assert_eq!(normalize("6.5", 6.25), "6.25");
    }

    #[test]
    fn clamps_absurdly_long_input() {
        let raw = "9".repeat(400);
        assert_eq!(normalize(&raw, 100.0), "100");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize("", 100.0), "");
        assert_eq!(normalize("   ", 100.0), "");
    }

    #[test]
    fn format_number_drops_whole_fraction() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(6.25), "6.25");
    }
}
