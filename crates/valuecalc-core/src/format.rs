//! Display formatting for the result panel.

/// Format a whole-dollar amount with comma thousands separators: `$432,000`
pub fn format_currency(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Insert a comma between every group of three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_small() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(432_000), "432,000");
        assert_eq!(group_thousands(3_000_000), "3,000,000");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn test_group_max() {
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(432_000), "$432,000");
    }
}
