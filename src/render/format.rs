//! en-US number formatting.

/// Groups an integer with thousands separators: `1234567` → `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats like `Number.prototype.toLocaleString("en-US")`: grouped integer
/// part and at most three fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scaled = (value.abs() * 1000.0).round() as u64;
    let (whole, frac) = (scaled / 1000, scaled % 1000);
    let sign = if value < 0.0 && scaled != 0 { "-" } else { "" };

    let mut out = format!("{}{}", sign, group_thousands(whole));
    if frac != 0 {
        let frac = format!("{:03}", frac);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// USD currency with two decimals: `28500.0` → `"$28,500.00"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(15000), "15,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn locale_numbers() {
        assert_eq!(format_number(28500.0), "28,500");
        assert_eq!(format_number(18999.5), "18,999.5");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(-1200.0), "-1,200");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn currency() {
        assert_eq!(format_currency(28500.0), "$28,500.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-12.0), "-$12.00");
    }
}
