//! Value formatting
//!
//! Number rendering shared by metric cards, summary tiles and the CLI.
//! Output matches what a browser shows for the same values: shortest
//! decimal form, and en-US digit grouping for counts.

/// Format a number in its shortest form (`87`, `12.5`, `4.2`).
pub fn number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format a number with comma thousands separators (`12,543`).
///
/// The fractional part, if any, is kept as-is.
pub fn grouped(value: f64) -> String {
    let plain = number(value);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(plain.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*d as char);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_shortest_form() {
        assert_eq!(number(87.0), "87");
        assert_eq!(number(12.5), "12.5");
        assert_eq!(number(4.2), "4.2");
        assert_eq!(number(0.0), "0");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(12543.0), "12,543");
        assert_eq!(grouped(12450.0), "12,450");
        assert_eq!(grouped(28765.0), "28,765");
        assert_eq!(grouped(342.0), "342");
        assert_eq!(grouped(1234567.0), "1,234,567");
        assert_eq!(grouped(-1500.0), "-1,500");
        assert_eq!(grouped(1500.25), "1,500.25");
    }
}
