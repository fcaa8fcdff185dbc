//! Number formatting for prices

/// Format a number with a space as thousands separator and fixed decimals
///
/// # Examples
///
/// ```rust,ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Insert a space every 3 digits from the right
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money value with 2 decimals and thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Price as shown to customers, e.g. "€1 234.50"
pub fn format_euro(value: f64) -> String {
    format!("€{}", format_money(value))
}
