//! Rupee formatting helpers shared by the chart and the reports.

pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats `value` as rupees with thousands separators and `decimals`
/// fractional digits, e.g. `₹1,234,567.89`.
pub fn format_currency(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction}"),
        None => format!("{sign}{CURRENCY_SYMBOL}{grouped}"),
    }
}

/// Formats a percentage with one decimal, e.g. `60.0%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}
