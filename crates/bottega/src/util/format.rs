//! European number formatting: period for thousands, comma for decimals,
//! unit symbol after the number.

/// Group an unsigned digit string in threes with periods
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result
}

/// Format with a fixed number of decimals in European style.
///
/// A value that rounds to zero is printed without a minus sign.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (formatted.as_str(), None),
    };
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');

    let mut result = String::new();
    if value < 0.0 && !is_zero {
        result.push('-');
    }
    result.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        result.push(',');
        result.push_str(frac);
    }
    result
}

/// Currency without cents, e.g. `8.800 €`, `-1.250 €`
pub fn format_eur(value: f64) -> String {
    format!("{} €", format_decimal(value, 0))
}

/// Fraction as a percentage with one decimal, e.g. `35,7 %`
pub fn format_pct(value: f64) -> String {
    format!("{} %", format_decimal(value * 100.0, 1))
}

/// Dimensionless ratio, e.g. `1,03x`
pub fn format_ratio(value: f64) -> String {
    format!("{}x", format_decimal(value, 2))
}

/// Format a defined value, or `N/A` when it is undefined
pub fn format_optional(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map_or_else(|| "N/A".to_string(), format)
}

/// Sweep delta with explicit sign, e.g. `+2`, `-0,5`, `0`
pub fn format_delta(delta: f64) -> String {
    if delta == 0.0 {
        return "0".to_string();
    }
    let decimals = if delta.fract() == 0.0 { 0 } else { 2 };
    let magnitude = format_decimal(delta.abs(), decimals);
    let magnitude = if decimals > 0 {
        magnitude
            .trim_end_matches('0')
            .trim_end_matches(',')
            .to_string()
    } else {
        magnitude
    };
    if delta > 0.0 {
        format!("+{magnitude}")
    } else {
        format!("-{magnitude}")
    }
}
