//! Display formatting for currency amounts and percentages.

/// Render `value` as whole dollars with thousands separators.
///
/// The value is floored, never rounded: `1234.56` renders as `"$1,234"`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", non_finite_text(value));
    }

    let floored = normalize_zero(value.floor());
    let digits = format!("{floored:.0}");
    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };

    format!("${sign}{}", group_thousands(magnitude))
}

/// Render `value` with one decimal place and a `%` suffix.
///
/// Exact ties at the second decimal round away from zero (`0.25` → `"0.3%"`).
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}%", non_finite_text(value));
    }

    let value = normalize_zero(value);
    let rounded = if is_tenths_tie(value) {
        value.signum() * (value.abs() * 10.0).ceil() / 10.0
    } else {
        value
    };

    format!("{rounded:.1}%")
}

fn group_thousands(digits: &str) -> String {
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

// `{:.1}` breaks exact ties to even. A binary float sits exactly halfway
// between two tenths only when it is an odd number of quarters.
fn is_tenths_tie(value: f64) -> bool {
    let quarters = value * 4.0;
    quarters.fract() == 0.0 && quarters % 2.0 != 0.0
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

fn non_finite_text(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_negative() {
        "-Infinity"
    } else {
        "Infinity"
    }
}
