//! Unit conversion and number rendering for reports

/// Divisor used for every nanosecond to second conversion
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Significant digits used when rendering seconds
const SIGNIFICANT_DIGITS: i32 = 6;

/// Convert nanoseconds to seconds
#[inline]
pub fn ns_to_s(nanos: u64) -> f64 {
    nanos as f64 / NANOS_PER_SECOND
}

/// Render a value the way a default C++ output stream does (`%g` with six
/// significant digits): fixed notation for moderate exponents, scientific
/// with a two-digit signed exponent otherwise, trailing zeros removed.
///
/// ```
/// use simplebench_core::format_seconds;
///
/// assert_eq!(format_seconds(0.25), "0.25");
/// assert_eq!(format_seconds(1.5e-8), "1.5e-08");
/// assert_eq!(format_seconds(1234567.0), "1.23457e+06");
/// ```
pub fn format_seconds(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to the target precision first; the exponent after rounding picks the notation
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
