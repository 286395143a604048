//!
//! Human-readable formatting of measured values.
//!

///
/// Formats a duration given in nanoseconds.
///
/// The unit is chosen after rounding, so that `999.6` is shown as `1.00μs` rather than `1000ns`.
///
pub fn duration_ns(nanoseconds: f64) -> String {
    if nanoseconds.round() < 1_000.0 {
        format!("{nanoseconds:.0}ns")
    } else if rounds_below_thousand(nanoseconds / 1_000.0) {
        format!("{:.2}μs", nanoseconds / 1_000.0)
    } else if rounds_below_thousand(nanoseconds / 1_000_000.0) {
        format!("{:.2}ms", nanoseconds / 1_000_000.0)
    } else {
        format!("{:.2}s", nanoseconds / 1_000_000_000.0)
    }
}

///
/// Formats a duration given in seconds.
///
pub fn duration_seconds(seconds: f64) -> String {
    let milliseconds = seconds * 1_000.0;
    if rounds_below_thousand(milliseconds * 1_000.0) {
        format!("{:.2}μs", milliseconds * 1_000.0)
    } else if rounds_below_thousand(milliseconds) {
        format!("{milliseconds:.2}ms")
    } else {
        format!("{:.2}s", milliseconds / 1_000.0)
    }
}

///
/// Whether `value` is shown below `1000.00` with two decimals.
///
fn rounds_below_thousand(value: f64) -> bool {
    (value * 100.0).round() < 100_000.0
}

///
/// Formats a rate given in items per second.
///
pub fn throughput(per_second: f64) -> String {
    if per_second >= 1_000_000.0 {
        format!("{:.2}M/s", per_second / 1_000_000.0)
    } else if per_second >= 1_000.0 {
        format!("{:.2}K/s", per_second / 1_000.0)
    } else {
        format!("{per_second:.2}/s")
    }
}

///
/// Formats an integer with comma thousands separators.
///
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}
