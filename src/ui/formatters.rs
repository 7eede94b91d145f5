/// Format a measured value for perfdata and threshold messages
///
/// Whole numbers drop their fraction (`80.0` -> `80`).
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Format an optional threshold, unset bounds render empty
pub fn format_bound(bound: Option<f64>) -> String {
    match bound {
        Some(b) if !b.is_nan() => format_value(b),
        _ => String::new(),
    }
}
