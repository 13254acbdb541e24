/// Format a slider value with a fixed number of decimals
pub fn format_param_value(value: f64, decimals: usize) -> String {
    // Avoid printing "-0.00" when a float slider lands just below zero
    let value = if value.abs() < 0.5 * 10f64.powi(-(decimals as i32)) {
        0.0
    } else {
        value
    };
    format!("{:.*}", decimals, value)
}

/// Format an axis tick label, using fewer decimals for larger magnitudes
pub fn format_axis_value(value: f64) -> String {
    let abs_value = value.abs();
    if abs_value == 0.0 {
        "0".to_string()
    } else if abs_value >= 10.0 {
        format!("{:.0}", value)
    } else if abs_value >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}
