pub mod json;
pub mod text;

pub const NOT_AVAILABLE: &str = "N/A";

/// Four decimals, `N/A` for NaN.
pub fn format_f64_4(v: f64) -> String {
    if v.is_nan() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{:.4}", v)
    }
}

pub fn format_f64_6(v: f64) -> String {
    if v.is_nan() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{:.6}", v)
    }
}

pub fn format_interval(ci: (f64, f64)) -> String {
    if ci.0.is_nan() || ci.1.is_nan() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("[{}, {}]", format_f64_4(ci.0), format_f64_4(ci.1))
    }
}

/// Percentage label for a confidence level, trimmed of trailing zeros.
/// A level below one never prints as `100%`.
pub fn format_percent(level: f64) -> String {
    let percent = level * 100.0;
    let fixed = format!("{:.6}", percent);
    let s = fixed.trim_end_matches('0').trim_end_matches('.');
    if s == "100" && level < 1.0 {
        return format!("{percent}%");
    }
    format!("{s}%")
}
