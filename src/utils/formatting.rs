//! Formatting utilities used for CLI and export outputs.

/// Averages render as `n/a` when undefined, never as `0`.
pub fn fmt_average(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.2}"),
        _ => "n/a".to_string(),
    }
}

pub fn fmt_hour(h: u32) -> String {
    format!("{h:02}:00")
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

pub fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}
