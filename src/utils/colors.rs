/// ANSI color helper utilities for terminal output.
use ansi_term::{Colour, Style};

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// 256-color ramp from dark blue to yellow, low → high density.
const RAMP: [u8; 8] = [17, 19, 25, 31, 37, 71, 149, 226];

/// Colour of a non-zero heatmap cell relative to the matrix maximum.
pub fn heat_colour(count: usize, max: usize) -> Option<Colour> {
    if count == 0 || max == 0 {
        return None;
    }
    let idx = (count * RAMP.len() - 1) / max;
    Some(Colour::Fixed(RAMP[idx.min(RAMP.len() - 1)]))
}

/// Two-column shaded block for one heatmap cell; zero cells are a grey dot.
pub fn shade_cell(count: usize, max: usize) -> String {
    match heat_colour(count, max) {
        Some(c) => Style::new().on(c).paint("  ").to_string(),
        None => format!("{GREY} ·{RESET}"),
    }
}

/// Right-aligned count; zero cells are greyed out.
pub fn digit_cell(count: usize, width: usize) -> String {
    if count == 0 {
        format!("{GREY}{:>width$}{RESET}", 0, width = width)
    } else {
        format!("{:>width$}", count, width = width)
    }
}
