//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// Printable width of `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    UnicodeWidthStr::width(re.replace_all(s, "").as_ref())
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            separator: '-',
        }
    }

    /// Character used for the rule under the header (first char of `sep`).
    pub fn with_separator(mut self, sep: &str) -> Self {
        if let Some(c) = sep.chars().next() {
            self.separator = c;
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut w: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(w.len()) {
                w[i] = w[i].max(visible_width(cell));
            }
        }
        w
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        push_line(&mut out, &self.headers, &widths);

        let rule_len = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(rule_len));
        out.push('\n');

        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = w.saturating_sub(visible_width(cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join(" ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_the_widest_cell() {
        let mut t = Table::new(["Day", "Events"]);
        t.add_row(vec!["2024-01-01".into(), "2".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Day        Events");
        assert_eq!(lines[1], "-----------------");
        assert_eq!(lines[2], "2024-01-01 2");
    }

    #[test]
    fn ansi_codes_do_not_count_towards_width() {
        assert_eq!(visible_width("\x1b[32mok\x1b[0m"), 2);
        let mut t = Table::new(["A", "B"]).with_separator("=");
        t.add_row(vec!["\x1b[1mxy\x1b[0m".into(), "z".into()]);
        let out = t.render();
        assert!(out.contains("==="));
        assert!(out.lines().next().unwrap().starts_with("A  B"));
    }
}
