//! Table rendering utilities for CLI reports.

use unicode_width::UnicodeWidthStr;

/// Remove ANSI escape sequences, for width math on colored cells.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with a header rule made of `separator`. Column widths are
    /// computed on visible characters so colored cells line up.
    pub fn render(&self, separator: char) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(visible_width(cell));
                }
            }
        }

        let mut out = String::new();

        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(h);
            out.push_str(&" ".repeat(widths[i].saturating_sub(visible_width(h)) + 2));
        }
        out.push('\n');

        let rule_len: usize = widths.iter().map(|w| w + 2).sum();
        out.push_str(&separator.to_string().repeat(rule_len));
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(cell);
                if i < widths.len() {
                    out.push_str(&" ".repeat(widths[i].saturating_sub(visible_width(cell)) + 2));
                }
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_cells_do_not_skew_columns() {
        let mut t = Table::new(&["DATE", "STATE"]);
        t.add_row(vec!["2025-03-03".into(), "\x1b[31mERROR\x1b[0m".into()]);
        t.add_row(vec!["2025-03-04".into(), "OK".into()]);
        let rendered = t.render('-');

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(strip_ansi(lines[2]).len(), strip_ansi(lines[3]).len());
    }

    #[test]
    fn strip_ansi_removes_escapes() {
        assert_eq!(strip_ansi("\x1b[32mgreen\x1b[0m"), "green");
        assert_eq!(strip_ansi("plain"), "plain");
    }
}
