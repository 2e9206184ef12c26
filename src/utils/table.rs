//! Table rendering utilities for CLI outputs.
//! Widths are display widths, so CJK text and emoji stay aligned.

use ansi_term::Style;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Full-width lines printed under the rows (summary rows)
    pub footer: Vec<String>,
}

/// Pad `s` on the right up to `width` display columns.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            footer: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn add_footer(&mut self, line: String) {
        self.footer.push(line);
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for line in std::iter::once(&self.headers).chain(&self.rows) {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        self.render_styled(|_, _| None)
    }

    /// Render, letting `style` pick a style per (column, cell text).
    /// Styling is applied after padding so escapes never skew alignment.
    pub fn render_styled<F>(&self, style: F) -> String
    where
        F: Fn(usize, &str) -> Option<Style>,
    {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (i, width) in widths.iter().enumerate() {
            let cell = self.headers.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&pad_display(cell, *width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, width) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let padded = pad_display(cell, *width);
                match style(i, cell) {
                    Some(s) => out.push_str(&s.paint(padded).to_string()),
                    None => out.push_str(&padded),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        for line in &self.footer {
            out.push_str(line);
            out.push('\n');
        }

        out
    }
}
