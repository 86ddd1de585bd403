//! Table rendering for formatted output.

use console::{measure_text_width, pad_str, Alignment};

use super::theme::AgentrigTheme;

/// A box-drawn table whose columns size to their widest cell.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row. Cells beyond the header count are dropped.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();

        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render without styling.
    pub fn render(&self) -> String {
        self.render_with(&AgentrigTheme::plain())
    }

    /// Render with the theme's header and border styles.
    pub fn render_with(&self, theme: &AgentrigTheme) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.border(theme, '┌', '┬', '┐'));
        let headers: Vec<String> = self
            .headers
            .iter()
            .map(|h| theme.header.apply_to(h).to_string())
            .collect();
        lines.push(self.row(theme, &headers));
        lines.push(self.border(theme, '├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.row(theme, row));
        }
        lines.push(self.border(theme, '└', '┴', '┘'));

        lines.join("\n")
    }

    fn border(&self, theme: &AgentrigTheme, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        let line = format!("{left}{}{right}", segments.join(&mid.to_string()));
        theme.border.apply_to(line).to_string()
    }

    fn row(&self, theme: &AgentrigTheme, row: &[String]) -> String {
        let bar = theme.border.apply_to("│").to_string();
        let mut s = bar.clone();

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            s.push(' ');
            s.push_str(&pad_str(cell, *width, Alignment::Left, None));
            s.push(' ');
            s.push_str(&bar);
        }

        s
    }
}
