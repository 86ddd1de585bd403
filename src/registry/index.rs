//! Template index (catalog) parsing.
//!
//! The index is a markdown table named [`INDEX_FILE`]:
//!
//! ```text
//! | ID     | Name       | Description          | File       |
//! |--------|------------|----------------------|------------|
//! | python | Python API | FastAPI service      | python.md  |
//! ```

use serde::Serialize;

/// File name of the index inside a template store.
pub const INDEX_FILE: &str = "_index.md";

/// Minimum number of cells in a data row.
const MIN_CELLS: usize = 4;

/// One template listed in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Template id used for lookup.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Template file path, relative to the store root.
    pub file: String,
}

/// Parse index text into entries, in source order.
///
/// Only rows after the header row (first cell `id`, any case) count. Dash
/// separator rows and rows with fewer than four cells are skipped. Never
/// fails; text without a table yields no entries.
pub fn parse_index_text(text: &str) -> Vec<IndexEntry> {
    let mut entries = Vec::new();
    let mut in_table = false;

    for line in text.lines() {
        let Some(cells) = table_cells(line) else {
            continue;
        };
        if cells.len() < MIN_CELLS {
            continue;
        }

        if cells[0].eq_ignore_ascii_case("id") {
            in_table = true;
            continue;
        }
        if cells[0].starts_with('-') {
            continue;
        }

        if in_table {
            entries.push(IndexEntry {
                id: cells[0].to_string(),
                name: cells[1].to_string(),
                description: cells[2].to_string(),
                file: cells[3].to_string(),
            });
        }
    }

    entries
}

/// Split a table row into trimmed cells, dropping empty edge cells.
fn table_cells(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('|') {
        return None;
    }

    let mut cells: Vec<&str> = trimmed.split('|').map(str::trim).collect();
    while cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    Some(cells)
}
