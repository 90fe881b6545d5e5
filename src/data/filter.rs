use super::model::{Row, Table};

/// Rows rendered by a table page; the filtered set itself is not capped.
pub const PREVIEW_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// Free-text search
// ---------------------------------------------------------------------------

/// The row flattened into one string: every cell's string form, concatenated
/// without a separator.
pub fn row_text(row: &Row) -> String {
    row.cells.iter().map(|c| c.to_string()).collect()
}

/// Return indices of rows that match `query`, in table order.
///
/// A row matches when its flattened text contains the query, ignoring case.
/// Because the cells are joined before testing, a query may straddle two
/// neighbouring cells ("3foo" matches a `3` followed by `foo`).
/// An empty query keeps every row.
pub fn search(table: &Table, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..table.len()).collect();
    }
    let needle = query.to_lowercase();
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row_text(row).to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// The part of a filtered set that actually gets rendered.
pub fn preview(indices: &[usize]) -> &[usize] {
    &indices[..indices.len().min(PREVIEW_ROWS)]
}
