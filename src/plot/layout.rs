//! Grid sizing for multi-panel figures.

/// Rows × columns for `n` panels: the squarest grid that fits them all,
/// favoring an extra column over an extra row.
pub fn best_layout(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let columns = (n as f64).sqrt().ceil() as usize;
    let rows = (n + columns - 1) / columns;
    (rows, columns)
}
