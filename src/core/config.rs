/// Default board height in boxes for new sessions.
pub const DEFAULT_ROWS: usize = 3;
/// Default board width in boxes for new sessions.
pub const DEFAULT_COLS: usize = 3;
pub const NUM_PLAYERS: usize = 2;

/// Number of horizontal edges on a `rows x cols` board, `None` on overflow.
pub const fn horizontal_len(rows: usize, cols: usize) -> Option<usize> {
    match rows.checked_add(1) {
        Some(dot_rows) => dot_rows.checked_mul(cols),
        None => None,
    }
}

/// Number of vertical edges on a `rows x cols` board, `None` on overflow.
pub const fn vertical_len(rows: usize, cols: usize) -> Option<usize> {
    match cols.checked_add(1) {
        Some(dot_cols) => rows.checked_mul(dot_cols),
        None => None,
    }
}

/// Length of the flat state vector, horizontal block plus vertical block.
pub const fn state_vector_len(rows: usize, cols: usize) -> Option<usize> {
    match (horizontal_len(rows, cols), vertical_len(rows, cols)) {
        (Some(h), Some(v)) => h.checked_add(v),
        _ => None,
    }
}
