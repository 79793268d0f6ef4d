/// Column letter for a 0-based column index, `A` through `Z` only.
///
/// The timesheet never goes past column `L`; anything beyond `Z` would need
/// two letters and is rejected instead of being widened here.
pub fn column_letter(column: usize) -> char {
    assert!(
        column < 26,
        "column index {column} has no single-letter name"
    );
    (b'A' + column as u8) as char
}

/// A1-style reference from a 0-based column and a 1-based row number.
pub fn cell_ref(column: usize, row_1_based: usize) -> String {
    format!("{}{}", column_letter(column), row_1_based)
}

/// `C3:I3` style range between two references.
pub fn range_ref(from: (usize, usize), to: (usize, usize)) -> String {
    format!("{}:{}", cell_ref(from.0, from.1), cell_ref(to.0, to.1))
}
