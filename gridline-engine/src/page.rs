//! Fixed-size pagination over a derived row sequence.

/// The contiguous slice for a 1-based page index, clipped to bounds.
///
/// An out-of-range page yields an empty slice; the caller is responsible
/// for clamping the page index when the sequence shrinks (see the delete
/// flow in the engine).
pub fn page_slice<'a, T>(rows: &'a [T], page_index: usize, page_size: usize) -> &'a [T] {
    if page_index == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_index - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Total page count: `ceil(count / page_size)`. An empty sequence has 0
/// pages (renderers show it as "page 1 of 0").
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}
