use gridline_engine::page::{page_slice, total_pages};
use pretty_assertions::assert_eq;

// ── Slicing ──────────────────────────────────────────────────────

#[test]
fn first_page_takes_the_head() {
    let rows: Vec<u32> = (0..25).collect();
    assert_eq!(page_slice(&rows, 1, 10), (0..10).collect::<Vec<_>>());
}

#[test]
fn middle_page_is_contiguous() {
    let rows: Vec<u32> = (0..25).collect();
    assert_eq!(page_slice(&rows, 2, 10), (10..20).collect::<Vec<_>>());
}

#[test]
fn last_page_is_clipped() {
    let rows: Vec<u32> = (0..25).collect();
    assert_eq!(page_slice(&rows, 3, 10), (20..25).collect::<Vec<_>>());
}

#[test]
fn out_of_range_page_is_empty() {
    let rows: Vec<u32> = (0..25).collect();
    assert!(page_slice(&rows, 4, 10).is_empty());
    assert!(page_slice(&rows, 0, 10).is_empty());
}

#[test]
fn zero_page_size_is_empty() {
    let rows: Vec<u32> = (0..25).collect();
    assert!(page_slice(&rows, 1, 0).is_empty());
}

#[test]
fn empty_sequence_has_no_slices() {
    let rows: Vec<u32> = Vec::new();
    assert!(page_slice(&rows, 1, 10).is_empty());
}

// ── Page counts ──────────────────────────────────────────────────

#[test]
fn counts_round_up() {
    assert_eq!(total_pages(25, 10), 3);
    assert_eq!(total_pages(30, 10), 3);
    assert_eq!(total_pages(31, 10), 4);
}

#[test]
fn empty_sequence_has_zero_pages() {
    assert_eq!(total_pages(0, 10), 0);
}

#[test]
fn zero_page_size_has_zero_pages() {
    assert_eq!(total_pages(25, 0), 0);
}
