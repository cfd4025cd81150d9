use serde::{Deserialize, Serialize};

use super::row::Row;

/// Hard ceiling on the page size; larger requests are clamped, never
/// rejected.
pub const MAX_PAGE_SIZE: usize = 100;

const DEFAULT_PAGE_SIZE: usize = 10;

/// Current pagination position. `page_index` is 0-based and may point past
/// the end of the data (that yields an empty page, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }
}

/// Paginate stage: the contiguous slice
/// `[index*size, index*size + size)` of the sorted rows.
pub fn paginate(rows: &[Row], page: PageState) -> &[Row] {
    let size = page.page_size.clamp(1, MAX_PAGE_SIZE);
    let start = page.page_index.saturating_mul(size);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + size).min(rows.len());
    &rows[start..end]
}

/// Number of pages for a row count; at least 1 so the pager always has a
/// current page to show.
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    let size = page_size.clamp(1, MAX_PAGE_SIZE);
    if row_count == 0 {
        1
    } else {
        row_count.div_ceil(size)
    }
}

/// Page-size options offered to the user: clamped to [`MAX_PAGE_SIZE`],
/// de-duplicated and sorted ascending.
pub fn sanitize_page_size_options(options: &[usize]) -> Vec<usize> {
    let mut sizes: Vec<usize> = options
        .iter()
        .map(|&s| s.clamp(1, MAX_PAGE_SIZE))
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (0..n).map(|i| Row::new(i.to_string())).collect()
    }

    #[test]
    fn test_page_slice() {
        // page_size=1, page_index=1 over 3 rows picks exactly the second row
        let rows = rows(3);
        let page = paginate(&rows, PageState::new(1, 1));
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "1");
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let rows = rows(5);
        assert!(paginate(&rows, PageState::new(3, 10)).is_empty());
        assert!(paginate(&[], PageState::new(0, 10)).is_empty());
    }

    #[test]
    fn test_last_page_is_partial() {
        let rows = rows(25);
        let page = paginate(&rows, PageState::new(2, 10));
        assert_eq!(page.len(), 5);
    }

    #[test]
    fn test_consecutive_pages_partition_without_overlap() {
        let rows = rows(23);
        let size = 7;
        let mut seen = Vec::new();
        for index in 0..total_pages(rows.len(), size) {
            let page = paginate(&rows, PageState::new(index, size));
            assert!(page.len() <= size);
            seen.extend(page.iter().map(|r| r.id.clone()));
        }
        let expected: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_page_size_clamped_to_max() {
        assert_eq!(PageState::new(0, 500).page_size, MAX_PAGE_SIZE);
        assert_eq!(PageState::new(0, 0).page_size, 1);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_sanitize_options() {
        // Mirrors the widget's default option list: clamp, dedup, ascending.
        let sanitized = sanitize_page_size_options(&[500, 10, 300, 50, 10, 100, 200, 30]);
        assert_eq!(sanitized, vec![10, 30, 50, 100]);
    }
}
