/// Outcome of slicing one page out of a filtered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed, clamped into the valid range
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `[(page-1)*size, page*size)` out of `items`. The requested page is
/// clamped to `[1, total_pages]`; an empty input yields a single empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let items_slice = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: items_slice,
        page,
        total_pages,
        total_items: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_leading_items() {
        let items: Vec<i32> = (0..8).collect();
        let page = paginate(&items, 1, 6);
        assert_eq!(page.items, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 8);
    }

    #[test]
    fn last_page_holds_remainder() {
        let items: Vec<i32> = (0..8).collect();
        let page = paginate(&items, 2, 6);
        assert_eq!(page.items, vec![6, 7]);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn overflowing_page_clamps_to_last() {
        let items: Vec<i32> = (0..8).collect();
        let page = paginate(&items, 99, 6);
        assert_eq!(page.page, 2);
        assert_eq!(page.items, vec![6, 7]);
    }

    #[test]
    fn page_zero_clamps_to_first() {
        let items: Vec<i32> = (0..8).collect();
        let page = paginate(&items, 0, 6);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 6);
    }

    #[test]
    fn empty_input_yields_single_empty_page() {
        let items: Vec<i32> = Vec::new();
        let page = paginate(&items, 3, 6);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }
}
