use crate::pagination::cursor::PageCursor;

/// One page of a remote listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Absolute URL of the following page, when the source links pages.
    pub next: Option<String>,
    /// Absolute URL of the preceding page, when the source links pages.
    pub prev: Option<String>,
    /// Whether the source may hold entries past this page.
    pub more: bool,
}

impl<T> Page<T> {
    /// Page sliced out of a fully fetched collection.
    pub fn slice(all: Vec<T>, cursor: &PageCursor, page_size: usize) -> Self {
        let start = (cursor.offset(page_size) as usize).min(all.len());
        let end = (start + page_size).min(all.len());
        let more = end < all.len();

        let items = all.into_iter().skip(start).take(end - start).collect();

        Self {
            items,
            next: None,
            prev: None,
            more,
        }
    }
}

/// What a page turn produced, and which controls it enables.
///
/// Recomputed from a fresh fetch on every turn.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult<T> {
    pub items: Vec<T>,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> RenderResult<T> {
    /// Derives control availability for a fetched page.
    ///
    /// Follow requires a full page, a source that may have more, and room under
    /// the page cap. Back requires not being on the first page.
    pub fn compute(page: Page<T>, cursor: &PageCursor, page_size: usize, page_cap: Option<u32>) -> Self {
        let under_cap = page_cap.map_or(true, |cap| cursor.page_index < cap);
        let has_next = page.items.len() == page_size && page.more && under_cap;

        Self {
            items: page.items,
            has_next,
            has_prev: cursor.page_index > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(count: usize) -> Page<u32> {
        Page {
            items: (0..count as u32).collect(),
            next: None,
            prev: None,
            more: true,
        }
    }

    #[test]
    fn partial_first_page_disables_both_directions() {
        let result = RenderResult::compute(page(3), &PageCursor::first(0), 25, None);

        assert!(!result.has_next);
        assert!(!result.has_prev);
        assert_eq!(result.items.len(), 3);
    }

    #[test]
    fn full_page_enables_follow() {
        let result = RenderResult::compute(page(25), &PageCursor::first(0), 25, None);

        assert!(result.has_next);
        assert!(!result.has_prev);
    }

    #[test]
    fn later_page_enables_back() {
        let result = RenderResult::compute(page(10), &PageCursor::new(2, 0), 25, None);

        assert!(result.has_prev);
        assert!(!result.has_next);
    }

    #[test]
    fn page_cap_disables_follow() {
        let result = RenderResult::compute(page(25), &PageCursor::new(3, 75), 25, Some(3));

        assert!(!result.has_next);
    }

    #[test]
    fn missing_next_link_disables_follow() {
        let mut last = page(25);
        last.more = false;

        let result = RenderResult::compute(last, &PageCursor::first(0), 25, None);

        assert!(!result.has_next);
    }

    #[test]
    fn same_page_renders_identically() {
        let cursor = PageCursor::new(2, 0);
        let first = RenderResult::compute(page(25), &cursor, 25, None);
        let second = RenderResult::compute(page(25), &cursor, 25, None);

        assert_eq!(first, second);
    }

    #[test]
    fn slices_fetched_collection() {
        let all: Vec<u32> = (1..=45).collect();

        let first = Page::slice(all.clone(), &PageCursor::first(0), 20);
        assert_eq!(first.items.first(), Some(&1));
        assert!(first.more);

        let last = Page::slice(all.clone(), &PageCursor::new(3, 0), 20);
        assert_eq!(last.items, vec![41, 42, 43, 44, 45]);
        assert!(!last.more);

        let beyond = Page::slice(all, &PageCursor::new(9, 0), 20);
        assert!(beyond.items.is_empty());
    }
}
