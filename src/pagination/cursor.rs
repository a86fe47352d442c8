/// Position of a session within a paginated resource.
///
/// `page_index` is 1-based. `offset_base` shifts offset-paged resources, e.g. the
/// extended list starts after the 75 main list positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page_index: u32,
    pub offset_base: u32,
}

impl PageCursor {
    /// Cursor at `page_index`, clamped to the first page.
    pub fn new(page_index: u32, offset_base: u32) -> Self {
        Self {
            page_index: page_index.max(1),
            offset_base,
        }
    }

    pub fn first(offset_base: u32) -> Self {
        Self::new(1, offset_base)
    }

    /// Number of entries preceding this page.
    ///
    /// Saturates at `u32::MAX`, which no resource reaches, so an absurd page
    /// number fetches an empty page instead of wrapping onto a real one.
    pub fn offset(&self, page_size: usize) -> u32 {
        let page_size = u32::try_from(page_size).unwrap_or(u32::MAX);

        page_size
            .saturating_mul(self.page_index.saturating_sub(1))
            .saturating_add(self.offset_base)
    }

    pub fn next(&self) -> Self {
        Self::new(self.page_index.saturating_add(1), self.offset_base)
    }

    /// Previous page; stays on the first page.
    pub fn prev(&self) -> Self {
        Self::new(self.page_index.saturating_sub(1), self.offset_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_drops_below_first_page() {
        assert_eq!(PageCursor::new(0, 0).page_index, 1);
        assert_eq!(PageCursor::first(0).prev().page_index, 1);
    }

    #[test]
    fn offsets_from_base() {
        let cursor = PageCursor::first(75);
        assert_eq!(cursor.offset(25), 75);
        assert_eq!(cursor.next().offset(25), 100);
        assert_eq!(cursor.next().next().offset(25), 125);
    }

    #[test]
    fn huge_page_index_saturates() {
        assert_eq!(PageCursor::new(200_000_000, 0).offset(25), u32::MAX);
        assert_eq!(PageCursor::new(u32::MAX, 75).offset(25), u32::MAX);
        assert_eq!(PageCursor::new(u32::MAX, 0).next().page_index, u32::MAX);
    }

    #[test]
    fn next_then_prev_returns_to_same_page() {
        let cursor = PageCursor::new(4, 0);
        assert_eq!(cursor.next().prev(), cursor);
    }
}
