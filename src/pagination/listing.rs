use crate::error::api::ApiError;
use crate::pagination::{
    cursor::PageCursor,
    page::{Page, RenderResult},
    view::PageView,
};

/// Outcome of picking an entry from a list page.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Show a detail view; its back button returns to the list.
    Detail(PageView),
    /// End the session and hand the value to the caller.
    Handoff(String),
    /// The value does not match anything on the page.
    Ignore,
}

/// A paginated remote resource and how to present it.
///
/// The controller owns navigation; a listing only knows how to fetch one page
/// and how to draw it. Views returned by [`Listing::view`] must not contain the
/// navigation row, the controller appends it.
#[serenity::async_trait]
pub trait Listing: Send + Sync {
    type Item: Clone + Send + Sync;

    fn page_size(&self) -> usize;

    /// Entries skipped before the first page.
    fn offset_base(&self) -> u32 {
        0
    }

    /// Last page a session may reach, if the resource is capped.
    fn max_pages(&self) -> Option<u32> {
        None
    }

    /// Fetches the page at `cursor`.
    ///
    /// `via` carries the link the previous page advertised for this direction, for
    /// resources that page by link rather than by offset.
    async fn fetch(&self, cursor: &PageCursor, via: Option<&str>)
        -> Result<Page<Self::Item>, ApiError>;

    fn view(&self, result: &RenderResult<Self::Item>, cursor: &PageCursor) -> PageView;

    async fn select(
        &self,
        _value: &str,
        _result: &RenderResult<Self::Item>,
    ) -> Result<Selection, ApiError> {
        Ok(Selection::Ignore)
    }
}
