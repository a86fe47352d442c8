use std::time::Duration;

use tokio::time::Instant;

use crate::{
    error::AppError,
    i18n::Text,
    model::guild_settings::Language,
    pagination::{
        cursor::PageCursor,
        event::NavigationEvent,
        listing::{Listing, Selection},
        page::RenderResult,
        transport::SessionTransport,
        view::{PageView, ViewButton, ViewRow},
    },
};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The owner pressed close; the message was deleted.
    Closed,
    /// No event arrived in time; controls were disabled in place.
    TimedOut,
    /// A terminal message replaced the page.
    Errored(SessionFailure),
    /// The owner picked an entry the caller handles.
    Selected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFailure {
    /// The requested page had no entries.
    Empty,
    /// The remote API failed.
    Api,
}

/// State of a session between transitions.
struct Session<I> {
    cursor: PageCursor,
    /// Link used to reach the current page, for link-paged resources.
    via: Option<String>,
    next_link: Option<String>,
    prev_link: Option<String>,
    result: RenderResult<I>,
    view: PageView,
}

enum Transition {
    Turn {
        cursor: PageCursor,
        via: Option<String>,
    },
    Select(String),
    Close,
    Ignore,
}

impl<I> Session<I> {
    /// Decides what an owner's event does to the session.
    fn plan(&self, event: NavigationEvent) -> Transition {
        match event {
            NavigationEvent::Back if self.result.has_prev => Transition::Turn {
                cursor: self.cursor.prev(),
                via: self.prev_link.clone(),
            },
            NavigationEvent::Follow if self.result.has_next => Transition::Turn {
                cursor: self.cursor.next(),
                via: self.next_link.clone(),
            },
            NavigationEvent::Back | NavigationEvent::Follow => Transition::Ignore,
            NavigationEvent::Select(value) => Transition::Select(value),
            NavigationEvent::Close => Transition::Close,
        }
    }
}

enum Loaded<I> {
    Page(Session<I>),
    End(SessionEnd),
}

/// What ended a wait on a view without a list behind it.
enum Hold {
    Back,
    End(SessionEnd),
}

/// Drives one interactive session over a [`SessionTransport`].
pub struct PaginationController<'t, T: SessionTransport> {
    transport: &'t mut T,
    owner_id: u64,
    timeout: Duration,
    lang: Language,
}

impl<'t, T: SessionTransport> PaginationController<'t, T> {
    pub fn new(transport: &'t mut T, owner_id: u64, timeout: Duration, lang: Language) -> Self {
        Self {
            transport,
            owner_id,
            timeout,
            lang,
        }
    }

    /// Runs a list session starting at `start_page` until it ends.
    pub async fn run<L: Listing>(
        &mut self,
        listing: &L,
        start_page: u32,
    ) -> Result<SessionEnd, AppError> {
        let cursor = PageCursor::new(start_page, listing.offset_base());

        let mut session = match self.load(listing, cursor, None).await? {
            Loaded::Page(session) => session,
            Loaded::End(end) => return Ok(end),
        };

        let mut deadline = Instant::now() + self.timeout;

        loop {
            let Some(event) = self.wait_until(deadline).await? else {
                self.transport.render(&session.view.disabled()).await?;
                return Ok(SessionEnd::TimedOut);
            };

            match session.plan(event) {
                Transition::Ignore => {
                    self.transport.acknowledge().await?;
                }
                Transition::Close => {
                    self.transport.close().await?;
                    return Ok(SessionEnd::Closed);
                }
                Transition::Turn { cursor, via } => {
                    session = match self.load(listing, cursor, via).await? {
                        Loaded::Page(session) => session,
                        Loaded::End(end) => return Ok(end),
                    };
                    deadline = Instant::now() + self.timeout;
                }
                Transition::Select(value) => {
                    let selection = match listing.select(&value, &session.result).await {
                        Ok(selection) => selection,
                        Err(e) => {
                            tracing::warn!("Failed to resolve selection {}: {}", value, e);
                            return self.fail(Text::UnknownError, SessionFailure::Api).await;
                        }
                    };

                    match selection {
                        Selection::Ignore => self.transport.acknowledge().await?,
                        Selection::Handoff(value) => return Ok(SessionEnd::Selected(value)),
                        Selection::Detail(view) => {
                            let view = view.with_row(ViewRow::Buttons(vec![
                                ViewButton::back(),
                                ViewButton::close(),
                            ]));
                            self.transport.render(&view).await?;

                            match self.hold(&view, true).await? {
                                Hold::End(end) => return Ok(end),
                                Hold::Back => {
                                    let via = session.via.clone();
                                    session = match self.load(listing, session.cursor, via).await? {
                                        Loaded::Page(session) => session,
                                        Loaded::End(end) => return Ok(end),
                                    };
                                    deadline = Instant::now() + self.timeout;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Shows a static view with a close button until it is closed or expires.
    pub async fn present(&mut self, view: PageView) -> Result<SessionEnd, AppError> {
        let view = view.with_row(ViewRow::close_only());
        self.transport.render(&view).await?;

        match self.hold(&view, false).await? {
            Hold::End(end) => Ok(end),
            Hold::Back => Ok(SessionEnd::Closed),
        }
    }

    /// Fetches and renders the page at `cursor`, or the terminal message.
    async fn load<L: Listing>(
        &mut self,
        listing: &L,
        cursor: PageCursor,
        via: Option<String>,
    ) -> Result<Loaded<L::Item>, AppError> {
        let page = match listing.fetch(&cursor, via.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Failed to fetch page {}: {}", cursor.page_index, e);
                let end = self.fail(Text::UnknownError, SessionFailure::Api).await?;
                return Ok(Loaded::End(end));
            }
        };

        let next_link = page.next.clone();
        let prev_link = page.prev.clone();
        let result = RenderResult::compute(page, &cursor, listing.page_size(), listing.max_pages());

        if result.items.is_empty() {
            let text = if cursor.page_index == 1 {
                Text::NoResults
            } else {
                Text::PageLimitReached
            };
            let end = self.fail(text, SessionFailure::Empty).await?;
            return Ok(Loaded::End(end));
        }

        let view = listing
            .view(&result, &cursor)
            .with_row(ViewRow::navigation(result.has_prev, result.has_next));
        self.transport.render(&view).await?;

        Ok(Loaded::Page(Session {
            cursor,
            via,
            next_link,
            prev_link,
            result,
            view,
        }))
    }

    async fn fail(&mut self, text: Text, failure: SessionFailure) -> Result<SessionEnd, AppError> {
        self.transport
            .render(&PageView::notice(self.lang.text(text)))
            .await?;

        Ok(SessionEnd::Errored(failure))
    }

    /// Waits on a view that only offers close, and back when `allow_back` is set.
    async fn hold(&mut self, view: &PageView, allow_back: bool) -> Result<Hold, AppError> {
        let deadline = Instant::now() + self.timeout;

        loop {
            match self.wait_until(deadline).await? {
                None => {
                    self.transport.render(&view.disabled()).await?;
                    return Ok(Hold::End(SessionEnd::TimedOut));
                }
                Some(NavigationEvent::Close) => {
                    self.transport.close().await?;
                    return Ok(Hold::End(SessionEnd::Closed));
                }
                Some(NavigationEvent::Back) if allow_back => return Ok(Hold::Back),
                Some(_) => self.transport.acknowledge().await?,
            }
        }
    }

    /// Next event from the session owner, or `None` once `deadline` passes.
    ///
    /// Events from other users are answered with an ephemeral notice and do not
    /// extend the deadline.
    async fn wait_until(&mut self, deadline: Instant) -> Result<Option<NavigationEvent>, AppError> {
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(None);
            }

            let Some(incoming) = self.transport.next_event(remaining).await else {
                return Ok(None);
            };

            if incoming.user_id != self.owner_id {
                self.transport
                    .reject(self.lang.text(Text::ForeignSession))
                    .await?;
                continue;
            }

            match incoming.event {
                Some(event) => return Ok(Some(event)),
                None => self.transport.acknowledge().await?,
            }
        }
    }
}
