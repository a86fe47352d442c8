use crate::{
    bot::{command::CommandContext, embed},
    error::{api::ApiError, AppError},
    model::{guild_settings::Language, pointercrate::RankedPlayer},
    pagination::{Listing, Page, PageCursor, PageView, RenderResult},
    service::pointercrate::PointercrateClient,
};

const PAGE_SIZE: usize = 25;
/// Highest page `/ranking` may start on; the ranking is far shorter than this.
pub const MAX_START_PAGE: u32 = 10_000;

/// The international player ranking, paged by rank offset.
pub struct RankingListing<'a> {
    pub client: &'a PointercrateClient,
    pub lang: Language,
}

#[serenity::async_trait]
impl Listing for RankingListing<'_> {
    type Item = RankedPlayer;

    fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    async fn fetch(
        &self,
        cursor: &PageCursor,
        _via: Option<&str>,
    ) -> Result<Page<RankedPlayer>, ApiError> {
        self.client
            .player_ranking(PAGE_SIZE as u32, cursor.offset(PAGE_SIZE), None)
            .await
    }

    fn view(&self, result: &RenderResult<RankedPlayer>, cursor: &PageCursor) -> PageView {
        embed::player::ranking(self.lang, &result.items, cursor.page_index)
    }
}

pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let start_page = start_page(cx.integer_option("page"));

    let listing = RankingListing {
        client: &cx.state.pointercrate,
        lang: cx.lang(),
    };

    let mut transport = cx.transport();
    let end = cx.list_controller(&mut transport).run(&listing, start_page).await?;
    tracing::debug!("Ranking session ended: {:?}", end);

    Ok(())
}

/// Page a session opens on, clamped to `1..=MAX_START_PAGE`.
fn start_page(option: Option<i64>) -> u32 {
    match option {
        Some(page) => u32::try_from(page.clamp(1, i64::from(MAX_START_PAGE))).unwrap_or(1),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_page_defaults_to_first() {
        assert_eq!(start_page(None), 1);
        assert_eq!(start_page(Some(0)), 1);
        assert_eq!(start_page(Some(-5)), 1);
    }

    #[test]
    fn start_page_is_capped() {
        assert_eq!(start_page(Some(3)), 3);
        assert_eq!(start_page(Some(200_000_000)), MAX_START_PAGE);
        assert_eq!(start_page(Some(i64::MAX)), MAX_START_PAGE);
    }
}
