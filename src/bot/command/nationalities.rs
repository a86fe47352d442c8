use crate::{
    bot::{command::CommandContext, embed},
    error::{api::ApiError, AppError},
    model::{guild_settings::Language, pointercrate::NationScore},
    pagination::{Listing, Page, PageCursor, PageView, RenderResult},
    service::pointercrate::PointercrateClient,
};

const PAGE_SIZE: usize = 20;

/// Nations ordered by combined score.
///
/// The ranking is small enough to fetch whole and slice locally.
pub struct NationalitiesListing<'a> {
    pub client: &'a PointercrateClient,
    pub lang: Language,
}

#[serenity::async_trait]
impl Listing for NationalitiesListing<'_> {
    type Item = NationScore;

    fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    async fn fetch(
        &self,
        cursor: &PageCursor,
        _via: Option<&str>,
    ) -> Result<Page<NationScore>, ApiError> {
        let nations = self.client.all_nations().await?;

        Ok(Page::slice(nations, cursor, PAGE_SIZE))
    }

    fn view(&self, result: &RenderResult<NationScore>, cursor: &PageCursor) -> PageView {
        embed::nation::nationalities(
            self.lang,
            &result.items,
            cursor.offset(PAGE_SIZE).saturating_add(1),
            cursor.page_index,
        )
    }
}

pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let listing = NationalitiesListing {
        client: &cx.state.pointercrate,
        lang: cx.lang(),
    };

    let mut transport = cx.transport();
    let end = cx.list_controller(&mut transport).run(&listing, 1).await?;
    tracing::debug!("Nationalities session ended: {:?}", end);

    Ok(())
}
