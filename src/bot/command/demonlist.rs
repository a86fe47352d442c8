use crate::{
    bot::{command::CommandContext, embed},
    error::{api::ApiError, AppError},
    i18n::Text,
    model::{
        guild_settings::Language,
        pointercrate::{Demon, ListTier},
    },
    pagination::{Listing, Page, PageCursor, PageView, RenderResult, Selection},
    service::{
        demon::DemonService,
        level::LevelMetadataClient,
        pointercrate::{ListQuery, PointercrateClient, Resource},
    },
};

const PAGE_SIZE: usize = 25;

/// One tier of the demon list, paged by position.
pub struct DemonListListing<'a> {
    pub client: &'a PointercrateClient,
    pub levels: &'a LevelMetadataClient,
    pub lang: Language,
    pub tier: ListTier,
}

impl DemonListListing<'_> {
    fn title(&self) -> &'static str {
        let key = match self.tier {
            ListTier::Main => Text::MainList,
            ListTier::Extended => Text::ExtendedList,
            ListTier::Legacy => Text::LegacyList,
        };
        self.lang.text(key)
    }
}

#[serenity::async_trait]
impl Listing for DemonListListing<'_> {
    type Item = Demon;

    fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    fn offset_base(&self) -> u32 {
        self.tier.offset_base()
    }

    fn max_pages(&self) -> Option<u32> {
        self.tier.page_cap()
    }

    async fn fetch(&self, cursor: &PageCursor, _via: Option<&str>) -> Result<Page<Demon>, ApiError> {
        let query = ListQuery::new(Resource::ListedDemons)
            .limit(PAGE_SIZE as u32)
            .after(cursor.offset(PAGE_SIZE));
        self.client.fetch_page(&query).await
    }

    fn view(&self, result: &RenderResult<Demon>, cursor: &PageCursor) -> PageView {
        embed::demon::demon_list(self.lang, self.title(), &result.items, cursor.page_index)
    }

    async fn select(&self, value: &str, result: &RenderResult<Demon>) -> Result<Selection, ApiError> {
        let Some(demon) = result.items.iter().find(|demon| demon.id.to_string() == value) else {
            return Ok(Selection::Ignore);
        };

        let detail = DemonService::new(self.client, self.levels)
            .detail(demon.clone())
            .await?;

        Ok(Selection::Detail(embed::demon::demon_detail(
            self.lang,
            &detail,
            &self.client.demon_permalink(detail.demon.id),
            self.levels.base().as_str(),
        )))
    }
}

pub async fn run(cx: &CommandContext<'_>, tier: ListTier) -> Result<(), AppError> {
    let listing = DemonListListing {
        client: &cx.state.pointercrate,
        levels: &cx.state.levels,
        lang: cx.lang(),
        tier,
    };

    let mut transport = cx.transport();
    let end = cx.list_controller(&mut transport).run(&listing, 1).await?;
    tracing::debug!("{:?} list session ended: {:?}", tier, end);

    Ok(())
}
