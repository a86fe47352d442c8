use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::{
    bot::{command::CommandContext, embed},
    error::{api::ApiError, AppError},
    i18n::Text,
    model::{guild_settings::Language, pointercrate::Demon, profile::DemonDetail},
    pagination::{Listing, Page, PageCursor, PageView, RenderResult, Selection},
    service::{demon::DemonService, level::LevelMetadataClient, pointercrate::PointercrateClient},
};

const PAGE_SIZE: usize = 15;

pub fn options(command: CreateCommand) -> CreateCommand {
    command
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "position",
                "Position of the demon on the list",
            )
            .min_int_value(1),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "name",
            "Name or part of the name of the demon",
        ))
}

/// Demons matching a name, paged by the links Pointercrate returns.
pub struct LevelSearchListing<'a> {
    pub client: &'a PointercrateClient,
    pub levels: &'a LevelMetadataClient,
    pub lang: Language,
    pub name: String,
}

impl LevelSearchListing<'_> {
    fn detail_view(&self, detail: &DemonDetail) -> PageView {
        embed::demon::demon_detail(
            self.lang,
            detail,
            &self.client.demon_permalink(detail.demon.id),
            self.levels.base().as_str(),
        )
    }
}

#[serenity::async_trait]
impl Listing for LevelSearchListing<'_> {
    type Item = Demon;

    fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    async fn fetch(&self, _cursor: &PageCursor, via: Option<&str>) -> Result<Page<Demon>, ApiError> {
        match via {
            Some(link) => self.client.fetch_link(link).await,
            None => self.client.search_demons(&self.name, PAGE_SIZE as u32).await,
        }
    }

    fn view(&self, result: &RenderResult<Demon>, cursor: &PageCursor) -> PageView {
        embed::demon::demon_search(self.lang, &result.items, cursor.page_index)
    }

    async fn select(&self, value: &str, result: &RenderResult<Demon>) -> Result<Selection, ApiError> {
        let Some(demon) = result.items.iter().find(|demon| demon.id.to_string() == value) else {
            return Ok(Selection::Ignore);
        };

        let detail = DemonService::new(self.client, self.levels)
            .detail(demon.clone())
            .await?;

        Ok(Selection::Detail(self.detail_view(&detail)))
    }
}

/// Looks a demon up by position, or searches by name.
///
/// A position or a name search with a single match shows the demon directly;
/// anything else opens a paged search.
pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let state = cx.state;
    let service = DemonService::new(&state.pointercrate, &state.levels);

    let listing = LevelSearchListing {
        client: &state.pointercrate,
        levels: &state.levels,
        lang: cx.lang(),
        name: cx.string_option("name").unwrap_or_default().trim().to_string(),
    };

    let detail = if let Some(position) = cx.integer_option("position") {
        let position = u32::try_from(position.max(1)).unwrap_or(u32::MAX);
        service.detail_at_position(position).await?
    } else if !listing.name.is_empty() {
        let first = state.pointercrate.search_demons(&listing.name, PAGE_SIZE as u32).await?;

        match first.items.as_slice() {
            [] => None,
            [demon] if !first.more => Some(service.detail(demon.clone()).await?),
            _ => {
                let mut transport = cx.transport();
                let end = cx.list_controller(&mut transport).run(&listing, 1).await?;
                tracing::debug!("Level search session ended: {:?}", end);
                return Ok(());
            }
        }
    } else {
        return cx.reply_text(Text::MissingOption).await;
    };

    let Some(detail) = detail else {
        return cx.reply_text(Text::LevelNotFound).await;
    };

    let mut transport = cx.transport();
    cx.static_controller(&mut transport)
        .present(listing.detail_view(&detail))
        .await?;

    Ok(())
}
