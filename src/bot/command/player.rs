use crate::{
    bot::{command::CommandContext, embed},
    error::{api::ApiError, AppError},
    i18n::Text,
    model::{guild_settings::Language, pointercrate::RankedPlayer},
    pagination::{Listing, Page, PageCursor, PageView, RenderResult, Selection},
    service::{player::PlayerService, pointercrate::PointercrateClient},
};

const PAGE_SIZE: usize = 15;

/// Ranked players matching a name, paged by link.
pub struct PlayerSearchListing<'a> {
    pub client: &'a PointercrateClient,
    pub lang: Language,
    pub name: String,
}

#[serenity::async_trait]
impl Listing for PlayerSearchListing<'_> {
    type Item = RankedPlayer;

    fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    async fn fetch(
        &self,
        _cursor: &PageCursor,
        via: Option<&str>,
    ) -> Result<Page<RankedPlayer>, ApiError> {
        match via {
            Some(link) => self.client.fetch_link(link).await,
            None => self.client.search_players(&self.name, PAGE_SIZE as u32).await,
        }
    }

    fn view(&self, result: &RenderResult<RankedPlayer>, cursor: &PageCursor) -> PageView {
        embed::player::player_search(self.lang, &result.items, cursor.page_index)
    }

    async fn select(
        &self,
        value: &str,
        result: &RenderResult<RankedPlayer>,
    ) -> Result<Selection, ApiError> {
        let Some(player) = result.items.iter().find(|player| player.id.to_string() == value) else {
            return Ok(Selection::Ignore);
        };

        let profile = PlayerService::new(self.client).profile(player.clone()).await?;

        Ok(Selection::Detail(embed::player::profile(self.lang, &profile)))
    }
}

/// Shows a player's profile, or a paged search when several players match.
pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let client = &cx.state.pointercrate;
    let name = cx.string_option("name").unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return cx.reply_text(Text::MissingOption).await;
    }

    let first = client.search_players(&name, PAGE_SIZE as u32).await?;

    let player = match first.items.as_slice() {
        [] => return cx.reply_text(Text::PlayerNotFound).await,
        [player] if !first.more => player.clone(),
        _ => {
            let listing = PlayerSearchListing {
                client,
                lang: cx.lang(),
                name,
            };
            let mut transport = cx.transport();
            let end = cx.list_controller(&mut transport).run(&listing, 1).await?;
            tracing::debug!("Player search session ended: {:?}", end);
            return Ok(());
        }
    };

    let profile = PlayerService::new(client).profile(player).await?;

    let mut transport = cx.transport();
    cx.static_controller(&mut transport)
        .present(embed::player::profile(cx.lang(), &profile))
        .await?;

    Ok(())
}
