use crate::{
    bot::{command::CommandContext, embed},
    error::{api::ApiError, AppError},
    model::{
        guild_settings::Language,
        pointercrate::{NationScore, RankedPlayer},
    },
    pagination::{Listing, Page, PageCursor, PageView, RenderResult, Selection, SessionEnd},
    service::pointercrate::PointercrateClient,
};

const PICKER_PAGE_SIZE: usize = 20;
const LEADERBOARD_PAGE_SIZE: usize = 15;

/// Countries with at least one ranked player, alphabetically.
pub struct CountryPickerListing<'a> {
    pub client: &'a PointercrateClient,
    pub lang: Language,
}

#[serenity::async_trait]
impl Listing for CountryPickerListing<'_> {
    type Item = NationScore;

    fn page_size(&self) -> usize {
        PICKER_PAGE_SIZE
    }

    async fn fetch(
        &self,
        cursor: &PageCursor,
        _via: Option<&str>,
    ) -> Result<Page<NationScore>, ApiError> {
        let mut nations = self.client.all_nations().await?;
        nations.sort_by(|a, b| a.nation.cmp(&b.nation));

        Ok(Page::slice(nations, cursor, PICKER_PAGE_SIZE))
    }

    fn view(&self, result: &RenderResult<NationScore>, cursor: &PageCursor) -> PageView {
        embed::nation::country_picker(
            self.lang,
            &result.items,
            cursor.offset(PICKER_PAGE_SIZE).saturating_add(1),
            cursor.page_index,
        )
    }

    async fn select(
        &self,
        value: &str,
        result: &RenderResult<NationScore>,
    ) -> Result<Selection, ApiError> {
        let known = result.items.iter().any(|nation| nation.country_code == value);

        Ok(if known {
            Selection::Handoff(value.to_string())
        } else {
            Selection::Ignore
        })
    }
}

/// Players of one country, paged by link.
pub struct NationLeaderboardListing<'a> {
    pub client: &'a PointercrateClient,
    pub lang: Language,
    pub country_code: String,
}

#[serenity::async_trait]
impl Listing for NationLeaderboardListing<'_> {
    type Item = RankedPlayer;

    fn page_size(&self) -> usize {
        LEADERBOARD_PAGE_SIZE
    }

    async fn fetch(
        &self,
        _cursor: &PageCursor,
        via: Option<&str>,
    ) -> Result<Page<RankedPlayer>, ApiError> {
        match via {
            Some(link) => self.client.fetch_link(link).await,
            None => {
                self.client
                    .player_ranking(LEADERBOARD_PAGE_SIZE as u32, 0, Some(&self.country_code))
                    .await
            }
        }
    }

    fn view(&self, result: &RenderResult<RankedPlayer>, cursor: &PageCursor) -> PageView {
        let nation = result
            .items
            .iter()
            .find_map(|player| player.nationality.as_ref())
            .map(|nationality| nationality.nation.as_str())
            .unwrap_or(self.country_code.as_str());

        embed::player::nation_leaderboard(
            self.lang,
            nation,
            &self.country_code,
            &result.items,
            cursor.offset(LEADERBOARD_PAGE_SIZE).saturating_add(1),
            cursor.page_index,
        )
    }
}

/// Picks a country, then pages through its player leaderboard on the same message.
pub async fn run(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let client = &cx.state.pointercrate;
    let picker = CountryPickerListing {
        client,
        lang: cx.lang(),
    };

    let mut transport = cx.transport();
    let mut controller = cx.list_controller(&mut transport);

    let SessionEnd::Selected(country_code) = controller.run(&picker, 1).await? else {
        return Ok(());
    };

    let leaderboard = NationLeaderboardListing {
        client,
        lang: cx.lang(),
        country_code,
    };
    let end = controller.run(&leaderboard, 1).await?;
    tracing::debug!("Country leaderboard session ended: {:?}", end);

    Ok(())
}
