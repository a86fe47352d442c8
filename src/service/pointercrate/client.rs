use reqwest::{header::HeaderMap, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::{
    error::api::ApiError,
    model::pointercrate::{Demon, NationScore, RankedPlayer, Record},
    pagination::Page,
    service::pointercrate::{
        link::PageLinks,
        query::{ListQuery, Resource, MAX_LIMIT},
    },
};

/// Error body Pointercrate sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<u32>,
    message: String,
}

/// Read-only Pointercrate API client.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct PointercrateClient {
    http: reqwest::Client,
    base: Url,
}

impl PointercrateClient {
    /// Creates a client for the API rooted at `base`.
    ///
    /// # Returns
    /// - `Ok(PointercrateClient)` - Client ready for requests
    /// - `Err(ApiError::Url)` - `base` is not an absolute URL
    pub fn new(http: reqwest::Client, base: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http,
            base: Url::parse(base)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Permalink to a demon's page on the website.
    pub fn demon_permalink(&self, demon_id: u64) -> String {
        format!(
            "{}/demonlist/permalink/{}/",
            self.base.as_str().trim_end_matches('/'),
            demon_id
        )
    }

    /// Fetches one page of `query`.
    pub async fn fetch_page<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<Page<T>, ApiError> {
        let url = query.to_url(&self.base)?;
        self.get(url).await
    }

    /// Fetches a page by a URL taken from a previous page's links.
    pub async fn fetch_link<T: DeserializeOwned>(&self, link: &str) -> Result<Page<T>, ApiError> {
        let url = self.base.join(link)?;
        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Page<T>, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let links = links_header(response.headers());
        let body = response.text().await?;

        decode_page(status, links.as_deref(), &body, &self.base)
    }

    /// Demon at a list position, if the list reaches that far.
    pub async fn demon_at_position(&self, position: u32) -> Result<Option<Demon>, ApiError> {
        let query = ListQuery::new(Resource::ListedDemons)
            .limit(1)
            .after(position.saturating_sub(1));
        let page: Page<Demon> = self.fetch_page(&query).await?;

        Ok(page
            .items
            .into_iter()
            .find(|demon| demon.position == Some(position)))
    }

    /// Demons whose name contains `name`, case insensitively.
    pub async fn search_demons(&self, name: &str, limit: u32) -> Result<Page<Demon>, ApiError> {
        let query = ListQuery::new(Resource::Demons)
            .name_contains(name.trim())
            .limit(limit);
        self.fetch_page(&query).await
    }

    /// Players whose name contains `name`.
    pub async fn search_players(&self, name: &str, limit: u32) -> Result<Page<RankedPlayer>, ApiError> {
        let query = ListQuery::new(Resource::PlayerRanking)
            .name_contains(name.trim())
            .limit(limit);
        self.fetch_page(&query).await
    }

    /// Earliest full completion of the demon at `position`.
    pub async fn first_victor(&self, position: u32) -> Result<Option<Record>, ApiError> {
        let query = ListQuery::new(Resource::Records)
            .progress(100)
            .demon_position(position)
            .limit(1);
        let page: Page<Record> = self.fetch_page(&query).await?;

        Ok(page.items.into_iter().next())
    }

    /// Approved records of a player, following links until exhausted.
    pub async fn player_records(&self, player_id: u64) -> Result<Vec<Record>, ApiError> {
        let query = ListQuery::new(Resource::Records)
            .player(player_id)
            .limit(MAX_LIMIT);
        self.collect(&query).await
    }

    /// Demons verified by a player.
    pub async fn verified_demons(&self, player_id: u64) -> Result<Vec<Demon>, ApiError> {
        let query = ListQuery::new(Resource::Demons)
            .verifier_id(player_id)
            .limit(MAX_LIMIT);
        self.collect(&query).await
    }

    /// Every nation with a score.
    pub async fn all_nations(&self) -> Result<Vec<NationScore>, ApiError> {
        let query = ListQuery::new(Resource::NationRanking).limit(MAX_LIMIT);
        self.collect(&query).await
    }

    /// One page of the player ranking, optionally restricted to a nation.
    pub async fn player_ranking(
        &self,
        limit: u32,
        after: u32,
        nation: Option<&str>,
    ) -> Result<Page<RankedPlayer>, ApiError> {
        let mut query = ListQuery::new(Resource::PlayerRanking).limit(limit).after(after);
        if let Some(code) = nation {
            query = query.nation(code);
        }
        self.fetch_page(&query).await
    }

    /// Follows `next` links from `query` and concatenates every page.
    async fn collect<T: DeserializeOwned>(&self, query: &ListQuery) -> Result<Vec<T>, ApiError> {
        let mut page: Page<T> = self.fetch_page(query).await?;
        let mut items = Vec::new();

        loop {
            let next = page.next.take();
            items.append(&mut page.items);

            match next {
                Some(link) => page = self.fetch_link(&link).await?,
                None => return Ok(items),
            }
        }
    }
}

fn links_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("links")
        .or_else(|| headers.get("link"))
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Turns a raw response into a page or a typed failure.
pub fn decode_page<T: DeserializeOwned>(
    status: StatusCode,
    links: Option<&str>,
    body: &str,
    base: &Url,
) -> Result<Page<T>, ApiError> {
    if !status.is_success() {
        let (code, message) = match serde_json::from_str::<ErrorBody>(body) {
            Ok(error) => (error.code, error.message),
            Err(_) => (
                None,
                status.canonical_reason().unwrap_or("Unknown status").to_string(),
            ),
        };

        return Err(ApiError::Status {
            status: status.as_u16(),
            code,
            message,
        });
    }

    let items: Vec<T> = serde_json::from_str(body)?;
    let links = links
        .map(|header| PageLinks::parse(header, base))
        .unwrap_or_default();

    Ok(Page {
        items,
        more: links.next.is_some(),
        next: links.next,
        prev: links.prev,
    })
}
