use url::Url;

use crate::error::api::ApiError;

/// Largest `limit` Pointercrate accepts.
pub const MAX_LIMIT: u32 = 100;

/// A paginated Pointercrate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Demons ordered by list position.
    ListedDemons,
    /// All demons, including unlisted ones.
    Demons,
    PlayerRanking,
    Records,
    NationRanking,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::ListedDemons => "api/v2/demons/listed/",
            Resource::Demons => "api/v2/demons/",
            Resource::PlayerRanking => "api/v1/players/ranking/",
            Resource::Records => "api/v1/records/",
            Resource::NationRanking => "api/v1/nationalities/ranking/",
        }
    }
}

/// Query against a paginated endpoint.
///
/// Parameters keep insertion order so generated URLs are stable.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub resource: Resource,
    params: Vec<(&'static str, String)>,
}

impl ListQuery {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            params: Vec::new(),
        }
    }

    fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.retain(|(existing, _)| *existing != key);
        self.params.push((key, value.to_string()));
        self
    }

    /// Page size, capped at what the API accepts.
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit.min(MAX_LIMIT))
    }

    /// Entries to skip, by position or id depending on the endpoint.
    pub fn after(self, after: u32) -> Self {
        self.param("after", after)
    }

    pub fn name_contains(self, name: &str) -> Self {
        self.param("name_contains", name)
    }

    /// ISO country code.
    pub fn nation(self, code: &str) -> Self {
        self.param("nation", code)
    }

    pub fn player(self, player_id: u64) -> Self {
        self.param("player", player_id)
    }

    pub fn demon_position(self, position: u32) -> Self {
        self.param("demon_position", position)
    }

    pub fn verifier_id(self, player_id: u64) -> Self {
        self.param("verifier_id", player_id)
    }

    pub fn progress(self, progress: u8) -> Self {
        self.param("progress", progress)
    }

    /// Absolute request URL against `base`.
    pub fn to_url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.join(self.resource.path())?;

        if !self.params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.params.iter().map(|(key, value)| (*key, value.as_str())));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://pointercrate.com/").unwrap()
    }

    #[test]
    fn builds_listed_demons_url() {
        let url = ListQuery::new(Resource::ListedDemons)
            .limit(25)
            .after(75)
            .to_url(&base())
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://pointercrate.com/api/v2/demons/listed/?limit=25&after=75"
        );
    }

    #[test]
    fn encodes_names() {
        let url = ListQuery::new(Resource::PlayerRanking)
            .name_contains("Dolphy & co")
            .to_url(&base())
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://pointercrate.com/api/v1/players/ranking/?name_contains=Dolphy+%26+co"
        );
    }

    #[test]
    fn later_value_replaces_earlier() {
        let url = ListQuery::new(Resource::Records)
            .limit(500)
            .limit(10)
            .to_url(&base())
            .unwrap();

        assert_eq!(url.query(), Some("limit=10"));
    }

    #[test]
    fn caps_limit() {
        let url = ListQuery::new(Resource::Records).limit(500).to_url(&base()).unwrap();

        assert_eq!(url.query(), Some("limit=100"));
    }

    #[test]
    fn omits_empty_query() {
        let url = ListQuery::new(Resource::Demons).to_url(&base()).unwrap();

        assert_eq!(url.as_str(), "https://pointercrate.com/api/v2/demons/");
    }
}
