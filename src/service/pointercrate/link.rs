use url::Url;

/// Neighbouring page URLs announced by a `Links` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PageLinks {
    /// Parses a header of comma separated `<url>; rel=name` entries.
    ///
    /// `rel` values may be quoted. Relative URLs are resolved against `base`;
    /// entries that fail to parse are skipped.
    pub fn parse(header: &str, base: &Url) -> Self {
        let mut links = Self::default();

        for entry in header.split(',') {
            let mut parts = entry.split(';');

            let Some(target) = parts.next().map(str::trim) else {
                continue;
            };
            let Some(target) = target.strip_prefix('<').and_then(|t| t.strip_suffix('>')) else {
                continue;
            };
            let Ok(url) = base.join(target) else {
                continue;
            };

            let rel = parts.find_map(|param| {
                let (key, value) = param.split_once('=')?;
                (key.trim() == "rel").then(|| value.trim().trim_matches('"').to_string())
            });

            match rel.as_deref() {
                Some("next") => links.next = Some(url.to_string()),
                Some("prev") => links.prev = Some(url.to_string()),
                _ => {}
            }
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture::pointercrate::{links_header, BASE_URL};

    fn base() -> Url {
        Url::parse(BASE_URL).unwrap()
    }

    #[test]
    fn resolves_generated_header() {
        let header = links_header(
            Some("/api/v1/players/ranking/?limit=25&after=50"),
            Some("/api/v1/players/ranking/?limit=25&after=0"),
        );

        let links = PageLinks::parse(&header, &base());

        assert_eq!(
            links.next.as_deref(),
            Some("https://pointercrate.com/api/v1/players/ranking/?limit=25&after=50")
        );
        assert_eq!(
            links.prev.as_deref(),
            Some("https://pointercrate.com/api/v1/players/ranking/?limit=25&after=0")
        );
    }

    #[test]
    fn accepts_quoted_rel() {
        let header = r#"</api/v2/demons/?after=10>; rel="next", </api/v2/demons/>; rel="prev""#;

        let links = PageLinks::parse(header, &base());

        assert_eq!(
            links.next.as_deref(),
            Some("https://pointercrate.com/api/v2/demons/?after=10")
        );
        assert_eq!(links.prev.as_deref(), Some("https://pointercrate.com/api/v2/demons/"));
    }

    #[test]
    fn ignores_malformed_entries() {
        let links = PageLinks::parse("garbage; rel=next, <>; rel", &base());

        assert_eq!(links, PageLinks::default());
    }
}
