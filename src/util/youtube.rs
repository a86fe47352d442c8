use url::Url;

/// Extracts the video id from a YouTube watch, short or embed URL.
pub fn video_id(video: &str) -> Option<String> {
    let url = Url::parse(video).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");

    let id = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" => {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("embed") | Some("shorts") => segments.next().map(str::to_string),
                _ => None,
            }
        }
        _ => None,
    }?;

    (!id.is_empty()).then_some(id)
}

/// Thumbnail image for a YouTube video, if the URL is a YouTube link.
pub fn thumbnail_url(video: &str) -> Option<String> {
    video_id(video).map(|id| format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_watch_urls() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=abc123&t=4s"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn reads_short_and_embed_urls() {
        assert_eq!(video_id("https://youtu.be/xyz789"), Some("xyz789".to_string()));
        assert_eq!(
            video_id("https://youtube.com/embed/def456"),
            Some("def456".to_string())
        );
    }

    #[test]
    fn ignores_other_hosts() {
        assert_eq!(video_id("https://www.twitch.tv/videos/1"), None);
        assert_eq!(thumbnail_url("not a url"), None);
    }

    #[test]
    fn builds_thumbnail() {
        assert_eq!(
            thumbnail_url("https://youtu.be/xyz789").as_deref(),
            Some("https://img.youtube.com/vi/xyz789/mqdefault.jpg")
        );
    }
}
