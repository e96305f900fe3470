use url::Url;

/// Rewrites legacy YouTube watch/player urls into directly embeddable form.
/// The embed prefix is injected from configuration.
pub struct YoutubeNormalizer {
    embed_prefix: String,
}

impl YoutubeNormalizer {
    pub fn new(embed_prefix: impl Into<String>) -> Self {
        Self {
            embed_prefix: embed_prefix.into(),
        }
    }

    /// Turns `.../v/<id>?...` into `<embed_prefix><id>`. Anything that is
    /// not a YouTube url, or is already in embed form, passes through
    /// unchanged. A YouTube url without a `/v/` marker is malformed input
    /// and also passes through unchanged. Idempotent.
    pub fn normalize(&self, video: Url) -> Url {
        let lower = video.as_str().to_lowercase();
        if !lower.contains("youtube.com") || lower.contains(&self.embed_prefix.to_lowercase()) {
            return video;
        }

        let raw = video.as_str();
        let id = match raw.find("/v/") {
            Some(at) => &raw[at + "/v/".len()..],
            None => return video,
        };
        let id = match id.find('?') {
            Some(at) => &id[..at],
            None => id,
        };

        match Url::parse(&format!("{}{}", self.embed_prefix, id)) {
            Ok(embed) => embed,
            Err(_) => video,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> YoutubeNormalizer {
        YoutubeNormalizer::new("https://www.youtube.com/embed/")
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn player_url_becomes_embed() {
        let out = normalizer().normalize(url("https://www.youtube.com/v/ABC123?x=1"));
        assert_eq!(out.as_str(), "https://www.youtube.com/embed/ABC123");
    }

    #[test]
    fn query_is_truncated() {
        let out = normalizer().normalize(url("https://youtube.com/v/dQw4w9WgXcQ?autoplay=1&t=10"));
        assert_eq!(out.as_str(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn embed_url_is_unchanged() {
        let embed = url("https://www.youtube.com/embed/ABC123");
        assert_eq!(normalizer().normalize(embed.clone()), embed);
    }

    #[test]
    fn renormalizing_is_idempotent() {
        let n = normalizer();
        let once = n.normalize(url("https://www.youtube.com/v/ABC123?x=1"));
        let twice = n.normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn watch_url_without_marker_is_unchanged() {
        let watch = url("https://www.youtube.com/watch?v=ABC123");
        assert_eq!(normalizer().normalize(watch.clone()), watch);
    }

    #[test]
    fn non_youtube_url_is_unchanged() {
        let other = url("https://vimeo.com/12345");
        assert_eq!(normalizer().normalize(other.clone()), other);
    }
}
