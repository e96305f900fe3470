use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use url::Url;

use crate::config::ScrapeConfig;

/// What a probed resource turned out to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Html,
    Image,
    Unknown,
}

pub fn build_client(config: &ScrapeConfig) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    if let Ok(accept) = HeaderValue::from_str(&config.accept) {
        headers.insert(ACCEPT, accept);
    }

    Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .connect_timeout(config.connect_timeout())
        .timeout(config.read_timeout())
        .gzip(true)
        .deflate(true)
        .build()
}

/// HEAD-probes the target and classifies it by declared content type.
///
/// The canonical url is whatever the server ultimately responded from, i.e.
/// post-redirect. HTTP error statuses still carry headers (many servers
/// serve 4xx/5xx pages that are themselves valid HTML), so classification
/// reads the content type regardless of status; only transport failures
/// degrade to `Unknown`. Never errors.
pub fn classify(client: &Client, url: &Url) -> (ResourceKind, Option<Url>) {
    let resp = match client.head(url.clone()).send() {
        Ok(resp) => resp,
        Err(err) => {
            log::debug!("{url}: probe failed: {err}");
            return (ResourceKind::Unknown, None);
        }
    };

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type.contains("text/html") {
        (ResourceKind::Html, Some(resp.url().clone()))
    } else if content_type.contains("image/") {
        (ResourceKind::Image, Some(resp.url().clone()))
    } else {
        log::debug!("{url}: unclassified content type {content_type:?}");
        (ResourceKind::Unknown, None)
    }
}

/// Fetches the full document body. Any failure degrades to `None`; the
/// caller falls back to an empty-field result.
pub fn fetch_page(client: &Client, url: &Url) -> Option<String> {
    let resp = match client.get(url.clone()).send() {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("{url}: fetch failed: {err}");
            return None;
        }
    };

    let status = resp.status();
    if !status.is_success() {
        log::debug!("{url}: fetch returned {status}");
        return None;
    }

    match resp.text() {
        Ok(body) => Some(body),
        Err(err) => {
            log::warn!("{url}: reading body failed: {err}");
            None
        }
    }
}

/// Declared content length of the target, 0 when absent or unparseable.
pub fn content_length(client: &Client, url: &Url) -> u64 {
    let resp = match client.head(url.clone()).send() {
        Ok(resp) => resp,
        Err(err) => {
            log::debug!("{url}: probe failed: {err}");
            return 0;
        }
    };

    resp.headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
