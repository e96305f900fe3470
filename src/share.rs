use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct ShareCountEntry {
    like_count: i64,
}

/// Queries the configured like-count endpoint for the given url. Fails
/// soft: any transport, status or parse failure yields 0.
pub fn share_count(client: &Client, endpoint_template: &str, url: &Url) -> i64 {
    let encoded: String = url::form_urlencoded::byte_serialize(url.as_str().as_bytes()).collect();
    let endpoint = endpoint_template.replace("{url}", &encoded);

    let resp = match client.get(&endpoint).send() {
        Ok(resp) => resp,
        Err(err) => {
            log::debug!("{url}: share count request failed: {err}");
            return 0;
        }
    };

    if !resp.status().is_success() {
        log::debug!("{url}: share count endpoint returned {}", resp.status());
        return 0;
    }

    match resp.text() {
        Ok(body) => parse_share_count(&body),
        Err(err) => {
            log::debug!("{url}: reading share count body failed: {err}");
            0
        }
    }
}

fn parse_share_count(body: &str) -> i64 {
    serde_json::from_str::<Vec<ShareCountEntry>>(body)
        .ok()
        .and_then(|entries| entries.first().map(|entry| entry.like_count))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_like_count() {
        assert_eq!(parse_share_count(r#"[{"like_count": 42}]"#), 42);
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert_eq!(
            parse_share_count(r#"[{"like_count": 7, "share_count": 99}]"#),
            7
        );
    }

    #[test]
    fn empty_array_defaults_to_zero() {
        assert_eq!(parse_share_count("[]"), 0);
    }

    #[test]
    fn malformed_body_defaults_to_zero() {
        assert_eq!(parse_share_count("not json"), 0);
        assert_eq!(parse_share_count(r#"{"like_count": 3}"#), 0);
    }
}
